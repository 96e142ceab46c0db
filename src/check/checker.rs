//! Grammar consistency checker.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{Document, Rule, RuleKind};

use super::symbols::{Namespace, SymbolTable, START_SYMBOL};

/// One advisory finding of the grammar checker.
///
/// Findings never abort rendering; the `Display` form is the line shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A token name defined more than once.
    DuplicateToken(String),
    /// A token production references an undefined token.
    MissingTokenReference(String),
    /// A syntax name other than `start` defined more than once.
    DuplicateSyntax(String),
    /// A syntax rule shares its name with a token.
    DuplicateTokenSyntax(String),
    /// A syntax production references an undefined symbol.
    MissingSyntaxReference(String),
    /// Count of distinct missing syntax references.
    MissingSyntaxSummary(usize),
    /// A token no production references.
    UnreferencedToken(String),
    /// A syntax rule no production references.
    UnreferencedSyntax(String),
    /// A reference span naming no known symbol.
    MissingNameReference(String),
}

impl Diagnostic {
    /// The symbol the finding is about, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Diagnostic::DuplicateToken(name)
            | Diagnostic::MissingTokenReference(name)
            | Diagnostic::DuplicateSyntax(name)
            | Diagnostic::DuplicateTokenSyntax(name)
            | Diagnostic::MissingSyntaxReference(name)
            | Diagnostic::UnreferencedToken(name)
            | Diagnostic::UnreferencedSyntax(name)
            | Diagnostic::MissingNameReference(name) => Some(name),
            Diagnostic::MissingSyntaxSummary(_) => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateToken(name) => {
                write!(f, "Error: Duplicate token name '{}'.", name)
            }
            Diagnostic::MissingTokenReference(name) => {
                write!(f, "Error: Token reference to missing token '{}'.", name)
            }
            Diagnostic::DuplicateSyntax(name) => {
                write!(f, "Error: Duplicate syntax name '{}'.", name)
            }
            Diagnostic::DuplicateTokenSyntax(name) => {
                write!(f, "Error: Duplicate token/syntax name '{}'.", name)
            }
            Diagnostic::MissingSyntaxReference(name) => {
                write!(f, "Error: Syntax reference to missing syntax '{}'.", name)
            }
            Diagnostic::MissingSyntaxSummary(count) => {
                write!(f, "Error: Missing {} syntax references.", count)
            }
            Diagnostic::UnreferencedToken(name) => {
                write!(f, "Error: Token '{}' is never referenced.", name)
            }
            Diagnostic::UnreferencedSyntax(name) => {
                write!(f, "Error: Syntax '{}' is never referenced.", name)
            }
            Diagnostic::MissingNameReference(name) => {
                write!(f, "Error: Missing name reference '{}'.", name)
            }
        }
    }
}

/// The ordered findings of one checker run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Check if the run produced no findings.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if there are no findings.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Findings in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over findings in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// One display line per finding.
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Consume the report into its findings.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl IntoIterator for CheckReport {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a CheckReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

/// Check a document's grammar for internal consistency.
///
/// Rules flagged `ignore` take part in no check. The document is never
/// mutated, so repeated runs produce identical reports.
pub fn check(document: &Document) -> CheckReport {
    let rules: Vec<&Rule> = document.rules().filter(|rule| !rule.ignore).collect();
    let tokens: Vec<&Rule> = rules
        .iter()
        .copied()
        .filter(|rule| rule.kind == RuleKind::Token)
        .collect();
    let syntaxes: Vec<&Rule> = rules
        .iter()
        .copied()
        .filter(|rule| rule.kind == RuleKind::Syntax)
        .collect();

    let mut checker = Checker::new();
    checker.define_tokens(&tokens);
    checker.resolve_token_references(&tokens);
    checker.define_syntaxes(&syntaxes);
    checker.resolve_syntax_references(&syntaxes);
    checker.report_unreferenced();
    checker.resolve_name_references(document);

    log::debug!(
        "checked {} token and {} syntax symbols: {} finding(s)",
        checker.tokens.len(),
        checker.syntaxes.len(),
        checker.diagnostics.len()
    );

    CheckReport {
        diagnostics: checker.diagnostics,
    }
}

struct Checker {
    tokens: SymbolTable,
    syntaxes: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl Checker {
    fn new() -> Self {
        Self {
            tokens: SymbolTable::new(Namespace::Token),
            syntaxes: SymbolTable::new(Namespace::Syntax),
            diagnostics: Vec::new(),
        }
    }

    fn define_tokens(&mut self, tokens: &[&Rule]) {
        for rule in tokens {
            if !self.tokens.insert(&rule.name) {
                self.diagnostics
                    .push(Diagnostic::DuplicateToken(rule.name.clone()));
            }
        }
    }

    fn resolve_token_references(&mut self, tokens: &[&Rule]) {
        let mut missing = BTreeSet::new();
        for rule in tokens {
            for name in rule.references() {
                if !self.tokens.mark_referenced(name) {
                    missing.insert(name.to_string());
                }
            }
        }
        self.diagnostics
            .extend(missing.into_iter().map(Diagnostic::MissingTokenReference));
    }

    fn define_syntaxes(&mut self, syntaxes: &[&Rule]) {
        for rule in syntaxes {
            let name = rule.name.as_str();
            if !self.syntaxes.insert(name) && name != START_SYMBOL {
                self.diagnostics
                    .push(Diagnostic::DuplicateSyntax(name.to_string()));
            }
            if name != START_SYMBOL && self.tokens.contains(name) {
                self.diagnostics
                    .push(Diagnostic::DuplicateTokenSyntax(name.to_string()));
            }
        }
    }

    fn resolve_syntax_references(&mut self, syntaxes: &[&Rule]) {
        let mut missing = BTreeSet::new();
        for rule in syntaxes {
            for name in rule.references() {
                if !self.syntaxes.mark_referenced(name) && !self.tokens.mark_referenced(name) {
                    missing.insert(name.to_string());
                }
            }
        }

        let count = missing.len();
        self.diagnostics
            .extend(missing.into_iter().map(Diagnostic::MissingSyntaxReference));
        if count > 0 {
            self.diagnostics
                .push(Diagnostic::MissingSyntaxSummary(count));
        }
    }

    fn report_unreferenced(&mut self) {
        let tokens = self
            .tokens
            .unreferenced()
            .map(|name| Diagnostic::UnreferencedToken(name.to_string()));
        let syntaxes = self
            .syntaxes
            .unreferenced()
            .map(|name| Diagnostic::UnreferencedSyntax(name.to_string()));
        let findings: Vec<_> = tokens.chain(syntaxes).collect();
        self.diagnostics.extend(findings);
    }

    fn resolve_name_references(&mut self, document: &Document) {
        for name in document.inlines().filter_map(|inline| inline.reference()) {
            if !self.tokens.contains(name) && !self.syntaxes.contains(name) {
                self.diagnostics
                    .push(Diagnostic::MissingNameReference(name.to_string()));
            }
        }
    }
}

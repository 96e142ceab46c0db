//! Grammar rule and term types.

use serde::{Deserialize, Serialize};

/// A grammar block: token and syntax rule definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    /// Rules in document order
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Grammar {
    /// Create a new empty grammar block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Builder-style variant of [`Grammar::add_rule`].
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Rules in presentation order: token rules first, then syntax rules,
    /// each group keeping document order.
    pub fn presentation_order(&self) -> impl Iterator<Item = &Rule> {
        let tokens = self.rules.iter().filter(|r| r.kind == RuleKind::Token);
        let syntaxes = self.rules.iter().filter(|r| r.kind == RuleKind::Syntax);
        tokens.chain(syntaxes)
    }
}

/// Rule namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Lexical rule
    Token,
    /// Syntactic rule
    Syntax,
}

/// A named grammar rule with its alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Namespace of the rule
    pub kind: RuleKind,

    /// Rule name
    pub name: String,

    /// Excluded from consistency checks; still rendered
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,

    /// Alternatives in order
    #[serde(default)]
    pub productions: Vec<Production>,
}

impl Rule {
    /// Create a rule with no productions.
    pub fn new(kind: RuleKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            ignore: false,
            productions: Vec::new(),
        }
    }

    /// Shorthand for a token rule.
    pub fn token(name: impl Into<String>) -> Self {
        Self::new(RuleKind::Token, name)
    }

    /// Shorthand for a syntax rule.
    pub fn syntax(name: impl Into<String>) -> Self {
        Self::new(RuleKind::Syntax, name)
    }

    /// Mark the rule as ignored by the checker.
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Add an alternative.
    pub fn with_production(mut self, terms: Vec<Term>) -> Self {
        self.productions.push(Production::new(terms));
        self
    }

    /// Names of every non-terminal referenced anywhere in the rule, in order
    /// of appearance (repeats included).
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for production in &self.productions {
            for term in &production.terms {
                term.collect_non_terminals(&mut names);
            }
        }
        names
    }
}

/// One alternative of a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Production {
    /// Terms in order
    pub terms: Vec<Term>,
}

impl Production {
    /// Create a production from terms.
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }
}

/// A grammar expression node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Term {
    /// Reference to another rule
    NonTerminal {
        /// Referenced rule name
        name: String,
    },

    /// Literal text
    Terminal {
        /// Literal
        literal: String,
    },

    /// Descriptive placeholder
    Meta {
        /// Placeholder label
        label: String,
    },

    /// Zero or more
    Star {
        /// Repeated term
        term: Box<Term>,
    },

    /// One or more
    Plus {
        /// Repeated term
        term: Box<Term>,
    },

    /// Optional
    Opt {
        /// Optional term
        term: Box<Term>,
    },

    /// Parenthesised sequence
    Group {
        /// Grouped terms
        terms: Vec<Term>,
    },

    /// Character range
    Range {
        /// Lower bound
        low: Box<Term>,
        /// Upper bound
        high: Box<Term>,
    },
}

impl Term {
    /// Non-terminal reference.
    pub fn nt(name: impl Into<String>) -> Self {
        Term::NonTerminal { name: name.into() }
    }

    /// Terminal literal.
    pub fn t(literal: impl Into<String>) -> Self {
        Term::Terminal {
            literal: literal.into(),
        }
    }

    /// Meta placeholder.
    pub fn meta(label: impl Into<String>) -> Self {
        Term::Meta {
            label: label.into(),
        }
    }

    /// Zero or more repetitions of `term`.
    pub fn star(term: Term) -> Self {
        Term::Star {
            term: Box::new(term),
        }
    }

    /// One or more repetitions of `term`.
    pub fn plus(term: Term) -> Self {
        Term::Plus {
            term: Box::new(term),
        }
    }

    /// Optional `term`.
    pub fn opt(term: Term) -> Self {
        Term::Opt {
            term: Box::new(term),
        }
    }

    /// Parenthesised group.
    pub fn group(terms: Vec<Term>) -> Self {
        Term::Group { terms }
    }

    /// Range `low..high`.
    pub fn range(low: Term, high: Term) -> Self {
        Term::Range {
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    fn collect_non_terminals<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Term::NonTerminal { name } => out.push(name),
            Term::Terminal { .. } | Term::Meta { .. } => {}
            Term::Star { term } | Term::Plus { term } | Term::Opt { term } => {
                term.collect_non_terminals(out)
            }
            Term::Group { terms } => {
                for term in terms {
                    term.collect_non_terminals(out);
                }
            }
            Term::Range { low, high } => {
                low.collect_non_terminals(out);
                high.collect_non_terminals(out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_walk_nested_terms() {
        let rule = Rule::syntax("expr")
            .with_production(vec![
                Term::nt("term"),
                Term::star(Term::group(vec![Term::t("+"), Term::nt("term")])),
            ])
            .with_production(vec![Term::range(Term::nt("lo"), Term::nt("hi"))]);

        assert_eq!(rule.references(), vec!["term", "term", "lo", "hi"]);
    }

    #[test]
    fn test_presentation_order_puts_tokens_first() {
        let grammar = Grammar::new()
            .with_rule(Rule::syntax("start"))
            .with_rule(Rule::token("digit"))
            .with_rule(Rule::syntax("expr"))
            .with_rule(Rule::token("letter"));

        let names: Vec<_> = grammar
            .presentation_order()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["digit", "letter", "start", "expr"]);
    }

    #[test]
    fn test_rule_json_shape() {
        let json = r#"{
            "kind": "token",
            "name": "hex",
            "ignore": true,
            "productions": [[
                {"kind": "terminal", "literal": "0x"},
                {"kind": "plus", "term": {"kind": "nonTerminal", "name": "hexDigit"}}
            ]]
        }"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.kind, RuleKind::Token);
        assert!(rule.ignore);
        assert_eq!(rule.productions[0].terms.len(), 2);
        assert_eq!(rule.references(), vec!["hexDigit"]);
    }
}

//! Symbol tables for grammar rule names.

use indexmap::IndexMap;
use std::fmt;

/// The bootstrap symbol; exempt from the duplicate-syntax and
/// never-referenced checks.
pub const START_SYMBOL: &str = "start";

/// The two disjoint rule namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Token rules
    Token,
    /// Syntax rules
    Syntax,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Token => f.write_str("token"),
            Namespace::Syntax => f.write_str("syntax"),
        }
    }
}

/// Maps symbol names to their "referenced" flag.
///
/// Iteration follows insertion order, so reports built from the table are
/// deterministic.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    namespace: Namespace,
    symbols: IndexMap<String, bool>,
}

impl SymbolTable {
    /// Create an empty table for a namespace.
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            symbols: IndexMap::new(),
        }
    }

    /// The namespace this table covers.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Register a symbol as unreferenced.
    ///
    /// Returns `false` if the name was already present; the existing entry is
    /// kept untouched.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.symbols.contains_key(name) {
            return false;
        }
        self.symbols.insert(name.to_string(), false);
        true
    }

    /// Check if a symbol is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Mark a symbol as referenced. Returns `false` if it is not defined.
    pub fn mark_referenced(&mut self, name: &str) -> bool {
        match self.symbols.get_mut(name) {
            Some(referenced) => {
                *referenced = true;
                true
            }
            None => false,
        }
    }

    /// The referenced flag of a symbol, if defined.
    pub fn is_referenced(&self, name: &str) -> Option<bool> {
        self.symbols.get(name).copied()
    }

    /// Symbols never marked referenced, excluding [`START_SYMBOL`], in
    /// insertion order.
    pub fn unreferenced(&self) -> impl Iterator<Item = &str> {
        self.symbols
            .iter()
            .filter(|(name, referenced)| !**referenced && name.as_str() != START_SYMBOL)
            .map(|(name, _)| name.as_str())
    }

    /// Defined names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    /// Number of defined symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if no symbol is defined.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_single_entry() {
        let mut table = SymbolTable::new(Namespace::Token);
        assert!(table.insert("X"));
        assert!(!table.insert("X"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.namespace(), Namespace::Token);
    }

    #[test]
    fn test_mark_referenced() {
        let mut table = SymbolTable::new(Namespace::Syntax);
        table.insert("expr");
        assert_eq!(table.is_referenced("expr"), Some(false));
        assert!(table.mark_referenced("expr"));
        assert_eq!(table.is_referenced("expr"), Some(true));
        assert!(!table.mark_referenced("missing"));
        assert_eq!(table.is_referenced("missing"), None);
    }

    #[test]
    fn test_unreferenced_skips_start_and_keeps_order() {
        let mut table = SymbolTable::new(Namespace::Syntax);
        for name in ["zeta", START_SYMBOL, "alpha", "used"] {
            table.insert(name);
        }
        table.mark_referenced("used");

        let unreferenced: Vec<_> = table.unreferenced().collect();
        assert_eq!(unreferenced, vec!["zeta", "alpha"]);
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["zeta", "start", "alpha", "used"]);
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::Token.to_string(), "token");
        assert_eq!(Namespace::Syntax.to_string(), "syntax");
    }
}

//! Grammar consistency checking.
//!
//! The checker builds one symbol table per rule namespace, resolves every
//! non-terminal reference against them and reports what does not line up.
//! Findings are advisory: rendering proceeds whatever the report says.

mod checker;
mod symbols;

pub use checker::{check, CheckReport, Diagnostic};
pub use symbols::{Namespace, SymbolTable, START_SYMBOL};

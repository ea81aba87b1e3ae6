use crate::token::{LexicalUnit, Symbol, SymbolValue};
use std::collections::BTreeMap;
use std::fmt;

/// The variables of a token stream, each with the line of its first
/// occurrence, kept in lexicographical order for reporting.
#[derive(Debug, Default)]
pub struct VariableTable {
    variables: BTreeMap<String, usize>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the symbol if it is a variable name not seen before. Any
    /// other symbol is ignored.
    pub fn record(&mut self, symbol: &Symbol) {
        if symbol.kind != LexicalUnit::VarName {
            return;
        }
        if let SymbolValue::Text(name) = &symbol.value {
            self.variables.entry(name.clone()).or_insert(symbol.line);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.variables.iter().map(|(name, line)| (name.as_str(), *line))
    }
}

impl fmt::Display for VariableTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, line) in self.variables.iter() {
            writeln!(f, "{}\t{}", name, line)?;
        }
        Ok(())
    }
}

use super::{Word, SENTINEL};
use std::collections::BTreeMap;

/// ## Symbol table
///
/// Labels mapped to their locations, built during pass 1 and read-only
/// in pass 2. A label defined twice is poisoned with [`SENTINEL`] and
/// never reverts to a valid location.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Word>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn insert(&mut self, symbol: &str, loc: Word) {
        match self.symbols.get_mut(symbol) {
            Some(existing) => *existing = SENTINEL,
            None => {
                self.symbols.insert(symbol.to_string(), loc);
            }
        }
    }

    /// The caller distinguishes a multiply-defined label by comparing
    /// the location against [`SENTINEL`].
    pub fn lookup(&self, symbol: &str) -> Option<Word> {
        self.symbols.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Symbol Table:")?;
        writeln!(f)?;
        writeln!(f, "Symbol#\tSymbol\tLocation")?;
        for (count, (symbol, loc)) in self.symbols.iter().enumerate() {
            writeln!(f, "{}\t{}\t{}", count, symbol, loc)?;
        }
        writeln!(f, "---------------------------------------------")
    }
}

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const NUM_SYMBOLS: usize = 20;

/// The canonical amino acid symbols in the fixed column order of the
/// frequency table.
pub const AMINO_ACIDS: [u8; NUM_SYMBOLS] = *b"ACDEFGHIKLMNPQRSTVWY";

static SYMBOL_INDEX: Lazy<HashMap<u8, usize>> = Lazy::new(|| {
    AMINO_ACIDS
        .iter()
        .enumerate()
        .map(|(index, &symbol)| (symbol, index))
        .collect()
});

/// Column index of a symbol, or None for anything outside the canonical
/// alphabet. Lookups are case-sensitive.
pub fn symbol_index(symbol: u8) -> Option<usize> {
    SYMBOL_INDEX.get(&symbol).copied()
}

use crate::freq::alphabet::symbol_index;
use crate::utils::Result;
use std::collections::{HashMap, HashSet};

/// Presentation-only markers for (position, amino acid) cells, parsed from
/// `position:symbols` entries, e.g. "45:KR,101:Y".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightSpec {
    marks: HashMap<u32, HashSet<u8>>,
}

impl HighlightSpec {
    pub fn from_string(encoding: &str) -> Result<Self> {
        if encoding.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut marks: HashMap<u32, HashSet<u8>> = HashMap::new();
        for entry in encoding.split(',') {
            let (position, symbols) = entry
                .split_once(':')
                .ok_or_else(|| format!("Invalid highlight entry: {}", entry))?;
            let position: u32 = position
                .trim()
                .parse()
                .map_err(|_| format!("Invalid highlight position: {}", position))?;
            let symbols = symbols.trim();
            if symbols.is_empty() {
                return Err(format!("Highlight entry without symbols: {}", entry));
            }
            for symbol in symbols.bytes() {
                if symbol_index(symbol).is_none() {
                    return Err(format!(
                        "Invalid highlight symbol '{}' in entry: {}",
                        symbol as char, entry
                    ));
                }
                marks.entry(position).or_default().insert(symbol);
            }
        }
        Ok(Self { marks })
    }

    pub fn contains(&self, position: u32, symbol: u8) -> bool {
        self.marks
            .get(&position)
            .is_some_and(|symbols| symbols.contains(&symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_entries() {
        let spec = HighlightSpec::from_string("45:KR,101:Y").unwrap();
        assert!(spec.contains(45, b'K'));
        assert!(spec.contains(45, b'R'));
        assert!(spec.contains(101, b'Y'));
        assert!(!spec.contains(45, b'Y'));
        assert!(!spec.contains(101, b'K'));
    }

    #[test]
    fn empty_encoding_means_no_marks() {
        let spec = HighlightSpec::from_string("").unwrap();
        assert!(spec.is_empty());
        assert!(!spec.contains(1, b'A'));
    }

    #[test]
    fn rejects_entry_without_separator() {
        assert!(HighlightSpec::from_string("45KR").is_err());
    }

    #[test]
    fn rejects_non_numeric_position() {
        assert!(HighlightSpec::from_string("pos:K").is_err());
    }

    #[test]
    fn rejects_non_canonical_symbol() {
        let result = HighlightSpec::from_string("45:B");
        assert!(result.unwrap_err().contains("Invalid highlight symbol"));
    }

    #[test]
    fn rejects_entry_without_symbols() {
        assert!(HighlightSpec::from_string("45:").is_err());
    }
}

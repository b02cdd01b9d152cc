use crate::freq::alphabet::{symbol_index, NUM_SYMBOLS};
use crate::freq::table::FrequencyTable;
use crate::utils::Result;

/// Per-position substitution counts relative to a fixed reference sequence.
#[derive(Debug)]
pub struct MutationCounts {
    reference: Vec<u8>,
    counts: Vec<[u64; NUM_SYMBOLS]>,
    num_counted: u64,
}

impl MutationCounts {
    pub fn new(reference: &str) -> Self {
        Self {
            reference: reference.as_bytes().to_vec(),
            counts: vec![[0; NUM_SYMBOLS]; reference.len()],
            num_counted: 0,
        }
    }

    pub fn num_counted(&self) -> u64 {
        self.num_counted
    }

    /// Record one variant sequence. Only positions that differ from the
    /// reference are counted; a mismatch symbol outside the canonical
    /// alphabet has no column and increments nothing.
    pub fn add(&mut self, sequence: &str) -> Result<()> {
        if sequence.len() != self.reference.len() {
            return Err(format!(
                "sequence length {} does not match reference length {}",
                sequence.len(),
                self.reference.len()
            ));
        }

        for (position, (&expected, &observed)) in self
            .reference
            .iter()
            .zip(sequence.as_bytes())
            .enumerate()
        {
            if expected != observed {
                if let Some(index) = symbol_index(observed) {
                    self.counts[position][index] += 1;
                }
            }
        }
        self.num_counted += 1;
        Ok(())
    }

    /// Convert counts to frequencies. Fails if no sequences were counted,
    /// so that no output is ever produced for an empty batch.
    pub fn into_table(self) -> Result<FrequencyTable> {
        if self.num_counted == 0 {
            return Err("No valid sequences were counted".to_string());
        }

        let total = self.num_counted as f64;
        Ok(FrequencyTable::from_rows(self.counts.iter().map(|counts| {
            let mut freqs = [0.0; NUM_SYMBOLS];
            for (freq, &count) in freqs.iter_mut().zip(counts) {
                *freq = count as f64 / total;
            }
            freqs
        })))
    }
}

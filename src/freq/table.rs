use crate::freq::alphabet::{AMINO_ACIDS, NUM_SYMBOLS};
use crate::utils::Result;
use std::collections::BTreeMap;
use std::io::{Read, Write};

pub type FreqRow = [f64; NUM_SYMBOLS];

/// Mutation frequencies keyed by 1-indexed reference position. Rows carry
/// one frequency per canonical amino acid, in fixed column order.
#[derive(Debug, Default, PartialEq)]
pub struct FrequencyTable {
    rows: BTreeMap<u32, FreqRow>,
}

impl FrequencyTable {
    pub fn from_rows(rows: impl IntoIterator<Item = FreqRow>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| (index as u32 + 1, row))
                .collect(),
        }
    }

    pub fn get(&self, position: u32) -> Option<&FreqRow> {
        self.rows.get(&position)
    }

    pub fn num_positions(&self) -> usize {
        self.rows.len()
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);

        let mut header = vec!["Position".to_string()];
        header.extend(AMINO_ACIDS.iter().map(|&symbol| (symbol as char).to_string()));
        writer.write_record(&header).map_err(|e| e.to_string())?;

        for (position, freqs) in &self.rows {
            let mut record = vec![position.to_string()];
            record.extend(freqs.iter().map(|freq| format!("{:.6}", freq)));
            writer.write_record(&record).map_err(|e| e.to_string())?;
        }
        writer.flush().map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| format!("Failed to read frequency table header: {}", e))?;
        let expected_symbols = AMINO_ACIDS.iter().map(|&symbol| symbol as char);
        let header_ok = headers.len() == NUM_SYMBOLS + 1
            && headers.get(0) == Some("Position")
            && headers
                .iter()
                .skip(1)
                .zip(expected_symbols)
                .all(|(header, symbol)| header.len() == 1 && header.starts_with(symbol));
        if !header_ok {
            return Err(format!(
                "Unexpected frequency table header: expected 'Position' followed by the {} amino acid columns",
                NUM_SYMBOLS
            ));
        }

        let mut rows = BTreeMap::new();
        for (row_number, record) in reader.records().enumerate() {
            let record = record
                .map_err(|e| format!("Failed to parse table row {}: {}", row_number + 1, e))?;
            let position: u32 = record
                .get(0)
                .unwrap_or("")
                .parse()
                .map_err(|_| format!("Invalid position at table row {}", row_number + 1))?;

            let mut freqs = [0.0; NUM_SYMBOLS];
            for (index, freq) in freqs.iter_mut().enumerate() {
                let field = record.get(index + 1).ok_or_else(|| {
                    format!("Missing frequency column at table row {}", row_number + 1)
                })?;
                *freq = field.parse().map_err(|_| {
                    format!("Invalid frequency '{}' at table row {}", field, row_number + 1)
                })?;
            }

            if rows.insert(position, freqs).is_some() {
                return Err(format!("Duplicate position {} in frequency table", position));
            }
        }
        Ok(Self { rows })
    }
}

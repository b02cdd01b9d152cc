use crate::freq::counts::MutationCounts;
use crate::utils::Result;
use std::io::Read;

/// Scan a sequence table and accumulate substitution counts against the
/// reference. The input must carry a header row with a "sequence" column;
/// records of the wrong length are skipped with a warning.
pub fn count_mutations<R: Read>(reader: R, reference: &str) -> Result<MutationCounts> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read input header: {}", e))?;
    let sequence_col = headers
        .iter()
        .position(|name| name == "sequence")
        .ok_or_else(|| "Input file has no 'sequence' column".to_string())?;

    let mut counts = MutationCounts::new(reference);
    let mut num_skipped: u64 = 0;
    for (record_number, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| format!("Failed to parse input record {}: {}", record_number + 1, e))?;
        let sequence = record.get(sequence_col).unwrap_or("");
        if let Err(reason) = counts.add(sequence) {
            log::warn!("Skipping record {}: {}", record_number + 1, reason);
            num_skipped += 1;
        }
    }

    log::debug!(
        "Scanned {} records, skipped {}",
        counts.num_counted() + num_skipped,
        num_skipped
    );
    Ok(counts)
}

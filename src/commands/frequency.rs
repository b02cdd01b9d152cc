use crate::cli::FrequencyArgs;
use crate::freq::count_mutations;
use crate::utils::{open_table_reader, Result};
use std::fs::File;

pub fn frequency(args: FrequencyArgs) -> Result<()> {
    let reader = open_table_reader(&args.input_path)?;
    let counts = count_mutations(reader, &args.reference)?;
    log::info!("Counted {} sequences", counts.num_counted());

    // Converting fails on an empty batch, before the output file is created
    let table = counts.into_table()?;
    let file = File::create(&args.output_path)
        .map_err(|e| format!("Failed to create {}: {}", args.output_path.display(), e))?;
    table.write(file)?;
    log::info!("Frequency table written to {}", args.output_path.display());
    Ok(())
}

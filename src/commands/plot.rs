use crate::cli::PlotArgs;
use crate::freq::FrequencyTable;
use crate::heatmap::build_heatmap;
use crate::utils::{open_table_reader, Result};
use gridplot::generate_image;
use std::path::Path;

pub fn plot(args: PlotArgs) -> Result<()> {
    let reader = open_table_reader(&args.table_path)?;
    let table = FrequencyTable::from_reader(reader)?;
    let heatmap = build_heatmap(&table, &args.positions, &args.highlights)?;
    generate_image(&heatmap, Path::new(&args.image_path))?;
    log::info!("Heatmap written to {}", args.image_path);
    Ok(())
}

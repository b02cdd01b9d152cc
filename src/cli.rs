use crate::freq::alphabet::symbol_index;
use crate::heatmap::HighlightSpec;
use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name="mutmap",
          version=env!("CARGO_PKG_VERSION"),
          about="Amino acid mutation frequency profiler and heatmap plotter",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Mutation Frequency Calculator")]
    Frequency(FrequencyArgs),
    #[clap(about = "Mutation Frequency Heatmap Plotter")]
    Plot(PlotArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("frequency")))]
#[command(arg_required_else_help(true))]
pub struct FrequencyArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "CSV file with a 'sequence' column of aligned variant sequences")]
    #[clap(value_name = "SEQUENCES")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'r')]
    #[clap(long = "reference")]
    #[clap(help = "Reference amino acid sequence")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_reference)]
    pub reference: String,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output path for the frequency table")]
    #[clap(value_name = "TABLE")]
    #[arg(value_parser = check_output_path)]
    pub output_path: PathBuf,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("plot")))]
#[command(arg_required_else_help(true))]
pub struct PlotArgs {
    #[clap(required = true)]
    #[clap(short = 't')]
    #[clap(long = "table")]
    #[clap(help = "Frequency table generated by the frequency subcommand")]
    #[clap(value_name = "TABLE")]
    #[arg(value_parser = check_file_exists)]
    pub table_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "positions")]
    #[clap(help = "Comma-separated 1-indexed positions to plot, in axis order")]
    #[clap(value_name = "POSITIONS")]
    #[clap(value_delimiter = ',')]
    pub positions: Vec<u32>,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub image_path: String,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "highlights")]
    #[clap(value_name = "HIGHLIGHTS")]
    #[clap(help = "Cells to mark, as comma-separated position:symbols entries (e.g. 45:KR,101:Y)")]
    #[clap(default_value = "")]
    #[arg(value_parser = highlights_from_string)]
    pub highlights: HighlightSpec,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn check_output_path(s: &str) -> Result<PathBuf> {
    check_prefix_path(s).map(PathBuf::from)
}

fn check_image_path(s: &str) -> Result<String> {
    let prefix_check = check_prefix_path(s)?;
    let path = Path::new(s);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") | Some("png") | Some("pdf") => Ok(prefix_check),
        _ => Err("Image must have an extension of .svg, .png, or .pdf".to_string()),
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_reference(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err("Reference sequence cannot be empty".to_string());
    }
    match s.bytes().find(|&symbol| symbol_index(symbol).is_none()) {
        Some(symbol) => Err(format!(
            "Reference sequence contains a non-canonical symbol: '{}'",
            symbol as char
        )),
        None => Ok(s.to_string()),
    }
}

fn highlights_from_string(s: &str) -> Result<HighlightSpec> {
    HighlightSpec::from_string(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_must_be_canonical() {
        assert!(check_reference("MKVLAY").is_ok());
        assert!(check_reference("").is_err());
        assert!(check_reference("MKB").is_err());
        assert!(check_reference("mkv").is_err());
    }

    #[test]
    fn image_path_requires_supported_extension() {
        assert!(check_image_path("out.svg").is_ok());
        assert!(check_image_path("out.png").is_ok());
        assert!(check_image_path("out.pdf").is_ok());
        assert!(check_image_path("out.jpg").is_err());
        assert!(check_image_path("out").is_err());
    }
}

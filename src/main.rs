use clap::Parser;
use mutmap::{
    cli::{init_verbose, Cli, Command},
    commands::{frequency, plot},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Frequency(_) => "frequency",
        Command::Plot(_) => "plot",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        subcommand_name
    );
    match cli.command {
        Command::Frequency(args) => frequency::frequency(args)?,
        Command::Plot(args) => plot::plot(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}

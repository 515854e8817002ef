use cedict_structurizer::convert;
use cedict_structurizer::render::OutputFormat;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "cedict-structurizer")]
#[command(version = "0.1.0")]
#[command(about = "Converts a CC-CEDICT dictionary into structured JSON or XML", long_about = None)]
struct Cli {
    /// Output format: json, xml or csv
    format: OutputFormat,

    /// CC-CEDICT dictionary file
    input_file: PathBuf,

    /// Output file, overwritten if it exists
    output_file: PathBuf,

    /// Log progress and statistics (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = convert::convert_file(&cli.input_file, &cli.output_file, cli.format)
        .with_context(|| {
            format!(
                "Could not convert {} to {}",
                cli.input_file.display(),
                cli.output_file.display()
            )
        })?;

    info!(
        "Wrote {} entries to {}",
        report.entries,
        cli.output_file.display()
    );
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use tempchart::{run_chart, spawn_line_reader, ChartConfig, ChartSettings, InputSource};

/// Chart a thermocouple temperature profile in real time.
#[derive(Parser, Debug)]
#[command(name = "tempchart", version, about)]
struct Cli {
    /// Read probe lines from this file or device instead of stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// JSON settings file (bounds, guide lines, palette, save policy)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut settings = match &cli.config {
        Some(path) => ChartSettings::load_json(path)?,
        None => ChartSettings::default(),
    };
    if let Some(title) = cli.title {
        settings.title = title;
    }

    let source = cli.input.map(InputSource::Path).unwrap_or_default();
    log::info!("reading temperatures from {source:?}");
    let rx = spawn_line_reader(source.open()?);

    run_chart(rx, ChartConfig::from_settings(settings))?;
    Ok(())
}

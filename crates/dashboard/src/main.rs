// File: crates/dashboard/src/main.rs
// Summary: CLI entry point: parse flags, set up logging, run the export pipeline, print a banner.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use dashboard::{run, Settings};

/// Render the sample analytics dashboard to one self-contained HTML file.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    /// Where to write the dashboard.
    #[clap(short, long, default_value = "dashboard.html")]
    output: PathBuf,
    /// Built-in theme preset (midnight, daylight, solarized-dark, high-contrast).
    #[clap(long, default_value = "midnight")]
    theme: String,
    /// TOML file overriding theme colors and fonts.
    #[clap(long)]
    theme_file: Option<PathBuf>,
    #[clap(long, default_value_t = 42)]
    seed: u64,
    /// Date the sample histories end at (YYYY-MM-DD); defaults to today.
    #[clap(long)]
    anchor_date: Option<NaiveDate>,
    /// Moving-average window of the price chart, in days.
    #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u16).range(1..))]
    ma_window: u16,
    /// Also dump every generated dataset as CSV into this directory.
    #[clap(long)]
    data_dir: Option<PathBuf>,
    /// Also write a PNG snapshot of every chart into this directory.
    #[cfg(feature = "png")]
    #[clap(long)]
    png_dir: Option<PathBuf>,
    /// Do not open the result in the desktop viewer.
    #[clap(long)]
    no_open: bool,
    /// More log output (-v info, -vv debug).
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut settings = Settings::new(cli.output, cli.anchor_date.unwrap_or_else(|| Utc::now().date_naive()));
    settings.theme = cli.theme;
    settings.theme_file = cli.theme_file;
    settings.seed = cli.seed;
    settings.ma_window = usize::from(cli.ma_window);
    settings.data_dir = cli.data_dir;
    #[cfg(feature = "png")]
    {
        settings.png_dir = cli.png_dir;
    }
    settings.open = !cli.no_open;

    let report = run(&settings)?;
    println!("Dashboard written to {}", report.output.display());
    println!("  {} charts, {} KPI cards, theme '{}'", report.charts, report.kpis, report.theme);
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` raises the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

// File: crates/dashboard/src/lib.rs
// Summary: The generate -> build -> compose -> export pipeline behind the `dashboard` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use dash_core::builders::ChartSpec;
use dash_core::chart::{Chart, ChartKind};
use dash_core::dataset::Dataset;
use dash_core::kpi::{summarize, KpiInputs};
use dash_core::layout::{compose, Dashboard, Header};
use dash_core::theme::{self, Theme, ThemeOverrides};
use dash_data::{Bundle, DataConfig, Generator};

pub const MONTHS: usize = 12;
pub const DAYS: usize = 90;
pub const SCATTER_POINTS: usize = 150;

/// One run's inputs, resolved from the command line.
#[derive(Clone, Debug)]
pub struct Settings {
    pub output: PathBuf,
    pub theme: String,
    pub theme_file: Option<PathBuf>,
    pub seed: u64,
    pub anchor: NaiveDate,
    pub ma_window: usize,
    pub data_dir: Option<PathBuf>,
    pub png_dir: Option<PathBuf>,
    pub open: bool,
}

impl Settings {
    pub fn new(output: impl Into<PathBuf>, anchor: NaiveDate) -> Self {
        Self {
            output: output.into(),
            theme: "midnight".into(),
            theme_file: None,
            seed: 42,
            anchor,
            ma_window: 7,
            data_dir: None,
            png_dir: None,
            open: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub output: PathBuf,
    pub charts: usize,
    pub kpis: usize,
    pub theme: String,
}

/// Preset by name, then the optional TOML override file on top.
pub fn load_theme(name: &str, file: Option<&Path>) -> Result<Theme> {
    let base = theme::find(name)?;
    let Some(path) = file else { return Ok(base) };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading theme file {}", path.display()))?;
    let overrides = ThemeOverrides::from_toml_str(&text).with_context(|| format!("parsing theme file {}", path.display()))?;
    Ok(overrides.resolve(base)?)
}

fn dataset_for(kind: ChartKind, data: &Bundle) -> &Dataset {
    match kind {
        ChartKind::Line | ChartKind::Area => &data.sales,
        ChartKind::Bar => &data.regional,
        ChartKind::GroupedBar => &data.performance,
        ChartKind::Scatter => &data.scatter,
        ChartKind::Donut => &data.device_share,
        ChartKind::TimeSeries => &data.time_series,
    }
}

/// Build every chart kind from its default spec; the moving-average window is configurable.
pub fn build_charts(data: &Bundle, theme: &Theme, ma_window: usize) -> Result<Vec<Chart>> {
    ChartKind::ALL
        .iter()
        .map(|&kind| {
            let spec = match ChartSpec::default_for(kind) {
                ChartSpec::TimeSeries(ts) => ChartSpec::TimeSeries(ts.with_window(ma_window)),
                other => other,
            };
            spec.build(dataset_for(kind, data), theme)
                .with_context(|| format!("building {} chart", kind.slug()))
        })
        .collect()
}

pub fn build_dashboard(settings: &Settings) -> Result<Dashboard> {
    let theme = load_theme(&settings.theme, settings.theme_file.as_deref())?;
    let generator = Generator::new(DataConfig::new(settings.seed, settings.anchor));
    let data = generator.bundle(MONTHS, DAYS, SCATTER_POINTS).context("generating sample data")?;
    info!(seed = settings.seed, anchor = %settings.anchor, "sample data generated");

    if let Some(dir) = &settings.data_dir {
        dash_data::write_all(data.datasets(), dir).with_context(|| format!("writing CSV files to {}", dir.display()))?;
    }

    let charts = build_charts(&data, &theme, settings.ma_window)?;
    let kpis = summarize(&KpiInputs {
        sales: &data.sales,
        regional: &data.regional,
        performance: &data.performance,
        prices: &data.time_series,
    })?;
    Ok(compose(&theme, Header::default(), kpis, charts)?)
}

/// Run the whole pipeline once and write the dashboard file.
pub fn run(settings: &Settings) -> Result<Report> {
    let dashboard = build_dashboard(settings)?;
    let output = dash_core::export(&dashboard, &settings.output)
        .with_context(|| format!("exporting dashboard to {}", settings.output.display()))?;

    if let Some(dir) = &settings.png_dir {
        snapshot(&dashboard, dir)?;
    }
    if settings.open {
        open_in_viewer(&output);
    }
    Ok(Report {
        output,
        charts: dashboard.chart_count(),
        kpis: dashboard.kpis.len(),
        theme: dashboard.theme.name.clone(),
    })
}

#[cfg(feature = "png")]
fn snapshot(dashboard: &Dashboard, dir: &Path) -> Result<()> {
    let written = dash_render_skia::snapshot_dashboard(dashboard, dir)?;
    info!(dir = %dir.display(), files = written.len(), "png snapshots written");
    Ok(())
}

#[cfg(not(feature = "png"))]
fn snapshot(_dashboard: &Dashboard, dir: &Path) -> Result<()> {
    anyhow::bail!("PNG snapshots to {} need the `png` feature", dir.display())
}

/// Hand the file to the desktop's default viewer. The file already exists, so a
/// launch failure is only logged.
pub fn open_in_viewer(path: &Path) {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    match cmd.arg(path).spawn() {
        Ok(_) => info!(path = %path.display(), "opened in viewer"),
        Err(err) => warn!(path = %path.display(), error = %err, "could not open viewer"),
    }
}

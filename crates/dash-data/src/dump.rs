// File: crates/dash-data/src/dump.rs
// Summary: CSV dumps of datasets (header row, dates as ISO-8601).

use std::fs;
use std::path::{Path, PathBuf};

use dash_core::dataset::Dataset;
use tracing::info;

use crate::error::Result;

pub fn write_csv(data: &Dataset, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    let columns: Vec<_> = data.columns().collect();
    wtr.write_record(columns.iter().map(|(name, _)| *name))?;
    for row in 0..data.len() {
        wtr.write_record(columns.iter().map(|(_, col)| col.cell(row).unwrap_or_default()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write every dataset to `<dir>/<dataset name>.csv`, creating `dir` if needed.
pub fn write_all<'a>(datasets: impl IntoIterator<Item = &'a Dataset>, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for data in datasets {
        let path = dir.join(format!("{}.csv", data.name()));
        write_csv(data, &path)?;
        written.push(path);
    }
    info!(dir = %dir.display(), files = written.len(), "datasets written as CSV");
    Ok(written)
}

// File: crates/dash-core/src/export.rs
// Summary: Writes the rendered dashboard document to disk through a sibling temp file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DashError, Result};
use crate::layout::Dashboard;

pub use crate::render::render_html;

/// Render `dashboard` and write it to `path`. Returns the written path.
///
/// The document goes to `.<name>.tmp` next to `path` first and is renamed into
/// place, so a failed export never leaves a partial file behind.
pub fn export(dashboard: &Dashboard, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref().to_path_buf();
    let html = render_html(dashboard)?;
    let tmp = temp_sibling(&path);
    debug!(tmp = %tmp.display(), bytes = html.len(), "writing dashboard");

    if let Err(source) = write_then_rename(&tmp, &path, html.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(DashError::Export { path, source });
    }
    info!(path = %path.display(), charts = dashboard.chart_count(), "dashboard exported");
    Ok(path)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dashboard.html".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

fn write_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp, path)
}

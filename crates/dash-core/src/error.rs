// File: crates/dash-core/src/error.rs
// Summary: Error taxonomy for dataset shape, theme, layout and export failures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    /// A dataset does not carry the columns a builder expects.
    #[error("dataset '{dataset}' has an unexpected shape: {detail}")]
    DatasetShape { dataset: String, detail: String },

    #[error("undefined theme role '{0}'")]
    UndefinedRole(String),

    #[error("unknown theme preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid color '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("failed to write dashboard to {path}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("theme file parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DashError {
    pub(crate) fn shape(dataset: &str, detail: impl Into<String>) -> Self {
        Self::DatasetShape { dataset: dataset.to_string(), detail: detail.into() }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;

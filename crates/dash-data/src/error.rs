// File: crates/dash-data/src/error.rs
// Summary: Errors raised while generating or dumping datasets.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Dataset(#[from] dash_core::DashError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;

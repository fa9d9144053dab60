// File: crates/dash-data/src/lib.rs
// Summary: Dataset providers: seeded synthetic tables for every dashboard chart, plus CSV dumps.

pub mod error;
pub mod generator;
pub mod dump;

pub use error::{DataError, Result};
pub use generator::{Bundle, DataConfig, Generator};
pub use dump::{write_all, write_csv};

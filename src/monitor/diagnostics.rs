//! Persistent energy diagnostics log
//!
//! Append-only CSV, one `<time>, <energy>` line per sample. The file is
//! opened in append mode for each write and released immediately; no handle
//! is held across steps. Write-only, no read-back, no rotation.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::monitor::MonitorError;

#[derive(Debug, Clone)]
pub struct EnergyLog {
    path: PathBuf,
}

impl EnergyLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `<time>, <energy>` line
    pub fn append(&self, time: f64, energy: f64) -> Result<(), MonitorError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{}, {}", time, energy)?;
        Ok(())
    }
}

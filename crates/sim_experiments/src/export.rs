//! Result export: CSV and JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use crate::metrics::SweepPointResult;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes one CSV row per swept value. Missing time means (no completed
/// trips) serialize as empty cells.
pub fn export_to_csv(path: &Path, results: &[SweepPointResult]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in results {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the whole result list as a pretty-printed JSON array.
pub fn export_to_json(path: &Path, results: &[SweepPointResult]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), results)?;
    Ok(())
}

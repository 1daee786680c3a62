// src/io/reporting.rs

use crate::simulation::engine::HistoryRecord;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Serializes every history record through an existing CSV writer.
pub fn write_history<W: Write>(wtr: &mut csv::Writer<W>, data: &[HistoryRecord]) -> csv::Result<()> {
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the session history to a CSV file.
pub fn export_history(file_path: &Path, data: &[HistoryRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(file_path)
        .with_context(|| format!("failed to create {}", file_path.display()))?;
    write_history(&mut wtr, data)
        .with_context(|| format!("failed to write {}", file_path.display()))?;

    println!(
        "Successfully exported {} rows to '{}'",
        data.len(),
        file_path.display()
    );
    Ok(())
}

//! CSV output. Result tables are always written comma-delimited with a
//! header line; `Null` and `Blank` cells become empty fields.

use std::path::Path;

use tracing::debug;

use csvclean_model::{Cell, EngineError, Result, Table};

pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|error| unwritable(path, error))?;
    writer
        .write_record(&table.columns)
        .map_err(|error| unwritable(path, error))?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(Cell::to_field))
            .map_err(|error| unwritable(path, error))?;
    }
    writer
        .flush()
        .map_err(|source| EngineError::UnwritableFile {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(table = %table.name, path = %path.display(), rows = table.row_count(), "wrote csv table");
    Ok(())
}

fn unwritable(path: &Path, error: csv::Error) -> EngineError {
    EngineError::UnwritableFile {
        path: path.to_path_buf(),
        source: std::io::Error::other(error),
    }
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::errors::EngineError;
use crate::model::{Metadata, Table};

/// Renders the rows of one table into a writer.
pub trait Formatter: Send + Sync {
    /// File extension including the dot.
    fn extension(&self) -> &'static str;

    fn write_table(
        &self,
        out: &mut dyn Write,
        table: &Table,
        rows: u64,
    ) -> Result<(), EngineError>;
}

/// Writes one file per table into a target directory.
pub struct DataWriter {
    directory: PathBuf,
    rows: u64,
    formatter: Box<dyn Formatter>,
}

impl DataWriter {
    pub fn new(directory: impl Into<PathBuf>, rows: u64, formatter: Box<dyn Formatter>) -> Self {
        Self {
            directory: directory.into(),
            rows,
            formatter,
        }
    }

    /// Write every table in `metadata`, or only the named subset when given.
    ///
    /// The output directory is created when missing; each table lands in
    /// `<directory>/<table><ext>`. Subset names that resolve to no table are
    /// skipped with a warning.
    pub fn write_all(
        &self,
        metadata: &Metadata,
        tables: Option<&[String]>,
    ) -> Result<(), EngineError> {
        std::fs::create_dir_all(&self.directory)?;
        match tables {
            Some(names) => {
                for name in names {
                    match metadata.table(name) {
                        Some(table) => self.write_table(table)?,
                        None => warn!(table = %name, "table not found in metadata"),
                    }
                }
            }
            None => {
                for table in metadata.tables() {
                    self.write_table(table)?;
                }
            }
        }
        Ok(())
    }

    fn write_table(&self, table: &Table) -> Result<(), EngineError> {
        let path = self
            .directory
            .join(format!("{}{}", table.name(), self.formatter.extension()));
        let file = BufWriter::new(File::create(&path)?);
        let mut counting = CountingWriter::new(file);
        self.formatter.write_table(&mut counting, table, self.rows)?;
        counting.flush()?;
        info!(
            table = %table.name(),
            rows = self.rows,
            bytes = counting.bytes_written(),
            path = %path.display(),
            "table written"
        );
        Ok(())
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

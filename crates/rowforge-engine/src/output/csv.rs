use std::io::Write;

use crate::errors::EngineError;
use crate::model::Table;
use crate::output::writer::Formatter;

/// Delimited text output with an optional header row.
pub struct CsvFormatter {
    delimiter: u8,
    write_header: bool,
}

impl CsvFormatter {
    pub fn new(delimiter: u8, write_header: bool) -> Self {
        Self {
            delimiter,
            write_header,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new(b',', true)
    }
}

impl Formatter for CsvFormatter {
    fn extension(&self) -> &'static str {
        ".csv"
    }

    fn write_table(
        &self,
        out: &mut dyn Write,
        table: &Table,
        rows: u64,
    ) -> Result<(), EngineError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(out);

        if self.write_header {
            writer.write_record(table.keys())?;
        }

        for row in table.generate(rows) {
            let row = row?;
            let record: Vec<String> = row.iter().map(|(_, value)| value.render()).collect();
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }
}

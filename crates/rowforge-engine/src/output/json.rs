use std::io::Write;

use serde_json::{Map, Value as JsonValue};

use crate::errors::EngineError;
use crate::model::Table;
use crate::output::writer::Formatter;

/// JSON Lines output: one object per row.
///
/// Values are rendered to their flat text forms before encoding, so a row
/// serializes the same whether it goes to CSV or JSON.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn extension(&self) -> &'static str {
        ".json"
    }

    fn write_table(
        &self,
        out: &mut dyn Write,
        table: &Table,
        rows: u64,
    ) -> Result<(), EngineError> {
        for row in table.generate(rows) {
            let row = row?;
            let mut object = Map::new();
            for (name, value) in row.iter() {
                object.insert(name.to_string(), JsonValue::String(value.render()));
            }
            serde_json::to_writer(&mut *out, &JsonValue::Object(object))?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

//! Writers that render resolved tables to flat files.

pub mod csv;
pub mod json;
pub mod writer;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::writer::{DataWriter, Formatter};

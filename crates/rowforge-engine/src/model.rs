use std::collections::HashMap;
use std::fmt;

use crate::errors::EngineError;
use crate::factory::BoxFactory;
use crate::value::Value;

/// A resolved column: a field name bound to its value factory.
pub struct Column {
    name: String,
    factory: BoxFactory,
}

impl Column {
    pub fn new(name: impl Into<String>, factory: BoxFactory) -> Self {
        Self {
            name: name.into(),
            factory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value for one row index; passes through to the bound factory.
    pub fn value(&self, index: u64) -> Result<Value, EngineError> {
        self.factory.value(index)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A resolved table: ordered columns plus naming metadata.
#[derive(Debug)]
pub struct Table {
    name: String,
    model: String,
    columns: Vec<Column>,
}

impl Table {
    /// A table with the given columns; when no model name is supplied a
    /// `<name>Model` placeholder is derived for downstream collaborators.
    pub fn new(name: impl Into<String>, model: Option<String>, columns: Vec<Column>) -> Self {
        let name = name.into();
        let model = model.unwrap_or_else(|| format!("{name}Model"));
        Self {
            name,
            model,
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Column names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name())
    }

    /// One row: every column's value at `index`, in declaration order.
    pub fn row(&self, index: u64) -> Result<Row, EngineError> {
        let mut values = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            values.push((column.name().to_string(), column.value(index)?));
        }
        Ok(Row { values })
    }

    /// Lazy sequence of the rows `0..n`.
    ///
    /// Rows are pure functions of their index, so the iterator can be
    /// re-created and re-run with identical output.
    pub fn generate(&self, n: u64) -> impl Iterator<Item = Result<Row, EngineError>> + '_ {
        (0..n).map(move |index| self.row(index))
    }
}

/// An ordered mapping from column name to generated value.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<(String, Value)>,
}

impl Row {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolved output model: tables keyed by name, insertion order preserved.
#[derive(Debug, Default)]
pub struct Metadata {
    tables: Vec<Table>,
    index: HashMap<String, usize>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, table: Table) {
        match self.index.get(table.name()) {
            Some(&slot) => self.tables[slot] = table,
            None => {
                self.index.insert(table.name().to_string(), self.tables.len());
                self.tables.push(table);
            }
        }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.index.get(name).map(|&slot| &self.tables[slot])
    }

    /// Tables in insertion order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|table| table.name())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::{ConstantFactory, CountingFactory};

    fn counter_table() -> Table {
        Table::new(
            "m_area",
            None,
            vec![
                Column::new("id", Box::new(CountingFactory::new(1))),
                Column::new("label", Box::new(ConstantFactory::new(Value::Text("x".into())))),
            ],
        )
    }

    #[test]
    fn rows_preserve_column_order() {
        let table = counter_table();
        let row = table.row(0).unwrap();
        let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["id", "label"]);
        assert_eq!(row.get("id"), Some(&Value::Int(1)));
    }

    #[test]
    fn generate_is_restartable() {
        let table = counter_table();

        let first: Vec<Row> = table.generate(5).collect::<Result<_, _>>().unwrap();
        let second: Vec<Row> = table.generate(5).collect::<Result<_, _>>().unwrap();

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_model_name_is_derived() {
        let table = counter_table();
        assert_eq!(table.model(), "m_areaModel");
    }

    #[test]
    fn metadata_preserves_insertion_order() {
        let mut metadata = Metadata::new();
        metadata.add(Table::new("b", None, Vec::new()));
        metadata.add(Table::new("a", None, Vec::new()));

        let names: Vec<&str> = metadata.names().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(metadata.table("a").is_some());
        assert!(metadata.table("c").is_none());
    }
}

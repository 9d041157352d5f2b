use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::source::SourceSet;

/// Validate internal consistency of a source document.
///
/// This checks:
/// - duplicate table names
/// - tables without fields
/// - duplicate field names within a table
/// - zero-length declarations
pub fn validate_source(source: &SourceSet) -> Result<()> {
    let mut tables = BTreeSet::new();

    for table in &source.tables {
        if !tables.insert(table.name.clone()) {
            return Err(Error::InvalidSource(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        if table.fields.is_empty() {
            return Err(Error::InvalidSource(format!(
                "table has no fields: {}",
                table.name
            )));
        }

        let mut fields = BTreeSet::new();
        for field in &table.fields {
            if !fields.insert(field.name.clone()) {
                return Err(Error::InvalidSource(format!(
                    "duplicate field name: {}.{}",
                    table.name, field.name
                )));
            }

            if field.length == Some(0) {
                return Err(Error::InvalidSource(format!(
                    "zero length declared for field: {}.{}",
                    table.name, field.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, FieldKind};
    use crate::source::TableSource;

    fn table(name: &str, fields: Vec<FieldDescriptor>) -> TableSource {
        TableSource::new(name, fields)
    }

    #[test]
    fn accepts_well_formed_source() {
        let source = SourceSet::new(vec![table(
            "m_area",
            vec![
                FieldDescriptor::new("id", FieldKind::Integer),
                FieldDescriptor::new("name", FieldKind::Text),
            ],
        )]);

        assert!(validate_source(&source).is_ok());
    }

    #[test]
    fn rejects_duplicate_table_names() {
        let source = SourceSet::new(vec![
            table("m_area", vec![FieldDescriptor::new("id", FieldKind::Integer)]),
            table("m_area", vec![FieldDescriptor::new("id", FieldKind::Integer)]),
        ]);

        let err = validate_source(&source).unwrap_err();
        assert!(err.to_string().contains("duplicate table name"));
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let source = SourceSet::new(vec![table(
            "m_area",
            vec![
                FieldDescriptor::new("id", FieldKind::Integer),
                FieldDescriptor::new("id", FieldKind::Text),
            ],
        )]);

        let err = validate_source(&source).unwrap_err();
        assert!(err.to_string().contains("duplicate field name"));
    }

    #[test]
    fn rejects_empty_tables() {
        let source = SourceSet::new(vec![table("m_area", Vec::new())]);

        let err = validate_source(&source).unwrap_err();
        assert!(err.to_string().contains("no fields"));
    }

    #[test]
    fn rejects_zero_length_fields() {
        let mut field = FieldDescriptor::new("name", FieldKind::Text);
        field.length = Some(0);
        let source = SourceSet::new(vec![table("m_area", vec![field])]);

        let err = validate_source(&source).unwrap_err();
        assert!(err.to_string().contains("zero length"));
    }
}

use chrono::{NaiveDate, NaiveDateTime};

/// Generated value for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(value) => Some(*value),
            Value::DateTime(value) => Some(value.date()),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    /// Render to the flat text form used by the writers.
    ///
    /// Nulls become empty strings and booleans `1`/`0`.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(value) => {
                if *value {
                    "1".to_string()
                } else {
                    "0".to_string()
                }
            }
            Value::Int(value) => value.to_string(),
            Value::Float(value) => value.to_string(),
            Value::Text(value) => value.clone(),
            Value::Date(value) => value.format("%Y-%m-%d").to_string(),
            Value::DateTime(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_flat_text_forms() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let datetime = date.and_hms_opt(13, 30, 9).unwrap();

        assert_eq!(Value::Null.render(), "");
        assert_eq!(Value::Bool(true).render(), "1");
        assert_eq!(Value::Bool(false).render(), "0");
        assert_eq!(Value::Int(-7).render(), "-7");
        assert_eq!(Value::Text("word".to_string()).render(), "word");
        assert_eq!(Value::Date(date).render(), "2024-01-05");
        assert_eq!(Value::DateTime(datetime).render(), "2024-01-05 13:30:09");
    }

    #[test]
    fn accessors_reject_mismatched_variants() {
        assert_eq!(Value::Text("x".to_string()).as_i64(), None);
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert!(Value::Null.is_null());
    }
}

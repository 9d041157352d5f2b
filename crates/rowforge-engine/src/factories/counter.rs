use crate::errors::EngineError;
use crate::factory::Factory;
use crate::value::Value;

/// Yields the same value for every index.
#[derive(Debug, Clone)]
pub struct ConstantFactory {
    value: Value,
}

impl ConstantFactory {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn null() -> Self {
        Self::new(Value::Null)
    }
}

impl Factory for ConstantFactory {
    fn value(&self, _index: u64) -> Result<Value, EngineError> {
        Ok(self.value.clone())
    }
}

/// Arithmetic counter: `start + step * index`.
#[derive(Debug, Clone)]
pub struct CountingFactory {
    start: i64,
    step: i64,
}

impl CountingFactory {
    pub fn new(start: i64) -> Self {
        Self { start, step: 1 }
    }

    pub fn with_step(start: i64, step: i64) -> Self {
        Self { start, step }
    }
}

impl Factory for CountingFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        Ok(Value::Int(counter_at(self.start, self.step, index)?))
    }
}

/// Counter rendered as text with a fixed prefix, for per-row-unique strings.
#[derive(Debug, Clone)]
pub struct PrefixedCountingFactory {
    prefix: String,
    start: i64,
}

impl PrefixedCountingFactory {
    pub fn new(prefix: impl Into<String>, start: i64) -> Self {
        Self {
            prefix: prefix.into(),
            start,
        }
    }
}

impl Factory for PrefixedCountingFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let value = counter_at(self.start, 1, index)?;
        Ok(Value::Text(format!("{}{}", self.prefix, value)))
    }
}

fn counter_at(start: i64, step: i64, index: u64) -> Result<i64, EngineError> {
    let index = i64::try_from(index).map_err(|_| {
        EngineError::InvalidFactory(format!("row index {index} exceeds counter range"))
    })?;
    step.checked_mul(index)
        .and_then(|offset| start.checked_add(offset))
        .ok_or_else(|| EngineError::InvalidFactory("counter overflow".to_string()))
}

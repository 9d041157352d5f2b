use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

use crate::errors::EngineError;
use crate::factory::{Factory, index_rng};
use crate::value::Value;

/// Uniform date in an inclusive window.
#[derive(Debug, Clone)]
pub struct RandomDateFactory {
    min: NaiveDate,
    max: NaiveDate,
    seed: u64,
}

impl RandomDateFactory {
    pub fn new(min: NaiveDate, max: NaiveDate, seed: u64) -> Result<Self, EngineError> {
        if min > max {
            return Err(EngineError::InvalidFactory(format!(
                "date window min {min} must be <= max {max}"
            )));
        }
        Ok(Self { min, max, seed })
    }
}

impl Factory for RandomDateFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        let span = (self.max - self.min).num_days();
        let offset = rng.random_range(0..=span);
        Ok(Value::Date(self.min + Duration::days(offset)))
    }
}

/// Uniform datetime in an inclusive window, second resolution.
#[derive(Debug, Clone)]
pub struct RandomDateTimeFactory {
    min: NaiveDateTime,
    max: NaiveDateTime,
    seed: u64,
}

impl RandomDateTimeFactory {
    pub fn new(min: NaiveDateTime, max: NaiveDateTime, seed: u64) -> Result<Self, EngineError> {
        if min > max {
            return Err(EngineError::InvalidFactory(format!(
                "datetime window min {min} must be <= max {max}"
            )));
        }
        Ok(Self { min, max, seed })
    }
}

impl Factory for RandomDateTimeFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        let span = (self.max - self.min).num_seconds();
        let offset = rng.random_range(0..=span);
        Ok(Value::DateTime(self.min + Duration::seconds(offset)))
    }
}

/// Evenly spaced dates: `base + step_days * index`.
#[derive(Debug, Clone)]
pub struct DateIntervalFactory {
    base: NaiveDate,
    step_days: i64,
}

impl DateIntervalFactory {
    pub fn new(base: NaiveDate, step_days: i64) -> Self {
        Self { base, step_days }
    }
}

impl Factory for DateIntervalFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let offset = interval_offset(self.step_days, index)?;
        let duration = Duration::try_days(offset).ok_or_else(|| {
            EngineError::InvalidFactory("date interval out of range".to_string())
        })?;
        let value = self.base.checked_add_signed(duration).ok_or_else(|| {
            EngineError::InvalidFactory("date interval out of range".to_string())
        })?;
        Ok(Value::Date(value))
    }
}

/// Evenly spaced datetimes: `base + step_seconds * index`.
#[derive(Debug, Clone)]
pub struct DateTimeIntervalFactory {
    base: NaiveDateTime,
    step_seconds: i64,
}

impl DateTimeIntervalFactory {
    pub fn new(base: NaiveDateTime, step_seconds: i64) -> Self {
        Self { base, step_seconds }
    }
}

impl Factory for DateTimeIntervalFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let offset = interval_offset(self.step_seconds, index)?;
        let duration = Duration::try_seconds(offset).ok_or_else(|| {
            EngineError::InvalidFactory("datetime interval out of range".to_string())
        })?;
        let value = self.base.checked_add_signed(duration).ok_or_else(|| {
            EngineError::InvalidFactory("datetime interval out of range".to_string())
        })?;
        Ok(Value::DateTime(value))
    }
}

fn interval_offset(step: i64, index: u64) -> Result<i64, EngineError> {
    let index = i64::try_from(index).map_err(|_| {
        EngineError::InvalidFactory(format!("row index {index} exceeds interval range"))
    })?;
    step.checked_mul(index)
        .ok_or_else(|| EngineError::InvalidFactory("interval overflow".to_string()))
}

use rand::Rng;

use crate::errors::EngineError;
use crate::factory::{Factory, index_rng};
use crate::value::Value;

/// Uniform integer in an inclusive range.
#[derive(Debug, Clone)]
pub struct RandomIntFactory {
    min: i64,
    max: i64,
    seed: u64,
}

impl RandomIntFactory {
    pub fn new(min: i64, max: i64, seed: u64) -> Result<Self, EngineError> {
        if min > max {
            return Err(EngineError::InvalidFactory(format!(
                "integer range min {min} must be <= max {max}"
            )));
        }
        Ok(Self { min, max, seed })
    }
}

impl Factory for RandomIntFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        Ok(Value::Int(rng.random_range(self.min..=self.max)))
    }
}

/// Uniform float in an inclusive range.
#[derive(Debug, Clone)]
pub struct RandomFloatFactory {
    min: f64,
    max: f64,
    seed: u64,
}

impl RandomFloatFactory {
    pub fn new(min: f64, max: f64, seed: u64) -> Result<Self, EngineError> {
        if min > max {
            return Err(EngineError::InvalidFactory(format!(
                "float range min {min} must be <= max {max}"
            )));
        }
        Ok(Self { min, max, seed })
    }
}

impl Factory for RandomFloatFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        Ok(Value::Float(rng.random_range(self.min..=self.max)))
    }
}

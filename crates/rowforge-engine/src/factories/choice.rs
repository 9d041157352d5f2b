use rand::seq::IndexedRandom;

use crate::errors::EngineError;
use crate::factory::{Factory, index_rng};
use crate::value::Value;

/// Uniform pick from a fixed option list.
#[derive(Debug, Clone)]
pub struct ChoiceFactory {
    options: Vec<Value>,
    seed: u64,
}

impl ChoiceFactory {
    pub fn new(options: Vec<Value>, seed: u64) -> Result<Self, EngineError> {
        if options.is_empty() {
            return Err(EngineError::InvalidFactory(
                "choice options must not be empty".to_string(),
            ));
        }
        Ok(Self { options, seed })
    }
}

impl Factory for ChoiceFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        let value = self.options.choose(&mut rng).cloned().unwrap_or(Value::Null);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_options() {
        assert!(ChoiceFactory::new(Vec::new(), 0).is_err());
    }

    #[test]
    fn picks_only_listed_options() {
        let options = vec![Value::Int(1), Value::Int(0)];
        let factory = ChoiceFactory::new(options.clone(), 17).unwrap();

        for index in 0..50 {
            let value = factory.value(index).unwrap();
            assert!(options.contains(&value));
            assert_eq!(factory.value(index).unwrap(), value);
        }
    }
}

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::FirstName;
use rand::Rng;

use crate::errors::EngineError;
use crate::factory::{Factory, index_rng};
use crate::value::Value;

const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random-length string drawn from a fixed charset.
#[derive(Debug, Clone)]
pub struct RandomStringFactory {
    min_chars: usize,
    max_chars: usize,
    charset: Vec<char>,
    seed: u64,
}

impl RandomStringFactory {
    pub fn new(min_chars: usize, max_chars: usize, seed: u64) -> Result<Self, EngineError> {
        Self::with_charset(min_chars, max_chars, DEFAULT_CHARSET, seed)
    }

    pub fn with_charset(
        min_chars: usize,
        max_chars: usize,
        charset: &str,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if min_chars > max_chars {
            return Err(EngineError::InvalidFactory(format!(
                "string length min {min_chars} must be <= max {max_chars}"
            )));
        }
        let charset: Vec<char> = charset.chars().collect();
        if charset.is_empty() {
            return Err(EngineError::InvalidFactory(
                "charset must not be empty".to_string(),
            ));
        }
        Ok(Self {
            min_chars,
            max_chars,
            charset,
            seed,
        })
    }
}

impl Factory for RandomStringFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        let length = rng.random_range(self.min_chars..=self.max_chars);
        let text: String = (0..length)
            .map(|_| self.charset[rng.random_range(0..self.charset.len())])
            .collect();
        Ok(Value::Text(text))
    }
}

/// Fake word, truncated to an optional maximum length.
#[derive(Debug, Clone)]
pub struct WordFactory {
    max_len: Option<usize>,
    seed: u64,
}

impl WordFactory {
    pub fn new(max_len: Option<usize>, seed: u64) -> Self {
        Self { max_len, seed }
    }
}

impl Factory for WordFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        let mut word: String = Word().fake_with_rng(&mut rng);
        if let Some(max_len) = self.max_len {
            word.truncate(max_len);
        }
        Ok(Value::Text(word))
    }
}

/// Realistic first name.
#[derive(Debug, Clone)]
pub struct FirstNameFactory {
    seed: u64,
}

impl FirstNameFactory {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Factory for FirstNameFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        let name: String = FirstName().fake_with_rng(&mut rng);
        Ok(Value::Text(name))
    }
}

/// Realistic email address on a reserved domain.
#[derive(Debug, Clone)]
pub struct EmailFactory {
    seed: u64,
}

impl EmailFactory {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Factory for EmailFactory {
    fn value(&self, index: u64) -> Result<Value, EngineError> {
        let mut rng = index_rng(self.seed, index);
        let email: String = SafeEmail().fake_with_rng(&mut rng);
        Ok(Value::Text(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_string_rejects_inverted_lengths() {
        assert!(RandomStringFactory::new(5, 2, 0).is_err());
    }

    #[test]
    fn random_string_rejects_empty_charset() {
        assert!(RandomStringFactory::with_charset(0, 5, "", 0).is_err());
    }

    #[test]
    fn random_string_respects_length_and_charset() {
        let factory = RandomStringFactory::with_charset(1, 4, "ab", 3).unwrap();

        for index in 0..50 {
            let value = factory.value(index).unwrap();
            let text = value.as_str().expect("text value");
            assert!((1..=4).contains(&text.len()));
            assert!(text.chars().all(|c| c == 'a' || c == 'b'));
        }
    }

    #[test]
    fn word_truncates_to_max_len() {
        let factory = WordFactory::new(Some(3), 11);

        for index in 0..20 {
            let value = factory.value(index).unwrap();
            assert!(value.as_str().expect("text value").len() <= 3);
        }
    }

    #[test]
    fn fake_factories_repeat_per_index() {
        let names = FirstNameFactory::new(5);
        let emails = EmailFactory::new(5);

        assert_eq!(names.value(2).unwrap(), names.value(2).unwrap());
        assert_eq!(emails.value(2).unwrap(), emails.value(2).unwrap());
        assert!(
            emails
                .value(0)
                .unwrap()
                .as_str()
                .expect("text value")
                .contains('@')
        );
    }
}

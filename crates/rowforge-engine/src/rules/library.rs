//! Built-in rule library.
//!
//! [`RuleSet::with_default_rules`] pre-registers a rule for every common
//! field shape. Registration order fixes the default priorities: the null
//! catch-all sits at -123, type rules range upward from 10, suffix and
//! uniqueness rules sit above them, and auto-increment tops out at 9999.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use rowforge_core::FieldDescriptor;

use crate::errors::EngineError;
use crate::factories::{
    ChoiceFactory, ConstantFactory, CountingFactory, DateIntervalFactory,
    DateTimeIntervalFactory, EmailFactory, FirstNameFactory, PrefixedCountingFactory,
    RandomDateFactory, RandomDateTimeFactory, RandomFloatFactory, RandomIntFactory,
    RandomStringFactory, WordFactory,
};
use crate::factory::{BoxFactory, mix_seed};
use crate::rules::context::RuleContext;
use crate::rules::set::RuleSet;
use crate::rules::{FieldRule, Predicate, predicates};
use crate::value::Value;

/// Priority of the catch-all null rule; below every other default rule.
pub const CATCH_ALL_PRIORITY: i64 = -123;

/// Priority of the auto-increment rule; above every type- or name-based rule.
pub const AUTO_INCREMENT_PRIORITY: i64 = 9999;

const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 100;
const DEFAULT_FLOAT_MIN: f64 = 0.0;
const DEFAULT_FLOAT_MAX: f64 = 100.0;
const DEFAULT_TEXT_LENGTH: u32 = 10;
const SHORT_TEXT_CUTOFF: u32 = 5;
const DATETIME_WINDOW_SECONDS: i64 = 86_400;
const DATE_WINDOW_DAYS: i64 = 10;
const DATETIME_SEQUENCE_STEP_SECONDS: i64 = 121;
const DATE_SEQUENCE_STEP_DAYS: i64 = 1;

const INTEGER_ANCESTORS: &[Predicate] = &[predicates::is_integer];
const TEXT_ANCESTORS: &[Predicate] = &[predicates::is_text];

/// Configuration for the default rule library.
#[derive(Debug, Clone)]
pub struct DefaultRuleOptions {
    /// Base seed; each built factory derives its own seed from this and the
    /// field name.
    pub seed: u64,
    /// Window start for random date factories.
    pub base_date: NaiveDate,
    /// Window start for random datetime factories.
    pub base_datetime: NaiveDateTime,
}

impl Default for DefaultRuleOptions {
    fn default() -> Self {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        Self {
            seed: 0,
            base_date,
            base_datetime: base_date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        }
    }
}

impl RuleSet {
    /// Rule set pre-loaded with the default library.
    pub fn with_default_rules(options: DefaultRuleOptions) -> Self {
        let mut set = RuleSet::new();
        set.add_rule(Box::new(NullRule), Some(CATCH_ALL_PRIORITY));
        set.add_rule(Box::new(IntegerRule::new(options.seed)), None);
        set.add_rule(Box::new(FloatRule::new(options.seed)), None);
        set.add_rule(Box::new(TextRule::new(options.seed)), None);
        set.add_rule(
            Box::new(DateTimeRule::new(options.base_datetime, options.seed)),
            None,
        );
        set.add_rule(Box::new(DateRule::new(options.base_date, options.seed)), None);
        set.add_rule(Box::new(BooleanRule::new(options.seed)), None);
        set.add_rule(Box::new(NameRule::new(options.seed)), None);
        set.add_rule(Box::new(EmailRule::new(options.seed)), None);
        set.add_rule(Box::new(UniqueIntegerRule), None);
        set.add_rule(Box::new(UniqueTextRule), None);
        set.add_rule(Box::new(AutoIncrementRule), None);
        set
    }
}

/// Unconditional catch-all producing nulls; guarantees dispatch totality.
pub struct NullRule;

impl FieldRule for NullRule {
    fn name(&self) -> &'static str {
        "null"
    }

    fn matches(&self, _field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        true
    }

    fn build(&self, _field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        Ok(Box::new(ConstantFactory::null()))
    }
}

/// Unconditional rule picking uniformly from a fixed option list.
pub struct ChoiceRule {
    options: Vec<Value>,
    seed: u64,
}

impl ChoiceRule {
    pub fn new(options: Vec<Value>, seed: u64) -> Self {
        Self { options, seed }
    }
}

impl FieldRule for ChoiceRule {
    fn name(&self) -> &'static str {
        "choice"
    }

    fn matches(&self, _field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        true
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        let seed = mix_seed(self.seed, &field.name);
        Ok(Box::new(ChoiceFactory::new(self.options.clone(), seed)?))
    }
}

/// Integer fields get a bounded random integer.
pub struct IntegerRule {
    min: i64,
    max: i64,
    seed: u64,
}

impl IntegerRule {
    pub fn new(seed: u64) -> Self {
        Self::with_range(DEFAULT_INT_MIN, DEFAULT_INT_MAX, seed)
    }

    pub fn with_range(min: i64, max: i64, seed: u64) -> Self {
        Self { min, max, seed }
    }
}

impl FieldRule for IntegerRule {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        predicates::is_integer(field, context)
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        let seed = mix_seed(self.seed, &field.name);
        Ok(Box::new(RandomIntFactory::new(self.min, self.max, seed)?))
    }
}

/// Float fields get a bounded random float.
pub struct FloatRule {
    min: f64,
    max: f64,
    seed: u64,
}

impl FloatRule {
    pub fn new(seed: u64) -> Self {
        Self::with_range(DEFAULT_FLOAT_MIN, DEFAULT_FLOAT_MAX, seed)
    }

    pub fn with_range(min: f64, max: f64, seed: u64) -> Self {
        Self { min, max, seed }
    }
}

impl FieldRule for FloatRule {
    fn name(&self) -> &'static str {
        "float"
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        predicates::is_float(field, context)
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        let seed = mix_seed(self.seed, &field.name);
        Ok(Box::new(RandomFloatFactory::new(self.min, self.max, seed)?))
    }
}

/// Text fields get a random-length string when short or unique, a fake word
/// otherwise.
pub struct TextRule {
    seed: u64,
}

impl TextRule {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FieldRule for TextRule {
    fn name(&self) -> &'static str {
        "text"
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        predicates::is_text(field, context)
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        let length = field.length.unwrap_or(DEFAULT_TEXT_LENGTH);
        let seed = mix_seed(self.seed, &field.name);
        if length < SHORT_TEXT_CUTOFF || field.is_unique {
            Ok(Box::new(RandomStringFactory::new(0, length as usize, seed)?))
        } else {
            Ok(Box::new(WordFactory::new(Some(length as usize), seed)))
        }
    }
}

/// Datetime fields get a random value inside a one-day window.
pub struct DateTimeRule {
    base: NaiveDateTime,
    seed: u64,
}

impl DateTimeRule {
    pub fn new(base: NaiveDateTime, seed: u64) -> Self {
        Self { base, seed }
    }
}

impl FieldRule for DateTimeRule {
    fn name(&self) -> &'static str {
        "datetime"
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        predicates::is_datetime(field, context)
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        let max = self.base + Duration::seconds(DATETIME_WINDOW_SECONDS);
        let seed = mix_seed(self.seed, &field.name);
        Ok(Box::new(RandomDateTimeFactory::new(self.base, max, seed)?))
    }
}

/// Date fields get a random value inside a ten-day window.
pub struct DateRule {
    base: NaiveDate,
    seed: u64,
}

impl DateRule {
    pub fn new(base: NaiveDate, seed: u64) -> Self {
        Self { base, seed }
    }
}

impl FieldRule for DateRule {
    fn name(&self) -> &'static str {
        "date"
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        predicates::is_date(field, context)
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        let max = self.base + Duration::days(DATE_WINDOW_DAYS);
        let seed = mix_seed(self.seed, &field.name);
        Ok(Box::new(RandomDateFactory::new(self.base, max, seed)?))
    }
}

/// Datetime fields get an evenly spaced series instead of a random window.
///
/// Not pre-registered; register it explicitly (usually with a priority above
/// the datetime rule) for fields that need a monotonic sequence.
pub struct DateTimeSequenceRule {
    base: NaiveDateTime,
    step_seconds: i64,
}

impl DateTimeSequenceRule {
    pub fn new(base: NaiveDateTime) -> Self {
        Self::with_step(base, DATETIME_SEQUENCE_STEP_SECONDS)
    }

    pub fn with_step(base: NaiveDateTime, step_seconds: i64) -> Self {
        Self { base, step_seconds }
    }
}

impl FieldRule for DateTimeSequenceRule {
    fn name(&self) -> &'static str {
        "datetime_sequence"
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        predicates::is_datetime(field, context)
    }

    fn build(&self, _field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        Ok(Box::new(DateTimeIntervalFactory::new(
            self.base,
            self.step_seconds,
        )))
    }
}

/// Date fields get an evenly spaced series instead of a random window.
pub struct DateSequenceRule {
    base: NaiveDate,
    step_days: i64,
}

impl DateSequenceRule {
    pub fn new(base: NaiveDate) -> Self {
        Self::with_step(base, DATE_SEQUENCE_STEP_DAYS)
    }

    pub fn with_step(base: NaiveDate, step_days: i64) -> Self {
        Self { base, step_days }
    }
}

impl FieldRule for DateSequenceRule {
    fn name(&self) -> &'static str {
        "date_sequence"
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        predicates::is_date(field, context)
    }

    fn build(&self, _field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        Ok(Box::new(DateIntervalFactory::new(self.base, self.step_days)))
    }
}

/// Boolean fields get a random pick between the two values.
pub struct BooleanRule {
    seed: u64,
}

impl BooleanRule {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FieldRule for BooleanRule {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        predicates::is_boolean(field, context)
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        let seed = mix_seed(self.seed, &field.name);
        Ok(Box::new(ChoiceFactory::new(
            vec![Value::Bool(true), Value::Bool(false)],
            seed,
        )?))
    }
}

/// Fields whose name ends in `name` get a realistic first name.
pub struct NameRule {
    seed: u64,
}

impl NameRule {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FieldRule for NameRule {
    fn name(&self) -> &'static str {
        "name_suffix"
    }

    fn matches(&self, field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        field.name.ends_with("name")
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        Ok(Box::new(FirstNameFactory::new(mix_seed(
            self.seed,
            &field.name,
        ))))
    }
}

/// Fields whose name ends in `mail` get a realistic email address.
pub struct EmailRule {
    seed: u64,
}

impl EmailRule {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FieldRule for EmailRule {
    fn name(&self) -> &'static str {
        "mail_suffix"
    }

    fn matches(&self, field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        field.name.ends_with("mail")
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        Ok(Box::new(EmailFactory::new(mix_seed(self.seed, &field.name))))
    }
}

/// Unique integer fields get a collision-free sequential counter.
pub struct UniqueIntegerRule;

impl FieldRule for UniqueIntegerRule {
    fn name(&self) -> &'static str {
        "unique_integer"
    }

    fn ancestors(&self) -> &[Predicate] {
        INTEGER_ANCESTORS
    }

    fn matches(&self, field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        field.is_unique
    }

    fn build(&self, _field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        Ok(Box::new(CountingFactory::new(1)))
    }
}

/// Unique text fields get a collision-free name-prefixed counter.
pub struct UniqueTextRule;

impl FieldRule for UniqueTextRule {
    fn name(&self) -> &'static str {
        "unique_text"
    }

    fn ancestors(&self) -> &[Predicate] {
        TEXT_ANCESTORS
    }

    fn matches(&self, field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        field.is_unique
    }

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        Ok(Box::new(PrefixedCountingFactory::new(
            format!("{}_", field.name),
            1,
        )))
    }
}

/// Auto-increment primary keys get a 1-based counter, overriding the type
/// rules below it.
pub struct AutoIncrementRule;

impl FieldRule for AutoIncrementRule {
    fn name(&self) -> &'static str {
        "auto_increment"
    }

    fn base_priority(&self) -> Option<i64> {
        Some(AUTO_INCREMENT_PRIORITY)
    }

    fn ancestors(&self) -> &[Predicate] {
        INTEGER_ANCESTORS
    }

    fn matches(&self, field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        field.is_primary_key && field.is_auto_increment
    }

    fn build(&self, _field: &FieldDescriptor) -> Result<BoxFactory, EngineError> {
        Ok(Box::new(CountingFactory::new(1)))
    }
}

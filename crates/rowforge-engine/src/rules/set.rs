use std::collections::BTreeMap;

use tracing::{debug, info};

use rowforge_core::{FieldDescriptor, TableSource};

use crate::errors::EngineError;
use crate::factory::BoxFactory;
use crate::model::{Column, Metadata, Table};
use crate::rules::context::RuleContext;
use crate::rules::{FieldRule, TableRule};

/// Priority-ordered rule registry, split into table- and field-scoped pools.
///
/// Built once, optionally extended with custom rules, then treated as
/// read-only by [`RuleSet::apply_all`]. Higher priorities win. A requested
/// priority that is already taken probes upward to the next free slot; with
/// many collisions this can reorder rules relative to registration intent,
/// so callers that care pass explicit, distinct priorities.
#[derive(Default)]
pub struct RuleSet {
    field_rules: BTreeMap<i64, Box<dyn FieldRule>>,
    table_rules: BTreeMap<i64, Box<dyn TableRule>>,
    registered: i64,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field rule.
    ///
    /// Without an explicit priority the rule's base priority applies, else
    /// `registration_count * 10` so later additions land above earlier ones.
    pub fn add_rule(&mut self, rule: Box<dyn FieldRule>, priority: Option<i64>) {
        let requested = priority
            .or_else(|| rule.base_priority())
            .unwrap_or(self.registered * 10);
        let slot = free_slot(&self.field_rules, requested);
        debug!(rule = rule.name(), priority = slot, "field rule registered");
        self.field_rules.insert(slot, rule);
        self.registered += 1;
    }

    /// Register a table rule; same priority handling as [`RuleSet::add_rule`].
    pub fn add_table_rule(&mut self, rule: Box<dyn TableRule>, priority: Option<i64>) {
        let requested = priority
            .or_else(|| rule.base_priority())
            .unwrap_or(self.registered * 10);
        let slot = free_slot(&self.table_rules, requested);
        debug!(rule = rule.name(), priority = slot, "table rule registered");
        self.table_rules.insert(slot, rule);
        self.registered += 1;
    }

    /// Field rules sorted by priority descending.
    pub fn rules(&self) -> impl Iterator<Item = (i64, &dyn FieldRule)> {
        self.field_rules
            .iter()
            .rev()
            .map(|(priority, rule)| (*priority, rule.as_ref()))
    }

    /// Table rules sorted by priority descending.
    pub fn table_rules(&self) -> impl Iterator<Item = (i64, &dyn TableRule)> {
        self.table_rules
            .iter()
            .rev()
            .map(|(priority, rule)| (*priority, rule.as_ref()))
    }

    /// Resolve every table in input order into a fresh [`Metadata`].
    ///
    /// Table rules run strictly before field rules; a matching table rule
    /// short-circuits field resolution for that table. The pass is
    /// all-or-nothing: the first unresolved field or failing factory build
    /// aborts it and no metadata is returned.
    pub fn apply_all(&self, sources: &[TableSource]) -> Result<Metadata, EngineError> {
        let mut context = RuleContext::new();
        for source in sources {
            context.begin_table(source);
            let table = self.resolve_table(source, &context)?;
            info!(
                table = %source.name,
                columns = table.columns().len(),
                "table resolved"
            );
            context.record(table);
        }
        Ok(context.into_metadata())
    }

    fn resolve_table(
        &self,
        source: &TableSource,
        context: &RuleContext<'_>,
    ) -> Result<Table, EngineError> {
        for (priority, rule) in self.table_rules() {
            if rule.match_all(source, context) {
                debug!(
                    table = %source.name,
                    rule = rule.name(),
                    priority,
                    "table rule matched"
                );
                return rule.build(source);
            }
        }

        let mut columns = Vec::with_capacity(source.fields.len());
        for field in &source.fields {
            let factory = self.resolve_field(source, field, context)?;
            columns.push(Column::new(field.name.clone(), factory));
        }
        Ok(Table::new(
            source.name.clone(),
            source.model.clone(),
            columns,
        ))
    }

    fn resolve_field(
        &self,
        source: &TableSource,
        field: &FieldDescriptor,
        context: &RuleContext<'_>,
    ) -> Result<BoxFactory, EngineError> {
        for (priority, rule) in self.rules() {
            if rule.match_all(field, context) {
                debug!(
                    table = %source.name,
                    field = %field.name,
                    rule = rule.name(),
                    priority,
                    "field rule matched"
                );
                return rule.build(field);
            }
        }
        Err(EngineError::UnresolvedField {
            table: source.name.clone(),
            field: field.name.clone(),
        })
    }
}

fn free_slot<T>(pool: &BTreeMap<i64, T>, requested: i64) -> i64 {
    let mut priority = requested;
    while pool.contains_key(&priority) {
        priority += 1;
    }
    priority
}

//! Rule traits and inheritance-aware matching.
//!
//! A rule pairs a match predicate with a factory builder. Concrete rules may
//! declare a chain of ancestor predicates: the rule fires only when every
//! ancestor holds on the candidate as well, which lets a narrow rule such as
//! "auto-increment primary key" lean on an existing "integer" check instead
//! of re-deriving it.

pub mod context;
pub mod library;
pub mod set;

use rowforge_core::{FieldDescriptor, TableSource};

use crate::errors::EngineError;
use crate::factory::BoxFactory;
use crate::model::Table;
use self::context::RuleContext;

/// Ancestor predicate evaluated against a field descriptor.
pub type Predicate = fn(&FieldDescriptor, &RuleContext<'_>) -> bool;

/// Ancestor predicate evaluated against a whole table record.
pub type TablePredicate = fn(&TableSource, &RuleContext<'_>) -> bool;

/// A field-scoped rule: a match predicate plus a factory builder.
pub trait FieldRule: Send + Sync {
    /// Stable rule name used in logs.
    fn name(&self) -> &'static str;

    /// Intrinsic priority used when the caller registers without one.
    fn base_priority(&self) -> Option<i64> {
        None
    }

    /// Ancestor predicates this rule narrows.
    fn ancestors(&self) -> &[Predicate] {
        &[]
    }

    /// Opt out of ancestor checks for rules whose own predicate is
    /// self-contained.
    fn inherits_ancestors(&self) -> bool {
        true
    }

    fn matches(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool;

    fn build(&self, field: &FieldDescriptor) -> Result<BoxFactory, EngineError>;

    /// Inheritance-aware match: every ancestor predicate must hold before the
    /// rule's own predicate is consulted.
    fn match_all(&self, field: &FieldDescriptor, context: &RuleContext<'_>) -> bool {
        if self.inherits_ancestors() {
            for ancestor in self.ancestors() {
                if !ancestor(field, context) {
                    return false;
                }
            }
        }
        self.matches(field, context)
    }
}

/// A table-scoped rule; a match short-circuits field resolution for the
/// whole table.
pub trait TableRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn base_priority(&self) -> Option<i64> {
        None
    }

    fn ancestors(&self) -> &[TablePredicate] {
        &[]
    }

    fn inherits_ancestors(&self) -> bool {
        true
    }

    fn matches(&self, table: &TableSource, context: &RuleContext<'_>) -> bool;

    fn build(&self, table: &TableSource) -> Result<Table, EngineError>;

    fn match_all(&self, table: &TableSource, context: &RuleContext<'_>) -> bool {
        if self.inherits_ancestors() {
            for ancestor in self.ancestors() {
                if !ancestor(table, context) {
                    return false;
                }
            }
        }
        self.matches(table, context)
    }
}

/// Field predicates shared by the built-in library and custom rules.
pub mod predicates {
    use rowforge_core::{FieldDescriptor, FieldKind};

    use super::context::RuleContext;

    pub fn is_integer(field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        matches!(field.kind, FieldKind::Integer)
    }

    pub fn is_float(field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        matches!(field.kind, FieldKind::Float)
    }

    pub fn is_text(field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        matches!(field.kind, FieldKind::Text)
    }

    pub fn is_boolean(field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        matches!(field.kind, FieldKind::Boolean)
    }

    pub fn is_date(field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        matches!(field.kind, FieldKind::Date)
    }

    pub fn is_datetime(field: &FieldDescriptor, _context: &RuleContext<'_>) -> bool {
        matches!(field.kind, FieldKind::DateTime)
    }
}

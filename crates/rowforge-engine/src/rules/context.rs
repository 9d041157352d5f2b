use rowforge_core::TableSource;

use crate::model::{Column, Metadata, Table};

/// Accumulated resolution state for one `apply_all` pass.
///
/// Entries are append-only: once a table is resolved it stays visible to
/// every later rule in the same pass. Rules receive a shared reference and
/// may consult earlier results; only the dispatcher mutates the context.
#[derive(Debug, Default)]
pub struct RuleContext<'a> {
    resolved: Metadata,
    current: Option<&'a TableSource>,
}

impl<'a> RuleContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table record currently being resolved, if any.
    pub fn current_table(&self) -> Option<&'a TableSource> {
        self.current
    }

    /// An already-resolved table by name.
    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.resolved.table(name)
    }

    /// An already-resolved column by table and field name.
    pub fn find_field(&self, table: &str, field: &str) -> Option<&Column> {
        self.find_table(table).and_then(|table| table.column(field))
    }

    pub(crate) fn begin_table(&mut self, source: &'a TableSource) {
        self.current = Some(source);
    }

    pub(crate) fn record(&mut self, table: Table) {
        self.resolved.add(table);
        self.current = None;
    }

    pub(crate) fn into_metadata(self) -> Metadata {
        self.resolved
    }
}

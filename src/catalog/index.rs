use std::collections::HashMap;

use crate::catalog::entry::Entry;
use crate::catalog::store::Store;

/// Lookup accelerator grouping entries by context name.
///
/// Holds non-owning indices into the store, so views are lazy and
/// order-preserving rather than copies. Build once per immutable store
/// snapshot.
#[derive(Debug)]
pub struct ContextIndex<'a> {
    store: &'a Store,
    by_context: HashMap<&'a str, Vec<usize>>,
}

impl<'a> ContextIndex<'a> {
    pub fn build(store: &'a Store) -> Self {
        let mut by_context: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, entry) in store.entries().iter().enumerate() {
            by_context.entry(entry.context.as_str()).or_default().push(idx);
        }
        Self { store, by_context }
    }

    /// All entries under a context, in discovery order.
    pub fn entries_for(&self, context: &str) -> impl Iterator<Item = &'a Entry> + '_ {
        self.by_context
            .get(context)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.store.entries()[idx])
    }

    /// Context names in document order.
    pub fn contexts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.store.contexts().iter().map(|c| c.name.as_str())
    }

    pub fn context_count(&self) -> usize {
        self.store.contexts().len()
    }
}

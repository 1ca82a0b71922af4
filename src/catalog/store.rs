use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog::entry::{Entry, EntryKey};
use crate::error::Result;
use crate::output::ts_writer;
use crate::parse::ts_reader;

/// How location line numbers are written at the serialization boundary.
///
/// Relative style emits each line as a signed delta from the previous
/// location in the same file and omits unchanged filenames. It is purely a
/// diff-friendliness optimization; the in-memory model is always absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationStyle {
    #[default]
    Absolute,
    Relative,
}

/// Per-context bookkeeping: document order and any unknown child elements
/// preserved for forward compatibility.
#[derive(Debug, Clone, Default)]
pub struct ContextMeta {
    pub name: String,
    pub extra: Vec<String>,
}

/// The catalog entry store: single source of truth for all translation
/// units of one target locale.
///
/// Entries keep their discovery order; serialization groups them by context
/// (first-appearance order) so an unchanged store re-serializes
/// byte-identically. Once loaded for runtime resolution the store is treated
/// as an immutable snapshot and is safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Target locale tag from the document header (e.g. "uk_UA").
    pub language: Option<String>,
    /// Source locale tag, when the document records one.
    pub source_language: Option<String>,
    /// TS format version attribute (e.g. "2.1").
    pub version: Option<String>,
    /// Unknown document-level elements preserved verbatim.
    pub header_extra: Vec<String>,
    location_style: LocationStyle,
    contexts: Vec<ContextMeta>,
    entries: Vec<Entry>,
    by_key: HashMap<EntryKey, usize>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized TS document into a store.
    ///
    /// Fails with a `TsParse` error on malformed structure, unknown status
    /// markers, or encoding errors. Unknown elements are preserved opaquely
    /// rather than dropped.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        ts_reader::parse_ts(bytes)
    }

    /// Serialize the store to its canonical persisted form.
    ///
    /// Output is deterministic: contexts in first-appearance order, entries
    /// in discovery order within each context.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        ts_writer::serialize_store(self)
    }

    /// Load a catalog from disk, labelling parse errors with the path.
    pub fn read_from(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::load(&bytes).map_err(|e| e.with_file(path))
    }

    /// Write the catalog to disk atomically (write-to-temp-then-rename) so
    /// a crash mid-write leaves any previous catalog intact.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        ts_writer::write_catalog(self, path)
    }

    pub fn location_style(&self) -> LocationStyle {
        self.location_style
    }

    pub fn set_location_style(&mut self, style: LocationStyle) {
        self.location_style = style;
    }

    /// Insert an entry, or merge it into an existing entry with the same
    /// lookup key: locations are unioned, and an incoming translation with
    /// text wins together with its status.
    pub fn upsert(&mut self, entry: Entry) {
        let key = entry.key();
        match self.by_key.get(&key) {
            Some(&idx) => {
                let existing = &mut self.entries[idx];
                for loc in entry.locations {
                    existing.add_location(loc);
                }
                if entry.translation.has_text() {
                    existing.translation = entry.translation;
                    existing.status = entry.status;
                }
                existing.numerus |= entry.numerus;
                existing.extra.extend(entry.extra);
            }
            None => {
                self.ensure_context(&entry.context);
                self.by_key.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Exact-key lookup. An omitted comment matches only entries without a
    /// disambiguation comment.
    pub fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Entry> {
        let key = EntryKey::new(context, source, comment);
        self.by_key.get(&key).map(|&idx| &self.entries[idx])
    }

    pub fn find_mut(
        &mut self,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Option<&mut Entry> {
        let key = EntryKey::new(context, source, comment);
        match self.by_key.get(&key) {
            Some(&idx) => Some(&mut self.entries[idx]),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &EntryKey) -> bool {
        self.by_key.contains_key(key)
    }

    /// All entries in discovery order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Context metadata in first-appearance order.
    pub fn contexts(&self) -> &[ContextMeta] {
        &self.contexts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a context (no-op if already present), preserving order.
    pub fn ensure_context(&mut self, name: &str) {
        if !self.contexts.iter().any(|c| c.name == name) {
            self.contexts.push(ContextMeta {
                name: name.to_string(),
                extra: Vec::new(),
            });
        }
    }

    /// Attach a preserved unknown fragment to a context block.
    pub fn add_context_extra(&mut self, name: &str, fragment: String) {
        self.ensure_context(name);
        if let Some(ctx) = self.contexts.iter_mut().find(|c| c.name == name) {
            ctx.extra.push(fragment);
        }
    }

    /// Physically remove obsolete and vanished entries. This is the only
    /// operation that deletes entries; merges never do.
    ///
    /// Contexts left without entries are dropped. Returns the number of
    /// entries removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        let kept: Vec<Entry> = self
            .entries
            .drain(..)
            .filter(|e| !e.status.is_retired())
            .collect();

        self.by_key.clear();
        for (idx, entry) in kept.iter().enumerate() {
            self.by_key.insert(entry.key(), idx);
        }
        self.contexts
            .retain(|c| kept.iter().any(|e| e.context == c.name));
        self.entries = kept;
        before - self.entries.len()
    }
}

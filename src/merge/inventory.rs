use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::EntryKey;
use crate::error::{CatalogError, Result};

/// One translatable string occurrence discovered by scanning sources.
///
/// The scanner itself is an external tool; it hands the merger a JSON array
/// of these tuples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanItem {
    pub context: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Whether the occurrence is plural-aware (a tr() call with a count).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub numerus: bool,
}

impl ScanItem {
    pub fn key(&self) -> EntryKey {
        EntryKey::new(&self.context, &self.source, self.comment.as_deref())
    }
}

/// A freshly scanned source inventory: the merger's view of "what the
/// sources contain right now".
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<ScanItem>,
}

impl Inventory {
    pub fn new(items: Vec<ScanItem>) -> Result<Self> {
        for (idx, item) in items.iter().enumerate() {
            if item.context.is_empty() {
                return Err(CatalogError::scan(format!("item {} has an empty context", idx)));
            }
            if item.source.is_empty() {
                return Err(CatalogError::scan(format!("item {} has an empty source", idx)));
            }
        }
        Ok(Self { items })
    }

    /// Parse an inventory from its JSON form.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let items: Vec<ScanItem> = serde_json::from_slice(bytes)
            .map_err(|e| CatalogError::scan(e.to_string()))?;
        Self::new(items)
    }

    /// Read an inventory file, labelling scan errors with the path.
    pub fn read_from(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_json(&bytes).map_err(|e| e.with_file(path))
    }

    pub fn items(&self) -> &[ScanItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The set of lookup keys present in this inventory.
    pub fn key_set(&self) -> HashSet<EntryKey> {
        self.items.iter().map(ScanItem::key).collect()
    }
}

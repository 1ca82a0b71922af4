use regex::Regex;
use serde::Serialize;

use crate::catalog::{ContextIndex, EntryStatus, Store};

/// Translation-completion counts for one context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextStats {
    pub name: String,
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub retired: usize,
}

/// Completion summary for a whole catalog, the lrelease-style numbers
/// translators track.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogStats {
    pub language: Option<String>,
    pub contexts: Vec<ContextStats>,
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub retired: usize,
}

impl CatalogStats {
    /// Tally a store, optionally restricted to contexts matching a filter.
    pub fn collect(store: &Store, context_filter: Option<&Regex>) -> Self {
        let index = ContextIndex::build(store);
        let mut stats = Self {
            language: store.language.clone(),
            ..Self::default()
        };

        for context in index.contexts() {
            if let Some(filter) = context_filter {
                if !filter.is_match(context) {
                    continue;
                }
            }
            let mut ctx = ContextStats {
                name: context.to_string(),
                ..ContextStats::default()
            };
            for entry in index.entries_for(context) {
                ctx.total += 1;
                if entry.status.is_retired() {
                    ctx.retired += 1;
                } else if entry.status == EntryStatus::Finished {
                    ctx.finished += 1;
                } else {
                    ctx.unfinished += 1;
                }
            }
            stats.total += ctx.total;
            stats.finished += ctx.finished;
            stats.unfinished += ctx.unfinished;
            stats.retired += ctx.retired;
            stats.contexts.push(ctx);
        }
        stats
    }

    /// Finished share of the live (non-retired) entries, as a percentage.
    pub fn completion_percent(&self) -> f64 {
        let live = self.total - self.retired;
        if live == 0 {
            100.0
        } else {
            (self.finished as f64 / live as f64) * 100.0
        }
    }
}

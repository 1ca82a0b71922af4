use std::collections::HashSet;

use crate::catalog::{Entry, EntryKey, EntryStatus, Location, Store};
use crate::merge::inventory::Inventory;

/// Knobs for a merge run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Drop entries absent from the inventory instead of marking them
    /// obsolete.
    pub prune: bool,
    /// Discard carried translations and start every entry unfinished.
    pub reset_translations: bool,
}

/// What a merge run did, for reporting and assertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub added: usize,
    pub carried: usize,
    pub obsoleted: usize,
    pub pruned: usize,
}

/// Reconcile an existing catalog against a freshly scanned inventory.
///
/// The old store is read-only; the result is a brand-new store, so callers
/// can publish it atomically and a failed merge leaves the previous catalog
/// untouched. Matching keys keep their translation and status with fresh
/// locations; new keys enter unfinished; keys gone from the sources become
/// obsolete (or are dropped under `prune`). Running the same merge twice
/// produces an identical store.
pub fn merge(old: &Store, inventory: &Inventory, options: MergeOptions) -> (Store, MergeSummary) {
    let mut next = Store::new();
    next.language = old.language.clone();
    next.source_language = old.source_language.clone();
    next.version = old.version.clone();
    next.header_extra = old.header_extra.clone();
    next.set_location_style(old.location_style());

    let mut summary = MergeSummary::default();
    let mut seen: HashSet<EntryKey> = HashSet::new();

    for item in inventory.items() {
        let key = item.key();
        let location = Location {
            file: item.filename.clone(),
            line: item.line,
        };

        if !seen.insert(key.clone()) {
            // Another occurrence of an already-merged key: just record the
            // extra location.
            if let Some(entry) = next.find_mut(&key.context, &key.source, key.comment.as_deref()) {
                entry.add_location(location);
            }
            continue;
        }

        let mut entry = match old.find(&key.context, &key.source, key.comment.as_deref()) {
            Some(previous) if !options.reset_translations => {
                summary.carried += 1;
                let mut carried = previous.clone();
                // Fresh locations replace the stale ones wholesale.
                carried.locations.clear();
                carried.status = revived_status(previous);
                carried
            }
            Some(_) => {
                summary.carried += 1;
                Entry::new_unfinished(&key.context, &key.source, key.comment.as_deref())
            }
            None => {
                summary.added += 1;
                Entry::new_unfinished(&key.context, &key.source, key.comment.as_deref())
            }
        };
        entry.numerus |= item.numerus;
        entry.add_location(location);
        next.upsert(entry);
    }

    let inventory_keys = inventory.key_set();
    for previous in old.entries() {
        if inventory_keys.contains(&previous.key()) {
            continue;
        }
        if options.prune {
            summary.pruned += 1;
            continue;
        }
        let mut retained = previous.clone();
        retained.status = EntryStatus::Obsolete;
        summary.obsoleted += 1;
        next.upsert(retained);
    }

    (next, summary)
}

/// An entry coming back after being retired regains an active status:
/// finished if it still has a translation, unfinished otherwise.
fn revived_status(previous: &Entry) -> EntryStatus {
    match previous.status {
        EntryStatus::Obsolete | EntryStatus::Vanished => {
            if previous.translation.has_text() {
                EntryStatus::Finished
            } else {
                EntryStatus::Unfinished
            }
        }
        status => status,
    }
}

pub mod catalog;
pub mod discover;
pub mod error;
pub mod merge;
pub mod output;
pub mod parse;
pub mod resolve;

use std::path::PathBuf;

use regex::Regex;

// Re-export commonly used types
pub use catalog::{
    ContextIndex, Entry, EntryKey, EntryStatus, ExtraElement, Location, LocationStyle, Store,
    Translation,
};
pub use discover::CatalogFinder;
pub use error::{CatalogError, Result};
pub use merge::{Inventory, MergeOptions, MergeSummary, ScanItem};
pub use output::{CatalogStats, ContextStats, StatsFormatter};
pub use resolve::{PluralRule, Resolver, TrustPolicy};

/// Parameters for a runtime translation lookup
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub catalog: PathBuf,
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
    pub count: Option<i64>,
    pub any_status: bool,
}

impl QueryRequest {
    pub fn new(catalog: PathBuf, context: String, source: String) -> Self {
        Self {
            catalog,
            context,
            source,
            comment: None,
            count: None,
            any_status: false,
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_count(mut self, count: Option<i64>) -> Self {
        self.count = count;
        self
    }

    pub fn with_any_status(mut self, any_status: bool) -> Self {
        self.any_status = any_status;
        self
    }
}

/// Result of a translation lookup
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub text: String,
    /// Whether a stored translation was used (false means source fallback).
    pub translated: bool,
}

/// Load a catalog and resolve one string through it.
///
/// A missing entry or untrusted translation is not an error: the source
/// text comes back, mirroring what the GUI layer would display.
pub fn run_query(request: QueryRequest) -> Result<QueryOutcome> {
    let store = Store::read_from(&request.catalog)?;
    let policy = if request.any_status {
        TrustPolicy::AnyNonEmpty
    } else {
        TrustPolicy::FinishedOnly
    };
    let resolver = Resolver::new(&store).with_policy(policy);
    let translated = resolver
        .lookup(
            &request.context,
            &request.source,
            request.comment.as_deref(),
            request.count,
        )
        .is_some();
    let text = resolver.resolve(
        &request.context,
        &request.source,
        request.comment.as_deref(),
        request.count,
    );
    Ok(QueryOutcome {
        text: text.into_owned(),
        translated,
    })
}

/// Parameters for a merge run
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub catalog: PathBuf,
    pub inventory: PathBuf,
    /// Destination path; defaults to rewriting the catalog in place.
    pub output: Option<PathBuf>,
    pub prune: bool,
    pub reset_translations: bool,
    /// Start from an empty catalog when the file does not exist yet.
    pub create: bool,
}

impl MergeRequest {
    pub fn new(catalog: PathBuf, inventory: PathBuf) -> Self {
        Self {
            catalog,
            inventory,
            output: None,
            prune: false,
            reset_translations: false,
            create: false,
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_reset_translations(mut self, reset: bool) -> Self {
        self.reset_translations = reset;
        self
    }

    pub fn with_create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }
}

/// Merge a scanned inventory into a catalog and publish the result
/// atomically. The previous catalog stays intact if anything fails.
pub fn run_merge(request: MergeRequest) -> Result<MergeSummary> {
    let old = if request.catalog.exists() {
        Store::read_from(&request.catalog)?
    } else if request.create {
        let mut store = Store::new();
        store.version = Some("2.1".to_string());
        store
    } else {
        return Err(CatalogError::InvalidPath(format!(
            "catalog {} does not exist (pass --create to start a new one)",
            request.catalog.display()
        )));
    };

    let inventory = Inventory::read_from(&request.inventory)?;
    let options = MergeOptions {
        prune: request.prune,
        reset_translations: request.reset_translations,
    };
    let (next, summary) = merge::merge(&old, &inventory, options);

    let destination = request.output.as_ref().unwrap_or(&request.catalog);
    next.write_to(destination)?;
    Ok(summary)
}

/// Remove obsolete and vanished entries from a catalog on disk.
/// Returns the number of entries removed.
pub fn run_prune(catalog: &PathBuf, output: Option<&PathBuf>) -> Result<usize> {
    let mut store = Store::read_from(catalog)?;
    let removed = store.prune();
    store.write_to(output.unwrap_or(catalog))?;
    Ok(removed)
}

/// Parameters for a stats report
#[derive(Debug, Clone)]
pub struct StatsRequest {
    /// Catalog files or directories to scan for catalogs.
    pub paths: Vec<PathBuf>,
    /// Optional regex restricting which contexts are counted.
    pub context_filter: Option<String>,
}

impl StatsRequest {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            context_filter: None,
        }
    }

    pub fn with_context_filter(mut self, filter: Option<String>) -> Self {
        self.context_filter = filter;
        self
    }
}

/// Tally completion stats for each catalog named by the request.
/// Directories are walked for `*.ts` files.
pub fn run_stats(request: StatsRequest) -> Result<Vec<(PathBuf, CatalogStats)>> {
    let filter = match &request.context_filter {
        Some(pattern) => Some(Regex::new(pattern).map_err(|e| CatalogError::InvalidFilter {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?),
        None => None,
    };

    let mut catalogs = Vec::new();
    for path in &request.paths {
        if path.is_dir() {
            catalogs.extend(CatalogFinder::new(path.clone()).find()?);
        } else {
            catalogs.push(path.clone());
        }
    }

    let mut reports = Vec::new();
    for path in catalogs {
        let store = Store::read_from(&path)?;
        reports.push((path, CatalogStats::collect(&store, filter.as_ref())));
    }
    Ok(reports)
}

/// List the context names of a catalog in document order.
pub fn run_contexts(catalog: &PathBuf) -> Result<Vec<String>> {
    let store = Store::read_from(catalog)?;
    Ok(store.contexts().iter().map(|c| c.name.clone()).collect())
}

pub mod formatter;
pub mod stats;
pub mod ts_writer;

pub use formatter::StatsFormatter;
pub use stats::{CatalogStats, ContextStats};
pub use ts_writer::{serialize_store, write_catalog};

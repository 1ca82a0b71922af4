pub mod entry;
pub mod index;
pub mod store;

pub use entry::{Entry, EntryKey, EntryStatus, ExtraElement, Location, Translation};
pub use index::ContextIndex;
pub use store::{ContextMeta, LocationStyle, Store};

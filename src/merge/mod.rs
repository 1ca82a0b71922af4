pub mod inventory;
pub mod merger;

pub use inventory::{Inventory, ScanItem};
pub use merger::{merge, MergeOptions, MergeSummary};

pub mod ts_reader;

pub use ts_reader::parse_ts;

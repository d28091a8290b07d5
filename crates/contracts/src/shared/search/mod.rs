pub mod debounce;
pub mod filter;
pub mod matcher;

pub use debounce::{Debounce, SEARCH_DEBOUNCE_MS};
pub use filter::{filter_records, record_matches, LoadedRecords, RecordFilter};
pub use matcher::{matches, normalize, NormalizedQuery};

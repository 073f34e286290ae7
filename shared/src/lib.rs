//! Data model and the search/sort core of the contest archive viewer.
//!
//! Everything here is synchronous and target-independent; the browser side
//! lives in the `archive-frontend` crate.

pub mod models {
    pub mod contest;
    pub mod lenient;
    pub mod team;
}

pub mod dataset;
pub mod error;
pub mod filter;
pub mod session;
pub mod sort;
pub mod theme;

// Re-export commonly used items
pub use error::{LoadError, Result};

pub use dataset::Dataset;
pub use filter::{filter_contests, SearchQuery};
pub use models::{contest::Contest, team::Team};
pub use session::{ArchiveSession, LoadStatus, ViewState};
pub use sort::{compare_dates, sort_contests, sorted_by_key_str, SortKey};
pub use theme::Theme;

//! Cached full export of a Workflowy account and search over it.
//!
//! [`ExportCache`] keeps one export generation behind a TTL that never drops
//! below [`MIN_EXPORT_TTL`], and lets concurrent callers share a single
//! upstream fetch. [`ExportSearch`] runs text searches against the cached
//! generation, attaching each hit's breadcrumb path and optionally filtering
//! by completion inherited from ancestors.

mod ancestry;
mod cache;
mod error;
mod index;
mod search;
mod snapshot;

pub use ancestry::Ancestors;
pub use ancestry::CompletionResolver;
pub use ancestry::resolve_path;
pub use cache::ExportCache;
pub use cache::ExportFetcher;
pub use cache::MIN_EXPORT_TTL;
pub use error::ExportError;
pub use error::Result;
pub use index::NodeIndex;
pub use search::CompletionScope;
pub use search::DEFAULT_SEARCH_LIMIT;
pub use search::ExportSearch;
pub use search::MAX_SEARCH_LIMIT;
pub use search::SearchPolicy;
pub use search::SearchQuery;
pub use search::SearchResult;
pub use search::UnfilteredCompletion;
pub use search::clamp_limit;
pub use search::search_nodes;
pub use snapshot::ExportSnapshot;

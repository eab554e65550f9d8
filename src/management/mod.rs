//! Everything between the upstream clients and the presentation layers:
//! memoization, pagination, enrichment, the playlist catalog and the
//! [`Library`] service that ties them together.

mod cache;
mod cached;
mod catalog;
pub mod enrichment;
mod library;
pub mod pager;

pub use cache::MemoCache;
pub use cached::CacheCapacities;
pub use cached::CachedUpstream;
pub use catalog::CATEGORY_SEPARATOR;
pub use catalog::CatalogManager;
pub use catalog::parse_entry;
pub use library::Library;
pub use library::LibraryOptions;
pub use library::PLAYLIST_PAGE_SIZE;
pub use library::RELEASES_PER_PAGE;

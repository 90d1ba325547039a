pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::NewsService;
pub use domain::listing::{ListingRequest, Pagination, SortColumn, SortOrder};
pub use domain::{ApiError, ApiResult};
pub use storage::SeedData;

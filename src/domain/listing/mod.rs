//! Article listing: validation of the raw query parameters and composition of the
//! filtered, sorted, paginated SQL that serves `GET /api/articles`.

pub mod query;
pub mod request;

pub use query::{article_comments_query, article_listing_query};
pub use request::{ListingRequest, Pagination, SortColumn, SortOrder};

pub mod error;
pub mod listing;
pub mod model;

pub use error::{ApiError, ApiResult};

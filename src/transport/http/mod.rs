pub mod error;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod api;
    pub mod articles;
    pub mod comments;
    pub mod common;
    pub mod health;
    pub mod topics;
    pub mod users;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;

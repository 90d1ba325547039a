pub mod schema;
pub mod seed;

pub use schema::{create_tables, drop_tables};
pub use seed::{seed, SeedData};

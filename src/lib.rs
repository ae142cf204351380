//! Bakery API: bakeries and their baked goods over HTTP, stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, missing_tables};
pub use routes::{app, bakery_routes, ops_routes};
pub use seed::{seed_database, SeedReport};
pub use service::{BakedGoodService, BakeryService};
pub use state::AppState;
pub use store::connect;

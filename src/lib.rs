//! Product CRUD service: JSON envelope API over a pluggable persistence gateway.

pub mod config;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod migration;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{ProductSchema, Settings, StoreKind};
pub use entity::{CatalogProduct, Entity, Product};
pub use error::{AppError, ConfigError};
pub use gateway::{Gateway, MemoryGateway, PgGateway};
pub use migration::ensure_table;
pub use response::Envelope;
pub use routes::app;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, parse_url};

//! Process settings read from the environment (`.env` is loaded by the binary).

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/products";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9999";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Which product shape the service exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProductSchema {
    /// name, description, price, amount.
    #[default]
    Inventory,
    /// code, name, price.
    Catalog,
}

impl FromStr for ProductSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inventory" => Ok(ProductSchema::Inventory),
            "catalog" => Ok(ProductSchema::Catalog),
            _ => Err("expected inventory or catalog".into()),
        }
    }
}

/// Backing store for the persistence gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Postgres,
    /// Process-local, lost on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err("expected postgres or memory".into()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub schema: ProductSchema,
    pub store: StoreKind,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            schema: ProductSchema::default(),
            store: StoreKind::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();
        if let Some(url) = get("DATABASE_URL") {
            settings.database_url = url;
        }
        if let Some(addr) = get("BIND_ADDR") {
            settings.bind_addr = addr;
        }
        if let Some(v) = get("DB_MAX_CONNECTIONS") {
            settings.max_connections = parse("DB_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = get("PRODUCT_SCHEMA") {
            settings.schema = parse("PRODUCT_SCHEMA", &v)?;
        }
        if let Some(v) = get("STORE") {
            settings.store = parse("STORE", &v)?;
        }
        if let Some(v) = get("MAX_BODY_BYTES") {
            settings.max_body_bytes = parse("MAX_BODY_BYTES", &v)?;
        }
        Ok(settings)
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

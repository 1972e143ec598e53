//! HTTP handlers for entity CRUD and the router fallbacks.

pub mod common;
pub mod entity;
pub use common::*;
pub use entity::*;

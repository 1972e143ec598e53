//! Entity descriptors: one generic CRUD surface, instantiated per product shape.

mod catalog;
mod product;

pub use catalog::{CatalogProduct, CatalogProductPatch};
pub use product::{Product, ProductPatch};

use crate::sql::FieldValue;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// Fractional digits kept for prices, matching the `NUMERIC(16,2)` columns.
pub const PRICE_SCALE: u32 = 2;

/// Round half away from zero to [`PRICE_SCALE`] digits and pad to exactly that scale.
pub fn to_price(value: Decimal) -> Decimal {
    let mut price = value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    price.rescale(PRICE_SCALE);
    price
}

/// A non-key column: name, SQL type, and the default used when the table is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub default: &'static str,
}

/// A record with a store-assigned `i64` primary key named `id`.
///
/// `Default` is the zero-valued record returned for ids that do not exist.
/// [`Entity::values`] and [`Entity::patch_values`] must follow [`Entity::COLUMNS`] order.
pub trait Entity:
    Serialize + DeserializeOwned + Default + Clone + Send + Sync + Unpin + for<'r> FromRow<'r, PgRow> + 'static
{
    /// Fields present in an update payload; absent ones are `None`.
    type Patch: DeserializeOwned + Default + Send + Sync + 'static;

    const LABEL: &'static str;
    const LABEL_PLURAL: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [Column];

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    fn values(&self) -> Vec<FieldValue>;

    fn patch_values(patch: &Self::Patch) -> Vec<FieldValue>;

    /// Overwrite only the fields present in `patch`.
    fn apply(&mut self, patch: Self::Patch);

    /// Bring values to their stored precision before persisting.
    fn normalize(&mut self);
}

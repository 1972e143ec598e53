use super::{to_price, Column, Entity};
use crate::sql::FieldValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product keyed by a merchant code instead of stock figures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct CatalogProduct {
    #[serde(skip_deserializing)]
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price: Decimal,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogProductPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

impl Entity for CatalogProduct {
    type Patch = CatalogProductPatch;

    const LABEL: &'static str = "Product";
    const LABEL_PLURAL: &'static str = "Products";
    const TABLE: &'static str = "catalog_products";
    const COLUMNS: &'static [Column] = &[
        Column { name: "code", sql_type: "TEXT", default: "''" },
        Column { name: "name", sql_type: "TEXT", default: "''" },
        Column { name: "price", sql_type: "NUMERIC(16,2)", default: "0" },
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(Some(self.code.clone())),
            FieldValue::Text(Some(self.name.clone())),
            FieldValue::Decimal(Some(self.price)),
        ]
    }

    fn patch_values(patch: &CatalogProductPatch) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(patch.code.clone()),
            FieldValue::Text(patch.name.clone()),
            FieldValue::Decimal(patch.price),
        ]
    }

    fn apply(&mut self, patch: CatalogProductPatch) {
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = to_price(price);
        }
    }

    fn normalize(&mut self) {
        self.price = to_price(self.price);
    }
}

use super::{to_price, Column, Entity};
use crate::sql::FieldValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stocked product: the default shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Product {
    #[serde(skip_deserializing)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub amount: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub amount: Option<i32>,
}

impl Entity for Product {
    type Patch = ProductPatch;

    const LABEL: &'static str = "Product";
    const LABEL_PLURAL: &'static str = "Products";
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [Column] = &[
        Column { name: "name", sql_type: "TEXT", default: "''" },
        Column { name: "description", sql_type: "TEXT", default: "''" },
        Column { name: "price", sql_type: "NUMERIC(16,2)", default: "0" },
        Column { name: "amount", sql_type: "INTEGER", default: "0" },
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(Some(self.name.clone())),
            FieldValue::Text(Some(self.description.clone())),
            FieldValue::Decimal(Some(self.price)),
            FieldValue::Int(Some(self.amount)),
        ]
    }

    fn patch_values(patch: &ProductPatch) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(patch.name.clone()),
            FieldValue::Text(patch.description.clone()),
            FieldValue::Decimal(patch.price),
            FieldValue::Int(patch.amount),
        ]
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = to_price(price);
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
    }

    fn normalize(&mut self) {
        self.price = to_price(self.price);
    }
}

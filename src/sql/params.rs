//! Typed column values bound as PostgreSQL parameters.

use rust_decimal::Decimal;
use sqlx::postgres::PgArguments;
use sqlx::Arguments;

/// One column value. `None` binds a typed NULL, which the update statement
/// reads as "leave the column as it is".
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Int(Option<i32>),
    Decimal(Option<Decimal>),
}

impl FieldValue {
    fn add_to(self, args: &mut PgArguments) -> Result<(), sqlx::Error> {
        match self {
            FieldValue::Text(v) => args.add(v),
            FieldValue::Int(v) => args.add(v),
            FieldValue::Decimal(v) => args.add(v),
        }
        .map_err(sqlx::Error::Encode)
    }
}

/// Bind `values` as `$1..$n`, then the id (if any) as `$n+1`.
pub fn to_arguments(values: Vec<FieldValue>, id: Option<i64>) -> Result<PgArguments, sqlx::Error> {
    let mut args = PgArguments::default();
    for v in values {
        v.add_to(&mut args)?;
    }
    if let Some(id) = id {
        args.add(id).map_err(sqlx::Error::Encode)?;
    }
    Ok(args)
}

/// Arguments for a statement whose only parameter is the id.
pub fn id_argument(id: i64) -> Result<PgArguments, sqlx::Error> {
    to_arguments(Vec::new(), Some(id))
}

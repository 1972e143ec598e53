//! Builds parameterized SELECT, INSERT, UPDATE, DELETE and DDL from an entity's table and columns.

use crate::entity::Column;

pub const ID_COLUMN: &str = "id";

/// Quote identifier for PostgreSQL (identifiers only ever come from entity descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `"id", "col1", ...` in descriptor order.
fn column_list(columns: &[Column]) -> String {
    std::iter::once(ID_COLUMN)
        .chain(columns.iter().map(|c| c.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by id.
pub fn select_all(table: &str, columns: &[Column]) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(columns),
        quoted(table),
        quoted(ID_COLUMN)
    )
}

/// SELECT by id. Caller binds id as `$1`.
pub fn select_by_id(table: &str, columns: &[Column]) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(columns),
        quoted(table),
        quoted(ID_COLUMN)
    )
}

/// INSERT all non-key columns; the store assigns the id. Returns the created row.
pub fn insert(table: &str, columns: &[Column]) -> String {
    let names: Vec<String> = columns.iter().map(|c| quoted(c.name)).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table),
        names.join(", "),
        placeholders.join(", "),
        column_list(columns)
    )
}

/// Partial UPDATE: a NULL parameter keeps the current value. Columns bind as `$1..$n`, id as `$n+1`.
pub fn update_fields(table: &str, columns: &[Column]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let q = quoted(c.name);
            format!("{} = COALESCE(${}, {})", q, i + 1, q)
        })
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(table),
        sets.join(", "),
        quoted(ID_COLUMN),
        columns.len() + 1,
        column_list(columns)
    )
}

/// DELETE by id. Caller binds id as `$1`.
pub fn delete_by_id(table: &str) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table), quoted(ID_COLUMN))
}

/// CREATE TABLE IF NOT EXISTS with a BIGSERIAL id and NOT NULL defaulted columns.
pub fn create_table(table: &str, columns: &[Column]) -> String {
    let mut defs = vec![format!("{} BIGSERIAL PRIMARY KEY", quoted(ID_COLUMN))];
    defs.extend(
        columns
            .iter()
            .map(|c| format!("{} {} NOT NULL DEFAULT {}", quoted(c.name), c.sql_type, c.default)),
    );
    format!("CREATE TABLE IF NOT EXISTS {} ({})", quoted(table), defs.join(", "))
}

/// CREATE DATABASE for a name taken from the connection URL.
pub fn create_database(name: &str) -> String {
    format!("CREATE DATABASE {}", quoted(name))
}

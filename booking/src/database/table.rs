//! SQLite-backed query executor.
//!
//! A [`Table`] borrows an open [`Database`] and translates records into
//! single-row `INSERT` statements and full-table `SELECT`s.

use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params_from_iter, Connection};
use serde_json::{Number, Value};

use crate::error::Result;
use crate::query::{validate_identifier, QueryExecutor, Record};

use super::connection::Database;

/// A query executor bound to one table of an open database.
///
/// # Examples
///
/// ```
/// use booking::database::Database;
/// use booking::query::QueryExecutor;
/// use serde_json::json;
///
/// let db = Database::open_in_memory().unwrap();
/// let table = db.table("reservations").unwrap();
///
/// let row = json!({
///     "date": "2017/06/10",
///     "time": "06:02 AM",
///     "party": 4,
///     "name": "family",
///     "email": "username@example.com"
/// });
/// let ids = table.insert(row.as_object().unwrap()).unwrap();
/// assert_eq!(ids, vec![1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'db> {
    conn: &'db Connection,
    name: &'db str,
}

impl Database {
    /// Returns a query executor for the named table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] if `name` is not a plain
    /// SQL identifier.
    pub fn table<'db>(&'db self, name: &'db str) -> Result<Table<'db>> {
        validate_identifier(name)?;
        Ok(Table {
            conn: &self.conn,
            name,
        })
    }
}

impl Table<'_> {
    /// Returns the table name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name
    }

    fn insert_sql(&self, record: &Record) -> Result<String> {
        if record.is_empty() {
            return Ok(format!("INSERT INTO \"{}\" DEFAULT VALUES", self.name));
        }

        let mut columns = Vec::with_capacity(record.len());
        for column in record.keys() {
            validate_identifier(column)?;
            columns.push(format!("\"{column}\""));
        }
        let placeholders = (1..=record.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!(
            "INSERT INTO \"{}\" ({}) VALUES ({placeholders})",
            self.name,
            columns.join(", ")
        ))
    }
}

impl QueryExecutor for Table<'_> {
    fn insert(&self, record: &Record) -> Result<Vec<i64>> {
        let sql = self.insert_sql(record)?;
        let values = record.values().map(to_sql_value).collect::<Result<Vec<_>>>()?;

        self.conn.execute(&sql, params_from_iter(values))?;
        Ok(vec![self.conn.last_insert_rowid()])
    }

    fn select(&self) -> Result<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM \"{}\" ORDER BY rowid", self.name))?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let rows = stmt
            .query_map([], |row| {
                let mut record = Record::new();
                for (index, column) in columns.iter().enumerate() {
                    record.insert(column.clone(), from_sql_value(row.get_ref(index)?));
                }
                Ok(record)
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(rows)
    }
}

/// Converts a JSON value into the SQLite value stored for it.
///
/// Arrays and objects are stored as their JSON text.
fn to_sql_value(value: &Value) -> Result<SqlValue> {
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Bool(flag) => SqlValue::Integer(i64::from(*flag)),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => SqlValue::Integer(integer),
            None => SqlValue::Real(number.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(text) => SqlValue::Text(text.clone()),
        Value::Array(_) | Value::Object(_) => SqlValue::Text(serde_json::to_string(value)?),
    })
}

fn from_sql_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(integer) => Value::from(integer),
        ValueRef::Real(real) => Number::from_f64(real).map_or(Value::Null, Value::Number),
        ValueRef::Text(text) => Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(bytes) => Value::from(bytes.to_vec()),
    }
}

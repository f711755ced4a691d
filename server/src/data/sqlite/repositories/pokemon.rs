//! Pokemon repository for SQLite operations
//!
//! Composed queries arrive with one `?` per parameter. SQLite has no array
//! binding, so every `Param::List` is expanded into `(?, ?, ...)` here, in
//! placeholder order, before the values are bound.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool, TypeInfo, ValueRef};

use crate::data::sqlite::SqliteError;
use crate::data::types::{CellValue, Param, ResultRow};

/// Run a composed query and decode every row
pub async fn fetch_rows(
    pool: &SqlitePool,
    sql: &str,
    params: &[Param],
) -> Result<Vec<ResultRow>, SqliteError> {
    let (expanded, values) = expand_placeholders(sql, params)?;
    tracing::trace!(sql = %expanded, values = values.len(), "Executing pokemon query");

    let mut query = sqlx::query(&expanded);
    for value in &values {
        query = query.bind(*value);
    }

    let rows = query.fetch_all(pool).await?;
    rows.iter()
        .map(decode_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

/// Every stored name in catalog order
pub async fn all_names(pool: &SqlitePool) -> Result<Vec<String>, SqliteError> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM pokemonattributes ORDER BY rowid")
        .fetch_all(pool)
        .await?;
    Ok(names)
}

/// Number of stored pokemon
pub async fn count(pool: &SqlitePool) -> Result<u64, SqliteError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemonattributes")
        .fetch_one(pool)
        .await?;
    Ok(count.max(0) as u64)
}

/// Rewrite `sql` so every list parameter gets one placeholder per value
///
/// Returns the rewritten statement and the flattened values in bind order.
/// Question marks inside single-quoted literals are left alone.
pub(crate) fn expand_placeholders<'a>(
    sql: &str,
    params: &'a [Param],
) -> Result<(String, Vec<&'a str>), SqliteError> {
    let mut expanded = String::with_capacity(sql.len() + params.len() * 3);
    let mut values = Vec::with_capacity(params.iter().map(Param::value_count).sum());
    let mut pending = params.iter();
    let mut placeholders = 0usize;
    let mut in_literal = false;

    for ch in sql.chars() {
        match ch {
            '\'' => {
                in_literal = !in_literal;
                expanded.push(ch);
            }
            '?' if !in_literal => {
                placeholders += 1;
                match pending.next() {
                    Some(Param::Text(value)) => {
                        expanded.push('?');
                        values.push(value.as_str());
                    }
                    Some(Param::List(items)) => {
                        expanded.push('(');
                        for (i, item) in items.iter().enumerate() {
                            if i > 0 {
                                expanded.push_str(", ");
                            }
                            expanded.push('?');
                            values.push(item.as_str());
                        }
                        expanded.push(')');
                    }
                    None => expanded.push('?'),
                }
            }
            _ => expanded.push(ch),
        }
    }

    if placeholders != params.len() {
        return Err(SqliteError::ParamMismatch {
            placeholders,
            params: params.len(),
        });
    }

    Ok((expanded, values))
}

/// Decode a `name, image, value_1, ...` row
fn decode_row(row: &SqliteRow) -> Result<ResultRow, sqlx::Error> {
    let mut cells = (0..row.len())
        .map(|idx| decode_cell(row, idx))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();

    let name = cells.next().map(|c| c.to_string()).unwrap_or_default();
    let image = cells.next().map(|c| c.to_string()).unwrap_or_default();

    Ok(ResultRow {
        name,
        image,
        values: cells.collect(),
    })
}

/// Decode one cell by the storage class of the value it holds
fn decode_cell(row: &SqliteRow, idx: usize) -> Result<CellValue, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(CellValue::Null);
    }
    let type_name = raw.type_info().name().to_ascii_uppercase();

    match type_name.as_str() {
        "INTEGER" | "INT" | "BIGINT" | "BOOLEAN" => {
            row.try_get::<i64, _>(idx).map(CellValue::Integer)
        }
        "REAL" | "FLOAT" | "DOUBLE" | "NUMERIC" => row.try_get::<f64, _>(idx).map(CellValue::Real),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(idx)
            .map(|bytes| CellValue::Text(String::from_utf8_lossy(&bytes).into_owned())),
        _ => row.try_get::<String, _>(idx).map(CellValue::Text),
    }
}

//! Data-access contracts for students and notes.
//!
//! Repositories are stateless facades over a [`Database`](crate::Database):
//! no caching, no shared connection. Every operation opens its own
//! connection, runs one statement (or an insert/update followed by a read on
//! the same connection) and drops the connection before returning.
//!
//! Absence is not an error: lookups and updates of a missing row return
//! `None`, deletes return `false`.

mod note;
mod student;

use rusqlite::Row;
use rusqlite::types::{Type, ValueRef};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub use note::NoteRepository;
pub use student::StudentRepository;

/// Current time as stored in `created_at`/`updated_at`.
fn now_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// SQLite `CURRENT_TIMESTAMP` text, UTC. Found in databases created before
/// timestamps were stored as integers.
const TEXT_TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Reads a timestamp column as an `OffsetDateTime`.
///
/// Rows written by this crate hold Unix seconds; `CURRENT_TIMESTAMP` text is
/// accepted as well.
fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<OffsetDateTime> {
    let value = row.get_ref(idx)?;
    match value {
        ValueRef::Integer(secs) => OffsetDateTime::from_unix_timestamp(secs).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e))
        }),
        ValueRef::Text(_) => {
            let text = value.as_str().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })?;
            PrimitiveDateTime::parse(text, TEXT_TIMESTAMP)
                .map(PrimitiveDateTime::assume_utc)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
        }
        other => Err(rusqlite::Error::InvalidColumnType(
            idx,
            row.as_ref().column_name(idx)?.to_string(),
            other.data_type(),
        )),
    }
}

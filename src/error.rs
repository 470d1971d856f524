use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the storage layer.
///
/// Repositories surface these unchanged. They never retry and never fall
/// back to canned data; the only guarantee is that the connection used by the
/// failing operation has been released by the time the error is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("failed to open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed to prepare, execute or decode.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_path() {
        let err = StoreError::Open {
            path: PathBuf::from("/nowhere/roster.db"),
            source: rusqlite::Error::InvalidQuery,
        };

        let message = err.to_string();
        assert!(message.contains("/nowhere/roster.db"));
    }

    #[test]
    fn sqlite_errors_convert_with_question_mark() {
        fn fails() -> Result<i64, StoreError> {
            let value: i64 = Err(rusqlite::Error::QueryReturnedNoRows)?;
            Ok(value)
        }

        assert!(matches!(fails(), Err(StoreError::Sqlite(_))));
    }
}

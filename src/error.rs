use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of an import failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Schema,
    Storage,
}

/// Everything that can stop an import. Nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Source file missing or unreadable
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The database file could not be opened or created
    #[error("cannot open database '{}': {source}", path.display())]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: duckdb::Error,
    },

    /// No header row, or the CSV itself is malformed
    #[error("cannot parse CSV '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The rows do not fit the destination table (column names, counts or types)
    #[error("rows do not match table schema: {0}")]
    Schema(String),

    /// Any other engine failure, e.g. a missing table or a constraint violation
    #[error("storage engine error: {0}")]
    Storage(#[source] duckdb::Error),
}

pub type ImportResult<T> = Result<T, ImportError>;

impl ImportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImportError::Io { .. } | ImportError::DatabaseOpen { .. } => ErrorKind::Io,
            ImportError::Parse { .. } => ErrorKind::Parse,
            ImportError::Schema(_) => ErrorKind::Schema,
            ImportError::Storage(_) => ErrorKind::Storage,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn database_open(path: impl Into<PathBuf>, source: duckdb::Error) -> Self {
        ImportError::DatabaseOpen {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImportError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Sort a CSV reader failure into Io or Parse
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => ImportError::io(path, source),
            _ => ImportError::parse(path, message),
        }
    }

    /// Sort an engine failure raised while preparing or executing the batch.
    /// DuckDB reports binder and conversion problems by message prefix only.
    pub(crate) fn from_engine(err: duckdb::Error) -> Self {
        if let duckdb::Error::InvalidParameterCount(..) = err {
            return ImportError::Schema(err.to_string());
        }

        let message = err.to_string();
        let schema_prefixes = ["Binder Error", "Conversion Error", "Mismatch Type Error"];
        if schema_prefixes
            .iter()
            .any(|prefix| message.starts_with(prefix))
        {
            ImportError::Schema(message)
        } else {
            ImportError::Storage(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_count_is_a_schema_error() {
        let err = ImportError::from_engine(duckdb::Error::InvalidParameterCount(2, 3));
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn database_open_keeps_engine_error_as_source() {
        use std::error::Error as _;

        let err = ImportError::database_open("x.duckdb", duckdb::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.source().unwrap().is::<duckdb::Error>());
    }

    #[test]
    fn other_engine_errors_are_storage_errors() {
        let err = ImportError::from_engine(duckdb::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}

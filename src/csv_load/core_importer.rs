use duckdb::{params_from_iter, Connection};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::csv_load::csv_source::CsvSource;
use crate::csv_load::insert_statement::InsertStatement;
use crate::error::{ImportError, ImportResult};

// Importer that owns the paths and target table for a single import
pub struct CsvImporter {
    csv_path: PathBuf,
    db_path: PathBuf,
    table_name: String,
}

// The CsvImporter reads the whole CSV first and only then touches the database,
// so a missing or malformed file leaves the database file untouched.
// The connection and the file handle live inside the methods below and are
// dropped on every exit path.
impl CsvImporter {
    // Create new CsvImporter
    pub fn new(csv_path: impl AsRef<Path>, db_path: impl AsRef<Path>, table_name: &str) -> Self {
        Self {
            csv_path: csv_path.as_ref().to_path_buf(),
            db_path: db_path.as_ref().to_path_buf(),
            table_name: table_name.to_string(),
        }
    }

    // Run the import
    // This is the main workflow for the CsvImporter
    pub fn launch_importer(&self) -> ImportResult<usize> {
        let source = CsvSource::read(&self.csv_path)?;
        let statement = InsertStatement::new(&self.table_name, &source.headers());
        debug!(
            "Prepared insert with {} placeholders: {}",
            statement.placeholder_count(),
            statement.sql()
        );

        let mut conn = self.open_connection()?;
        let inserted = Self::insert_rows(&mut conn, &statement, &source).map_err(|e| {
            warn!(
                "Import of '{}' into {} rejected: {}",
                source.path().display(),
                self.table_name,
                e
            );
            e
        })?;

        Ok(inserted)
    }

    // Open the database file, creating it if it does not exist
    fn open_connection(&self) -> ImportResult<Connection> {
        Connection::open(&self.db_path).map_err(|e| ImportError::database_open(&self.db_path, e))
    }

    // Execute the statement once per row inside one transaction
    // Returning early drops the transaction, which rolls it back
    fn insert_rows(
        conn: &mut Connection,
        statement: &InsertStatement,
        source: &CsvSource,
    ) -> ImportResult<usize> {
        let tx = conn.transaction().map_err(ImportError::Storage)?;
        {
            let mut stmt = tx
                .prepare(statement.sql())
                .map_err(ImportError::from_engine)?;
            for row in source.rows() {
                stmt.execute(params_from_iter(row.iter()))
                    .map_err(ImportError::from_engine)?;
            }
        }
        tx.commit().map_err(ImportError::from_engine)?;
        Ok(source.rows().len())
    }

    // Getter methods
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Import every data row of `csv_path` into the existing table `table_name`
/// of the DuckDB database at `db_path`.
///
/// The first CSV row names the target columns. All rows are inserted in file
/// order within one transaction; on any failure nothing is committed and the
/// error is returned as is.
pub fn import_csv_to_table(
    csv_path: impl AsRef<Path>,
    db_path: impl AsRef<Path>,
    table_name: &str,
) -> ImportResult<()> {
    let importer = CsvImporter::new(csv_path, db_path, table_name);

    info!(
        "Importing '{}' into table {} of '{}'",
        importer.csv_path().display(),
        importer.table_name(),
        importer.db_path().display()
    );

    let inserted = importer.launch_importer()?;

    info!(
        "Inserted {} rows into table {}",
        inserted,
        importer.table_name()
    );
    Ok(())
}

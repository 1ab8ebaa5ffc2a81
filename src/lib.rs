pub mod csv_load;
pub mod error;

#[cfg(feature = "python")]
mod csv_importer;

pub use csv_load::core_importer::{import_csv_to_table, CsvImporter};
pub use error::{ErrorKind, ImportError, ImportResult};

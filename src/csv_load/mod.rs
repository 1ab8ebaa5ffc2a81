pub mod core_importer;
pub mod csv_source;
pub mod insert_statement;

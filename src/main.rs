use clap::Parser;
use csv_importer::import_csv_to_table;
use tracing_subscriber::{fmt, EnvFilter};

/// Import the rows of a CSV file into an existing DuckDB table
#[derive(Parser, Debug)]
#[command(name = "csv-importer", version)]
struct Args {
    /// CSV file whose first row names the target columns
    csv_path: String,
    /// DuckDB database file, created if it does not exist
    db_path: String,
    /// Existing table to append the rows to
    table_name: String,
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).init();

    let args = Args::parse();

    if let Err(e) = import_csv_to_table(&args.csv_path, &args.db_path, &args.table_name) {
        eprintln!("An error occurred ({:?}): {}", e.kind(), e);
        std::process::exit(1);
    }
}

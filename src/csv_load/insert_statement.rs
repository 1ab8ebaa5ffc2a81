/// The single parameterized INSERT run once per CSV row.
///
/// Trust boundary: the table name and the column names are copied into the
/// SQL text as given, without quoting or validation. A header taken from an
/// untrusted file can therefore inject SQL or produce a malformed statement.
/// Field values never pass through here; they are always bound as parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    sql: String,
    placeholder_count: usize,
}

impl InsertStatement {
    pub fn new(table_name: &str, columns: &[&str]) -> Self {
        let placeholders = vec!["?"; columns.len()].join(",");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table_name,
            columns.join(","),
            placeholders
        );
        Self {
            sql,
            placeholder_count: columns.len(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }
}

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{ImportError, ImportResult};

/// A fully read CSV file: the header row plus every data row in file order
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl CsvSource {
    /// Open and read the whole file.
    /// The reader is flexible so that rows with the wrong field count still
    /// reach the storage engine, which is the one that rejects them.
    pub fn read(path: &Path) -> ImportResult<Self> {
        let file = File::open(path).map_err(|e| ImportError::io(path, e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| ImportError::from_csv(path, e))?
            .clone();
        if headers.is_empty() {
            return Err(ImportError::parse(path, "file has no header row"));
        }

        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ImportError::from_csv(path, e))?;

        debug!(
            "Read {} data rows with {} columns from '{}'",
            rows.len(),
            headers.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column names exactly as written in the first row
    pub fn headers(&self) -> Vec<&str> {
        self.headers.iter().collect()
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_header_and_rows_in_order() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, "id,name").unwrap();
        writeln!(temp_file, "1,first").unwrap();
        writeln!(temp_file, "2,second").unwrap();

        let source = CsvSource::read(temp_file.path()).unwrap();

        assert_eq!(source.headers(), vec!["id", "name"]);
        assert_eq!(source.rows().len(), 2);
        assert_eq!(&source.rows()[1][1], "second");
    }

    #[test]
    fn headers_are_kept_verbatim() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, "Id, Full Name").unwrap();

        let source = CsvSource::read(temp_file.path()).unwrap();

        assert_eq!(source.headers(), vec!["Id", " Full Name"]);
        assert!(source.rows().is_empty());
    }

    #[test]
    fn ragged_rows_are_passed_through() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, "a,b,c").unwrap();
        writeln!(temp_file, "1,2").unwrap();

        let source = CsvSource::read(temp_file.path()).unwrap();

        assert_eq!(source.rows()[0].len(), 2);
    }

    #[test]
    fn empty_file_is_a_parse_error() {
        let temp_file = NamedTempFile::with_suffix(".csv").unwrap();

        let err = CsvSource::read(temp_file.path()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, "a,b").unwrap();
        temp_file.write_all(&[0xFF, 0xFE, b',', b'1', b'\n']).unwrap();

        let err = CsvSource::read(temp_file.path()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}

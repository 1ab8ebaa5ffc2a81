use pyo3::prelude::*;

use crate::error::{ErrorKind, ImportError};

fn to_py_err(err: ImportError) -> PyErr {
    match err.kind() {
        ErrorKind::Io => PyErr::new::<pyo3::exceptions::PyOSError, _>(err.to_string()),
        _ => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(err.to_string()),
    }
}

#[pyfunction]
fn import_csv_to_table(csv_path: &str, db_path: &str, table_name: &str) -> PyResult<()> {
    crate::csv_load::core_importer::import_csv_to_table(csv_path, db_path, table_name)
        .map_err(to_py_err)?;
    Ok(())
}

#[pymodule]
#[pyo3(name = "csv_importer")]
fn csv_importer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(import_csv_to_table, m)?)?;
    Ok(())
}

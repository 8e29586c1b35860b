//! CSV dataset adapter: loads the historical patient table.
//!
//! The dataset is a plain comma-separated file with a header row and
//! purely numeric cells. The parsed table is memoized for the process
//! lifetime; the file is read at most once.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::domain::DatasetTable;
use crate::ports::{DatasetProvider, LoadError};

/// Default dataset location, relative to the executable.
pub const DEFAULT_DATA_PATH: &str = "data/heart_disease_dataset.csv";

/// Environment variable overriding the dataset location.
pub const DATA_PATH_ENV: &str = "CARDIOSCOPE_DATA_PATH";

/// Columns the exploration views require.
const REQUIRED_COLUMNS: [&str; 2] = ["age", "sex"];

/// Loads the dataset once and caches the outcome.
pub struct CsvDatasetProvider {
    path: PathBuf,
    cell: OnceLock<Result<DatasetTable, LoadError>>,
}

impl CsvDatasetProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// Provider at the default location (with environment override).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new(super::resolve_path(DEFAULT_DATA_PATH, DATA_PATH_ENV))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<DatasetTable, LoadError> {
        let path = self.path.display().to_string();

        if !self.path.exists() {
            return Err(LoadError::Missing { path });
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| LoadError::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let table = parse_csv(&content, &path)?;

        tracing::info!(
            "Loaded dataset from {} ({} rows, {} columns)",
            path,
            table.len(),
            table.columns().len()
        );

        Ok(table)
    }
}

impl DatasetProvider for CsvDatasetProvider {
    fn load(&self) -> Result<&DatasetTable, LoadError> {
        match self.cell.get_or_init(|| self.read()) {
            Ok(table) => Ok(table),
            Err(e) => Err(e.clone()),
        }
    }
}

fn parse_csv(content: &str, path: &str) -> Result<DatasetTable, LoadError> {
    let malformed = |message: String| LoadError::Malformed {
        path: path.to_string(),
        message,
    };

    let mut lines = content.lines().filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| malformed("file is empty".to_string()))?;
    let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(malformed(format!("missing required column `{required}`")));
        }
    }

    let mut rows = Vec::new();
    for (line_no, line) in lines.enumerate() {
        let mut row = Vec::with_capacity(columns.len());
        for (col, cell) in line.split(',').enumerate() {
            let value: f64 = cell.trim().parse().map_err(|_| {
                malformed(format!(
                    "non-numeric cell {:?} at row {}, column {}",
                    cell.trim(),
                    line_no + 2,
                    columns.get(col).map_or("?", String::as_str)
                ))
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    DatasetTable::new(columns, rows).map_err(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "age,sex,target\n63,1,1\n37,1,1\n41,0,0\n";

    fn write_dataset(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("heart.csv");
        std::fs::write(&path, content).expect("write dataset");
        path
    }

    #[test]
    fn test_load_valid_dataset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = CsvDatasetProvider::new(write_dataset(&dir, VALID));

        let table = provider.load().expect("should load");
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns(), ["age", "sex", "target"]);
        assert_eq!(table.column("age"), Some(vec![63.0, 37.0, 41.0]));
    }

    #[test]
    fn test_load_is_memoized_and_reads_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_dataset(&dir, VALID);
        let provider = CsvDatasetProvider::new(path.clone());

        let first = provider.load().expect("first load");
        std::fs::remove_file(&path).expect("remove dataset");
        let second = provider.load().expect("second load");

        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_missing_file_names_expected_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.csv");
        let provider = CsvDatasetProvider::new(&path);

        let err = provider.load().unwrap_err();
        assert!(matches!(err, LoadError::Missing { .. }));
        assert_eq!(err.path(), path.display().to_string());
    }

    #[test]
    fn test_missing_required_column() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = CsvDatasetProvider::new(write_dataset(&dir, "age,chol\n63,240\n"));

        let err = provider.load().unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(err.to_string().contains("sex"));
    }

    #[test]
    fn test_non_numeric_cell() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = CsvDatasetProvider::new(write_dataset(&dir, "age,sex\n63,male\n"));

        let err = provider.load().unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(err.to_string().contains("male"));
    }

    #[test]
    fn test_ragged_row() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = CsvDatasetProvider::new(write_dataset(&dir, "age,sex\n63,1\n37\n"));

        assert!(matches!(
            provider.load().unwrap_err(),
            LoadError::Malformed { .. }
        ));
    }

    #[test]
    fn test_dataset_without_target_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = CsvDatasetProvider::new(write_dataset(&dir, "age,sex\n63,1\n"));

        let table = provider.load().expect("should load");
        assert!(!table.has_column("target"));
    }
}

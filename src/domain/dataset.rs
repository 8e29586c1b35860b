//! The historical patient dataset as an immutable in-memory table.

/// A row-oriented table of numeric columns, read once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DatasetTable {
    /// Create a table, checking that every row matches the header width.
    ///
    /// # Errors
    /// Returns a message naming the first ragged row.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, String> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(format!(
                    "row {} has {} cells, expected {}",
                    i + 1,
                    row.len(),
                    columns.len()
                ));
            }
        }
        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of a named column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// The first `n` rows (fewer if the table is shorter).
    #[must_use]
    pub fn head(&self, n: usize) -> &[Vec<f64>] {
        &self.rows[..self.rows.len().min(n)]
    }
}

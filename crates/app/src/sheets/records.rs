//! Header-keyed sheet records.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::sheets::SheetsError;

/// One spreadsheet row keyed by the header row's column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRecord {
    /// 1-based spreadsheet row number (the header is row 1).
    pub row_number: usize,

    cells: FxHashMap<String, String>,
}

impl SheetRecord {
    #[must_use]
    pub fn new(row_number: usize, cells: FxHashMap<String, String>) -> Self {
        Self { row_number, cells }
    }

    /// Build a record from `(column, value)` pairs.
    #[must_use]
    pub fn from_pairs<'a>(
        row_number: usize,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self::new(
            row_number,
            pairs
                .into_iter()
                .map(|(column, value)| (column.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Trimmed cell text, or `None` when the column is missing or blank.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Turn a grid of cells into records keyed by its first row.
///
/// Short rows are padded with empty cells, cells beyond the header or under
/// a blank header are dropped, and rows with no content at all are skipped.
///
/// # Errors
///
/// Returns an error when two header cells share a name.
pub fn records_from_rows(rows: Vec<Vec<String>>) -> Result<Vec<SheetRecord>, SheetsError> {
    let mut rows = rows.into_iter();

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    let header: Vec<String> = header.into_iter().map(|name| name.trim().to_string()).collect();

    let mut seen = FxHashSet::default();

    if let Some(duplicate) = header
        .iter()
        .filter(|name| !name.is_empty())
        .find(|name| !seen.insert(name.as_str()))
    {
        return Err(SheetsError::DuplicateHeader(duplicate.clone()));
    }

    Ok(rows
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|(index, row)| {
            let mut cells = row.into_iter();

            let cells = header
                .iter()
                .map(|name| (name, cells.next().unwrap_or_default()))
                .filter(|(name, _)| !name.is_empty())
                .map(|(name, value)| (name.clone(), value))
                .collect();

            SheetRecord::new(index + 2, cells)
        })
        .collect())
}

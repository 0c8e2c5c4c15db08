//! CSV export reader.

use std::{fs::File, path::PathBuf};

use async_trait::async_trait;
use csv::ReaderBuilder;
use tracing::debug;

use crate::sheets::{
    SheetRecord, SheetSource, SheetsError,
    records::records_from_rows,
};

/// Reads a tab that was exported from the spreadsheet as CSV.
#[derive(Debug, Clone)]
pub struct CsvSheetSource {
    path: PathBuf,
}

impl CsvSheetSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>, SheetsError> {
        let file = File::open(&self.path).map_err(|source| SheetsError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        reader
            .records()
            .map(|record| Ok(record?.iter().map(ToString::to_string).collect()))
            .collect()
    }
}

#[async_trait]
impl SheetSource for CsvSheetSource {
    async fn fetch_records(&self) -> Result<Vec<SheetRecord>, SheetsError> {
        let rows = self.read_rows()?;

        debug!(path = %self.path.display(), rows = rows.len(), "read csv export");

        records_from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn reads_header_keyed_records() -> TestResult {
        let mut file = NamedTempFile::new()?;

        writeln!(file, "Name,Surname,Amount Due,Impression #")?;
        writeln!(file, "Thandi,Mokoena,\"R1,600.00\",IMP-001")?;
        writeln!(file, "Lerato,Dlamini")?;

        let records = CsvSheetSource::new(file.path()).fetch_records().await?;

        assert_eq!(records.len(), 2, "expected two data rows");

        let first = records.first().cloned().unwrap_or_default();
        let second = records.get(1).cloned().unwrap_or_default();

        assert_eq!(first.get("Amount Due"), Some("R1,600.00"));
        assert_eq!(first.get("Impression #"), Some("IMP-001"));
        assert_eq!(second.row_number, 3);
        assert_eq!(second.get("Impression #"), None);

        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = CsvSheetSource::new("/nonexistent/orders.csv")
            .fetch_records()
            .await;

        assert!(
            matches!(result, Err(SheetsError::Io { .. })),
            "expected Io error, got {result:?}"
        );
    }
}

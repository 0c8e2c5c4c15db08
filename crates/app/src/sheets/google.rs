//! Google Sheets values API client.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::sheets::{SheetRecord, SheetSource, SheetsError, records::records_from_rows};

/// Default Sheets API endpoint.
pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

/// Default worksheet tab holding the bookings.
pub const DEFAULT_WORKSHEET: &str = "A00";

/// Connection settings for reading one spreadsheet tab.
#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    /// API base, e.g. `"https://sheets.googleapis.com"`.
    pub api_base: String,

    /// OAuth bearer token with read access to the spreadsheet.
    pub access_token: Option<String>,

    pub spreadsheet_id: String,

    pub worksheet: String,
}

/// Reads a tab's values with `GET /v4/spreadsheets/{id}/values/{tab}`.
#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    config: GoogleSheetsConfig,
    http: Client,
}

impl GoogleSheetsClient {
    #[must_use]
    pub fn new(config: GoogleSheetsConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn values_url(&self) -> Result<Url, SheetsError> {
        let range = quoted_range(&self.config.worksheet);

        let mut url = Url::parse(&self.config.api_base)
            .map_err(|error| SheetsError::InvalidBaseUrl(format!("{}: {error}", self.config.api_base)))?;

        url.path_segments_mut()
            .map_err(|()| SheetsError::InvalidBaseUrl(self.config.api_base.clone()))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                &self.config.spreadsheet_id,
                "values",
                &range,
            ]);

        Ok(url)
    }

    /// Fetch the raw cell grid of the configured tab.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn fetch_values(&self) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.values_url()?;

        let mut request = self.http.get(url);

        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(SheetsError::UnexpectedResponse(format!(
                "values request failed with status {status}: {text}"
            )));
        }

        let parsed: ValueRange = response.json().await?;

        Ok(parsed
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsClient {
    async fn fetch_records(&self) -> Result<Vec<SheetRecord>, SheetsError> {
        let rows = self.fetch_values().await?;

        debug!(
            spreadsheet_id = %self.config.spreadsheet_id,
            worksheet = %self.config.worksheet,
            rows = rows.len(),
            "fetched sheet values"
        );

        records_from_rows(rows)
    }
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Quote a tab name so names like `A00` are not read as cell references.
fn quoted_range(worksheet: &str) -> String {
    format!("'{}'", worksheet.replace('\'', "''"))
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

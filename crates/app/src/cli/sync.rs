use std::path::PathBuf;

use clap::{ArgGroup, Args};
use snugfit_app::{
    context::AppContext,
    domain::sync::run_sync,
    sheets::{
        SheetSource,
        csv::CsvSheetSource,
        google::{DEFAULT_API_BASE, DEFAULT_WORKSHEET, GoogleSheetsClient, GoogleSheetsConfig},
    },
};

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["spreadsheet_id", "csv"])))]
pub(crate) struct SyncArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Google spreadsheet holding the bookings
    #[arg(long, env = "SPREADSHEET_ID")]
    spreadsheet_id: Option<String>,

    /// Worksheet tab to read
    #[arg(long, env = "SHEET_WORKSHEET", default_value = DEFAULT_WORKSHEET)]
    worksheet: String,

    /// OAuth access token with read access to the spreadsheet
    #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[arg(long, env = "SHEETS_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Read a CSV export of the worksheet instead of the live spreadsheet
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl SyncArgs {
    fn source(self) -> Box<dyn SheetSource> {
        match (self.csv, self.spreadsheet_id) {
            (Some(path), _) => Box::new(CsvSheetSource::new(path)),
            (None, spreadsheet_id) => Box::new(GoogleSheetsClient::new(GoogleSheetsConfig {
                api_base: self.api_base,
                access_token: self.access_token,
                spreadsheet_id: spreadsheet_id.unwrap_or_default(),
                worksheet: self.worksheet,
            })),
        }
    }
}

pub(crate) async fn run(args: SyncArgs) -> Result<(), String> {
    let context = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise database: {error}"))?;

    let source = args.source();

    let report = run_sync(source.as_ref(), context.sync.as_ref())
        .await
        .map_err(|error| format!("sync failed: {error}"))?;

    println!("{report}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: SyncArgs,
    }

    #[test]
    fn requires_a_source() {
        let result = Harness::try_parse_from(["sync", "--database-url", "postgres://localhost/snugfit"]);

        assert!(result.is_err(), "a spreadsheet id or csv path is required");
    }

    #[test]
    fn worksheet_defaults_to_a00() {
        let harness = Harness::try_parse_from([
            "sync",
            "--database-url",
            "postgres://localhost/snugfit",
            "--spreadsheet-id",
            "sheet-123",
        ])
        .expect("arguments should parse");

        assert_eq!(harness.args.worksheet, "A00");
        assert_eq!(harness.args.spreadsheet_id.as_deref(), Some("sheet-123"));
    }
}

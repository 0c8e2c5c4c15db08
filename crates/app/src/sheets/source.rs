//! Sheet source trait.

use async_trait::async_trait;
use mockall::automock;

use crate::sheets::{SheetsError, SheetRecord};

#[automock]
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Read every data row of the configured tab.
    async fn fetch_records(&self) -> Result<Vec<SheetRecord>, SheetsError>;
}

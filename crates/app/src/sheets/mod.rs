//! Spreadsheet row sources.

pub mod csv;
pub mod errors;
pub mod google;
pub mod records;
pub mod source;

pub use errors::SheetsError;
pub use records::SheetRecord;
pub use source::*;

//! Mapping of booking sheet rows onto database records.

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    domain::{customers::models::NewCustomer, sync::SyncError},
    sheets::SheetRecord,
};

pub const NAME: &str = "Name";
pub const SURNAME: &str = "Surname";
pub const CLUB_SCHOOL: &str = "School/Club";
pub const CONTACT_NUMBER: &str = "Contact Number";
pub const EMAIL: &str = "Email Address";
pub const PRODUCT_CODE: &str = "Product ID";
pub const COLOUR: &str = "Colour";
pub const ORDER_DATE: &str = "Order Date";
pub const IMPRESSION: &str = "Impression #";
pub const PAYMENT_METHOD: &str = "Payment Method";
pub const PAYMENT_STATUS: &str = "Paid/Not Paid";
pub const AMOUNT_DUE: &str = "Amount Due";
pub const LOGO: &str = "Logo";
pub const ADDITIONAL_INFO: &str = "Additional Info";
pub const EMAIL_STATUS: &str = "Email Status";

/// One booking sheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub row_number: usize,
    pub customer: NewCustomer,
    /// Blank codes and colours are stored as empty strings.
    pub product_code: String,
    pub colour_selection: String,
    pub order_date: Option<String>,
    pub impression_id: String,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    /// Cents.
    pub amount_due: Option<i64>,
    pub logo: Option<String>,
    pub additional_info: Option<String>,
    pub email_status: Option<String>,
}

impl OrderRow {
    /// Map a sheet record, rejecting rows that cannot be stored.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MalformedRow`] when the impression id is blank or
    /// the amount due is not a number.
    pub fn from_record(record: &SheetRecord) -> Result<Self, SyncError> {
        let row = record.row_number;
        let text = |column: &str| record.get(column).map(ToString::to_string);

        let impression_id = text(IMPRESSION)
            .ok_or_else(|| SyncError::malformed(row, format!("{IMPRESSION} is blank")))?;

        let amount_due = record
            .get(AMOUNT_DUE)
            .map(|amount| {
                parse_amount(amount).ok_or_else(|| {
                    SyncError::malformed(row, format!("{AMOUNT_DUE} {amount:?} is not a valid amount"))
                })
            })
            .transpose()?;

        Ok(Self {
            row_number: row,
            customer: NewCustomer {
                first_name: text(NAME),
                surname: text(SURNAME),
                club_school: text(CLUB_SCHOOL),
                contact_number: text(CONTACT_NUMBER),
                contact_email: text(EMAIL),
            },
            product_code: text(PRODUCT_CODE).unwrap_or_default(),
            colour_selection: text(COLOUR).unwrap_or_default(),
            order_date: text(ORDER_DATE),
            impression_id,
            payment_method: text(PAYMENT_METHOD),
            payment_status: text(PAYMENT_STATUS),
            amount_due,
            logo: text(LOGO),
            additional_info: text(ADDITIONAL_INFO),
            email_status: text(EMAIL_STATUS),
        })
    }
}

/// Parse a rand amount such as `R1,600.00` into cents.
///
/// Returns `None` for anything that is not a non-negative number.
#[must_use]
pub fn parse_amount(amount: &str) -> Option<i64> {
    let trimmed = amount.trim();

    let digits: String = trimmed
        .strip_prefix(['R', 'r'])
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    let value = Decimal::from_str(&digits).ok()?;

    if value.is_sign_negative() {
        return None;
    }

    value
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round()
        .to_i64()
}

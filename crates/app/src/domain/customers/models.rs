//! Customer Models

use crate::ids::TypedId;

/// Customer ID
pub type CustomerId = TypedId<Customer>;

/// Customer Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub club_school: Option<String>,
    pub contact_number: Option<String>,
    pub contact_email: Option<String>,
}

/// New Customer Model
///
/// Customers are matched on `first_name`, `surname` and `contact_email`,
/// with missing values matching each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub club_school: Option<String>,
    pub contact_number: Option<String>,
    pub contact_email: Option<String>,
}

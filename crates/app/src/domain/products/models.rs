//! Product Models

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<Product>;

/// Product Model
///
/// Prices are in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub product_code: String,
    pub colour_selection: String,
    pub base_price: i64,
    pub colour_surcharge: i64,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub product_code: String,
    pub colour_selection: String,
    pub base_price: i64,
    pub colour_surcharge: i64,
}

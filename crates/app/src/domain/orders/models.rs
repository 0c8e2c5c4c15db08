//! Order Models

use crate::{
    domain::{customers::models::CustomerId, products::models::ProductId},
    ids::TypedId,
};

/// Order ID
pub type OrderId = TypedId<Order>;

/// Order Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub order_date: Option<String>,
    pub impression_id: String,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    /// Cents.
    pub total_price: Option<i64>,
    pub public_image_url: Option<String>,
    pub additional_notes: Option<String>,
    pub email_status: Option<String>,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub order_date: Option<String>,
    pub impression_id: String,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub total_price: Option<i64>,
    pub public_image_url: Option<String>,
    pub additional_notes: Option<String>,
    pub email_status: Option<String>,
}

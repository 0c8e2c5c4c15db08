//! Orders Repository

#[cfg(test)]
use sqlx::query_as;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_scalar};

use crate::domain::{
    customers::models::CustomerId,
    orders::models::{NewOrder, Order, OrderId},
    products::models::ProductId,
};

const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
#[cfg(test)]
const GET_ORDER_BY_IMPRESSION_SQL: &str = include_str!("sql/get_order_by_impression.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert an order unless its impression id is already stored.
    ///
    /// Returns `None` when the order was skipped. Existing orders are never
    /// updated.
    pub(crate) async fn insert_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<Option<OrderId>, sqlx::Error> {
        let id: Option<i64> = query_scalar(INSERT_ORDER_SQL)
            .bind(order.order_date.as_deref())
            .bind(&order.impression_id)
            .bind(order.customer_id.into_i64())
            .bind(order.product_id.into_i64())
            .bind(order.payment_method.as_deref())
            .bind(order.payment_status.as_deref())
            .bind(order.total_price)
            .bind(order.public_image_url.as_deref())
            .bind(order.additional_notes.as_deref())
            .bind(order.email_status.as_deref())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(id.map(OrderId::from_i64))
    }

    #[cfg(test)]
    pub(crate) async fn get_order_by_impression(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        impression_id: &str,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_BY_IMPRESSION_SQL)
            .bind(impression_id)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_i64(row.try_get("order_id")?),
            order_date: row.try_get("order_date")?,
            impression_id: row.try_get("impression_id")?,
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            payment_method: row.try_get("payment_method")?,
            payment_status: row.try_get("payment_status")?,
            total_price: row.try_get("total_price")?,
            public_image_url: row.try_get("public_image_url")?,
            additional_notes: row.try_get("additional_notes")?,
            email_status: row.try_get("email_status")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            customers::{models::NewCustomer, repository::PgCustomersRepository},
            products::{models::NewProduct, repository::PgProductsRepository},
        },
        test::TestDb,
    };

    use super::*;

    async fn order_for(
        tx: &mut Transaction<'_, Postgres>,
        impression_id: &str,
    ) -> Result<NewOrder, sqlx::Error> {
        let customer_id = PgCustomersRepository::new()
            .create_customer(
                tx,
                &NewCustomer {
                    first_name: Some("Lerato".to_string()),
                    surname: Some("Dlamini".to_string()),
                    ..NewCustomer::default()
                },
            )
            .await?;

        let product_id = PgProductsRepository::new()
            .create_product(
                tx,
                &NewProduct {
                    product_code: "MG Standard".to_string(),
                    colour_selection: "Blue".to_string(),
                    base_price: 80_000,
                    colour_surcharge: 0,
                },
            )
            .await?;

        Ok(NewOrder {
            order_date: Some("2024-03-01".to_string()),
            impression_id: impression_id.to_string(),
            customer_id,
            product_id,
            payment_method: Some("EFT".to_string()),
            payment_status: Some("Paid".to_string()),
            total_price: Some(80_000),
            public_image_url: None,
            additional_notes: None,
            email_status: None,
        })
    }

    #[tokio::test]
    async fn second_insert_with_same_impression_is_skipped() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;
        let repository = PgOrdersRepository::new();

        let order = order_for(&mut tx, "IMP-001").await?;

        let first = repository.insert_order(&mut tx, &order).await?;

        assert!(first.is_some(), "first insert should create the order");

        let changed = NewOrder {
            payment_status: Some("Not Paid".to_string()),
            ..order.clone()
        };

        let second = repository.insert_order(&mut tx, &changed).await?;

        assert_eq!(second, None, "second insert should be skipped");

        let stored = repository.get_order_by_impression(&mut tx, "IMP-001").await?;

        assert_eq!(stored.payment_status.as_deref(), Some("Paid"), "never updated");
        assert_eq!(stored.customer_id, order.customer_id);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_customer_is_a_foreign_key_violation() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;

        let order = NewOrder {
            customer_id: CustomerId::from_i64(9_999),
            ..order_for(&mut tx, "IMP-404").await?
        };

        let result = PgOrdersRepository::new().insert_order(&mut tx, &order).await;

        let kind = result
            .as_ref()
            .err()
            .and_then(|error| error.as_database_error())
            .map(sqlx::error::DatabaseError::kind);

        assert!(
            matches!(kind, Some(sqlx::error::ErrorKind::ForeignKeyViolation)),
            "expected foreign key violation, got {result:?}"
        );

        Ok(())
    }
}

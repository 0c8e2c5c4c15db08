//! Products Repository

#[cfg(test)]
use sqlx::query_as;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_scalar};

use crate::domain::products::models::{NewProduct, Product, ProductId};

const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const SEED_PRODUCT_SQL: &str = include_str!("sql/seed_product.sql");
#[cfg(test)]
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product_code: &str,
        colour_selection: &str,
    ) -> Result<Option<ProductId>, sqlx::Error> {
        let id: Option<i64> = query_scalar(FIND_PRODUCT_SQL)
            .bind(product_code)
            .bind(colour_selection)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(id.map(ProductId::from_i64))
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_PRODUCT_SQL)
            .bind(&product.product_code)
            .bind(&product.colour_selection)
            .bind(product.base_price)
            .bind(product.colour_surcharge)
            .fetch_one(&mut **tx)
            .await?;

        Ok(ProductId::from_i64(id))
    }

    /// Returns the matching product, inserting it first when absent.
    ///
    /// The flag is `true` when a row was inserted.
    pub(crate) async fn find_or_create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<(ProductId, bool), sqlx::Error> {
        if let Some(id) = self
            .find_product(tx, &product.product_code, &product.colour_selection)
            .await?
        {
            return Ok((id, false));
        }

        Ok((self.create_product(tx, product).await?, true))
    }

    /// Insert a product unless its code and colour already exist.
    ///
    /// Returns `true` when a row was inserted.
    pub(crate) async fn seed_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = query(SEED_PRODUCT_SQL)
            .bind(&product.product_code)
            .bind(&product.colour_selection)
            .bind(product.base_price)
            .bind(product.colour_surcharge)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected == 1)
    }

    #[cfg(test)]
    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("product_id")?),
            product_code: row.try_get("product_code")?,
            colour_selection: row.try_get("colour_selection")?,
            base_price: row.try_get("base_price")?,
            colour_surcharge: row.try_get("colour_surcharge")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestDb;

    use super::*;

    fn custom_guard() -> NewProduct {
        NewProduct {
            product_code: "Custom".to_string(),
            colour_selection: "Teal".to_string(),
            base_price: 95_000,
            colour_surcharge: 0,
        }
    }

    #[tokio::test]
    async fn seeding_twice_inserts_once() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;
        let repository = PgProductsRepository::new();

        assert!(repository.seed_product(&mut tx, &custom_guard()).await?);
        assert!(!repository.seed_product(&mut tx, &custom_guard()).await?);

        Ok(())
    }

    #[tokio::test]
    async fn find_or_create_reuses_existing_code_and_colour() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;
        let repository = PgProductsRepository::new();

        let (first, created) = repository.find_or_create_product(&mut tx, &custom_guard()).await?;

        assert!(created);

        let repriced = NewProduct {
            base_price: 1,
            ..custom_guard()
        };

        let (second, created) = repository.find_or_create_product(&mut tx, &repriced).await?;

        assert!(!created, "existing product should be reused");
        assert_eq!(first, second);

        let stored = repository.get_product(&mut tx, first).await?;

        assert_eq!(stored.base_price, 95_000, "price is not overwritten");

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_create_is_a_unique_violation() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;
        let repository = PgProductsRepository::new();

        repository.create_product(&mut tx, &custom_guard()).await?;

        let result = repository.create_product(&mut tx, &custom_guard()).await;

        let kind = result
            .as_ref()
            .err()
            .and_then(|error| error.as_database_error())
            .map(sqlx::error::DatabaseError::kind);

        assert!(
            matches!(kind, Some(sqlx::error::ErrorKind::UniqueViolation)),
            "expected unique violation, got {result:?}"
        );

        Ok(())
    }
}

//! Customers Repository

#[cfg(test)]
use sqlx::query_as;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_scalar};

use crate::domain::customers::models::{Customer, CustomerId, NewCustomer};

const FIND_CUSTOMER_SQL: &str = include_str!("sql/find_customer.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("sql/create_customer.sql");
#[cfg(test)]
const GET_CUSTOMER_SQL: &str = include_str!("sql/get_customer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: &NewCustomer,
    ) -> Result<Option<CustomerId>, sqlx::Error> {
        let id: Option<i64> = query_scalar(FIND_CUSTOMER_SQL)
            .bind(customer.first_name.as_deref())
            .bind(customer.surname.as_deref())
            .bind(customer.contact_email.as_deref())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(id.map(CustomerId::from_i64))
    }

    pub(crate) async fn create_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: &NewCustomer,
    ) -> Result<CustomerId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_CUSTOMER_SQL)
            .bind(customer.first_name.as_deref())
            .bind(customer.surname.as_deref())
            .bind(customer.club_school.as_deref())
            .bind(customer.contact_number.as_deref())
            .bind(customer.contact_email.as_deref())
            .fetch_one(&mut **tx)
            .await?;

        Ok(CustomerId::from_i64(id))
    }

    /// Returns the matching customer, inserting it first when absent.
    ///
    /// The flag is `true` when a row was inserted.
    pub(crate) async fn find_or_create_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: &NewCustomer,
    ) -> Result<(CustomerId, bool), sqlx::Error> {
        if let Some(id) = self.find_customer(tx, customer).await? {
            return Ok((id, false));
        }

        Ok((self.create_customer(tx, customer).await?, true))
    }

    #[cfg(test)]
    pub(crate) async fn get_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<Customer, sqlx::Error> {
        query_as::<Postgres, Customer>(GET_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Customer {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CustomerId::from_i64(row.try_get("customer_id")?),
            first_name: row.try_get("first_name")?,
            surname: row.try_get("surname")?,
            club_school: row.try_get("club_school")?,
            contact_number: row.try_get("contact_number")?,
            contact_email: row.try_get("contact_email")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestDb;

    use super::*;

    fn thandi() -> NewCustomer {
        NewCustomer {
            first_name: Some("Thandi".to_string()),
            surname: Some("Mokoena".to_string()),
            club_school: Some("Northside RFC".to_string()),
            contact_number: Some("0821234567".to_string()),
            contact_email: Some("thandi@example.com".to_string()),
        }
    }

    #[tokio::test]
    async fn find_or_create_reuses_matching_customer() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;
        let repository = PgCustomersRepository::new();

        let (first, created) = repository.find_or_create_customer(&mut tx, &thandi()).await?;

        assert!(created, "first lookup should insert");

        let (second, created) = repository.find_or_create_customer(&mut tx, &thandi()).await?;

        assert!(!created, "second lookup should reuse");
        assert_eq!(first, second);

        let stored = repository.get_customer(&mut tx, first).await?;

        assert_eq!(stored.club_school.as_deref(), Some("Northside RFC"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_email_matches_missing_email() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;
        let repository = PgCustomersRepository::new();

        let customer = NewCustomer {
            contact_email: None,
            ..thandi()
        };

        let (first, _) = repository.find_or_create_customer(&mut tx, &customer).await?;
        let (second, created) = repository.find_or_create_customer(&mut tx, &customer).await?;

        assert!(!created);
        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn different_email_is_a_different_customer() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;
        let repository = PgCustomersRepository::new();

        let (first, _) = repository.find_or_create_customer(&mut tx, &thandi()).await?;

        let other = NewCustomer {
            contact_email: Some("t.mokoena@example.com".to_string()),
            ..thandi()
        };

        let (second, created) = repository.find_or_create_customer(&mut tx, &other).await?;

        assert!(created);
        assert_ne!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn missing_email_does_not_match_present_email() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;
        let repository = PgCustomersRepository::new();

        let (first, _) = repository.find_or_create_customer(&mut tx, &thandi()).await?;

        let without_email = NewCustomer {
            contact_email: None,
            ..thandi()
        };

        let (second, created) = repository
            .find_or_create_customer(&mut tx, &without_email)
            .await?;

        assert!(created);
        assert_ne!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn customer_lookup_uses_identity_index() -> TestResult {
        let db = TestDb::new().await;
        let mut tx = db.begin_test_transaction().await;

        sqlx::query("SET LOCAL enable_seqscan = off")
            .execute(&mut *tx)
            .await?;

        let plan: Vec<String> = query_scalar(&format!("EXPLAIN {FIND_CUSTOMER_SQL}"))
            .bind("Thandi")
            .bind("Mokoena")
            .bind(None::<&str>)
            .fetch_all(&mut *tx)
            .await?;

        assert!(
            plan.iter().any(|line| line.contains("customers_identity_idx")),
            "expected an index scan, got {plan:?}"
        );

        Ok(())
    }
}

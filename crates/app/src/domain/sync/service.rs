//! Sync service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info, warn};

use crate::{
    database::Db,
    domain::{
        customers::repository::PgCustomersRepository,
        orders::{models::NewOrder, repository::PgOrdersRepository},
        products::{catalog, models::NewProduct, repository::PgProductsRepository},
        sync::{errors::SyncError, models::SyncReport, rows::OrderRow},
    },
    sheets::{SheetRecord, SheetSource},
};

#[derive(Debug, Clone)]
pub struct PgSyncService {
    db: Db,
    customers: PgCustomersRepository,
    products: PgProductsRepository,
    orders: PgOrdersRepository,
}

impl PgSyncService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            customers: PgCustomersRepository::new(),
            products: PgProductsRepository::new(),
            orders: PgOrdersRepository::new(),
        }
    }

    async fn seed_catalog(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        report: &mut SyncReport,
    ) -> Result<(), SyncError> {
        for product in catalog::catalog() {
            if self.products.seed_product(tx, &product).await? {
                report.catalog_products_seeded += 1;
            }
        }

        Ok(())
    }

    async fn store_row(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        row: OrderRow,
        report: &mut SyncReport,
    ) -> Result<(), SyncError> {
        let (customer_id, customer_created) =
            self.customers.find_or_create_customer(tx, &row.customer).await?;

        if customer_created {
            report.customers_created += 1;
        }

        let product = NewProduct {
            product_code: row.product_code,
            colour_selection: row.colour_selection,
            base_price: row.amount_due.unwrap_or_default(),
            colour_surcharge: 0,
        };

        let (product_id, product_created) =
            self.products.find_or_create_product(tx, &product).await?;

        if product_created {
            report.products_created += 1;
        }

        let order = NewOrder {
            order_date: row.order_date,
            impression_id: row.impression_id,
            customer_id,
            product_id,
            payment_method: row.payment_method,
            payment_status: row.payment_status,
            total_price: row.amount_due,
            public_image_url: row.logo,
            additional_notes: row.additional_info,
            email_status: row.email_status,
        };

        match self.orders.insert_order(tx, &order).await? {
            Some(order_id) => {
                debug!(row = row.row_number, %order_id, "order created");
                report.orders_created += 1;
            }
            None => {
                debug!(
                    row = row.row_number,
                    impression_id = %order.impression_id,
                    "order already stored, skipping"
                );
                report.orders_skipped += 1;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl SyncService for PgSyncService {
    async fn sync_records(&self, records: Vec<SheetRecord>) -> Result<SyncReport, SyncError> {
        let rows = records
            .iter()
            .map(OrderRow::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = SyncReport {
            rows_read: rows.len(),
            ..SyncReport::default()
        };

        let mut tx = self.db.begin().await?;

        self.seed_catalog(&mut tx, &mut report).await?;

        for row in rows {
            self.store_row(&mut tx, row, &mut report).await?;
        }

        tx.commit().await?;

        Ok(report)
    }
}

#[automock]
#[async_trait]
pub trait SyncService: Send + Sync {
    /// Store every record in one transaction.
    ///
    /// All rows are mapped before anything is written, so a malformed row
    /// leaves the database untouched.
    async fn sync_records(&self, records: Vec<SheetRecord>) -> Result<SyncReport, SyncError>;
}

/// Read every row from `source` and hand them to `sync`.
///
/// # Errors
///
/// Returns an error when reading the sheet or storing any row fails.
pub async fn run_sync(
    source: &dyn SheetSource,
    sync: &dyn SyncService,
) -> Result<SyncReport, SyncError> {
    let records = source.fetch_records().await?;

    info!(rows = records.len(), "fetched booking rows");

    match sync.sync_records(records).await {
        Ok(report) => {
            info!(
                rows_read = report.rows_read,
                catalog_products_seeded = report.catalog_products_seeded,
                customers_created = report.customers_created,
                products_created = report.products_created,
                orders_created = report.orders_created,
                orders_skipped = report.orders_skipped,
                "sync complete"
            );

            Ok(report)
        }
        Err(error) => {
            warn!(%error, "sync aborted, no rows were committed");

            Err(error)
        }
    }
}

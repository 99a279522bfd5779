//! Invoice repository for billing database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use tally_core::billing::{BillingService, PaymentUpdate};

use crate::entities::{companies, invoices};

/// Error types for invoice operations.
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    /// Invoice not found.
    #[error("No such invoice: {0}")]
    NotFound(i32),

    /// Referenced company does not exist.
    #[error("Company '{0}' not found")]
    CompanyNotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Invoice repository for CRUD and payment-state operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all invoices ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<invoices::Model>, DbErr> {
        invoices::Entity::find()
            .order_by_asc(invoices::Column::Id)
            .all(&self.db)
            .await
    }

    /// Fetches an invoice together with the company it is billed to.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::NotFound` if no invoice has this id.
    pub async fn get_with_company(
        &self,
        id: i32,
    ) -> Result<(invoices::Model, companies::Model), InvoiceError> {
        let result = invoices::Entity::find_by_id(id)
            .find_also_related(companies::Entity)
            .one(&self.db)
            .await?;

        // comp_code is NOT NULL, so the company leg is always present.
        match result {
            Some((invoice, Some(company))) => Ok((invoice, company)),
            _ => Err(InvoiceError::NotFound(id)),
        }
    }

    /// Creates an invoice in the initial unpaid state.
    ///
    /// Initializes `paid = false`, `paid_date = NULL`, `add_date = today`.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::CompanyNotFound` if `comp_code` does not
    /// reference an existing company.
    pub async fn create(
        &self,
        comp_code: &str,
        amt: Decimal,
    ) -> Result<invoices::Model, InvoiceError> {
        let company = companies::Entity::find_by_id(comp_code).one(&self.db).await?;

        if company.is_none() {
            return Err(InvoiceError::CompanyNotFound(comp_code.to_string()));
        }

        let invoice = invoices::ActiveModel {
            comp_code: Set(comp_code.to_string()),
            amt: Set(amt),
            paid: Set(false),
            add_date: Set(Utc::now().date_naive()),
            paid_date: Set(None),
            ..Default::default()
        };

        Ok(invoice.insert(&self.db).await?)
    }

    /// Applies a payment update to an invoice.
    ///
    /// Replaces the amount unconditionally and derives the paid date from
    /// the current state: a false→true transition fixes today's date, any
    /// transition to unpaid clears it, and staying paid preserves it.
    ///
    /// The read and write run in a single transaction so the derived date is
    /// never computed from a stale read.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::NotFound` if no invoice has this id.
    pub async fn apply_payment_update(
        &self,
        id: i32,
        amt: Decimal,
        paid: bool,
    ) -> Result<invoices::Model, InvoiceError> {
        let txn = self.db.begin().await?;

        let Some(current) = invoices::Entity::find_by_id(id).one(&txn).await? else {
            return Err(InvoiceError::NotFound(id));
        };

        let resolved = BillingService::resolve_payment(
            current.paid_date,
            PaymentUpdate { amt, paid },
            Utc::now().date_naive(),
        );

        let mut invoice: invoices::ActiveModel = current.into();
        invoice.amt = Set(resolved.amt);
        invoice.paid = Set(resolved.paid);
        invoice.paid_date = Set(resolved.paid_date);

        let updated = invoice.update(&txn).await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes an invoice by id.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::NotFound` if no rows were affected.
    pub async fn delete(&self, id: i32) -> Result<(), InvoiceError> {
        let result = invoices::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(InvoiceError::NotFound(id));
        }

        Ok(())
    }
}

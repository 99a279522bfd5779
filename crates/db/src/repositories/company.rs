//! Company repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{companies, industries, invoices};

/// Error types for company operations.
#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    /// Company not found.
    #[error("Company '{0}' not found")]
    NotFound(String),

    /// Company code already exists.
    #[error("Company code '{0}' already exists")]
    DuplicateCode(String),

    /// Company name is empty.
    #[error("Company name must not be empty")]
    InvalidName,

    /// Cannot delete company because invoices still reference it.
    #[error("Cannot delete company: {0} invoices reference it")]
    HasInvoices(u64),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a company.
#[derive(Debug, Clone)]
pub struct CreateCompanyInput {
    /// Canonical company code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Company with its invoice ids and industry names.
#[derive(Debug, Clone)]
pub struct CompanyDetail {
    /// The company record.
    pub company: companies::Model,
    /// Ids of invoices billed to this company.
    pub invoice_ids: Vec<i32>,
    /// Names of industries this company belongs to.
    pub industries: Vec<String>,
}

/// Company repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new company repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all companies ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<companies::Model>, DbErr> {
        companies::Entity::find()
            .order_by_asc(companies::Column::Name)
            .all(&self.db)
            .await
    }

    /// Fetches a company with its invoice ids and industry names.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::NotFound` if no company has this code.
    pub async fn get_detail(&self, code: &str) -> Result<CompanyDetail, CompanyError> {
        let Some(company) = companies::Entity::find_by_id(code).one(&self.db).await? else {
            return Err(CompanyError::NotFound(code.to_string()));
        };

        let invoice_ids = company
            .find_related(invoices::Entity)
            .order_by_asc(invoices::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|invoice| invoice.id)
            .collect();

        let industries = company
            .find_related(industries::Entity)
            .order_by_asc(industries::Column::Name)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|industry| industry.name)
            .collect();

        Ok(CompanyDetail {
            company,
            invoice_ids,
            industries,
        })
    }

    /// Creates a new company.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::DuplicateCode` if the code is already taken.
    pub async fn create(&self, input: CreateCompanyInput) -> Result<companies::Model, CompanyError> {
        let existing = companies::Entity::find_by_id(&input.code).one(&self.db).await?;

        if existing.is_some() {
            return Err(CompanyError::DuplicateCode(input.code));
        }

        let company = companies::ActiveModel {
            code: Set(input.code),
            name: Set(input.name),
            description: Set(input.description),
        };

        Ok(company.insert(&self.db).await?)
    }

    /// Updates a company's name and description in place.
    ///
    /// The code is immutable after creation.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::InvalidName` if the name is empty and
    /// `CompanyError::NotFound` if no company has this code.
    pub async fn update(
        &self,
        code: &str,
        name: &str,
        description: Option<String>,
    ) -> Result<companies::Model, CompanyError> {
        if name.trim().is_empty() {
            return Err(CompanyError::InvalidName);
        }

        let Some(company) = companies::Entity::find_by_id(code).one(&self.db).await? else {
            return Err(CompanyError::NotFound(code.to_string()));
        };

        let mut company: companies::ActiveModel = company.into();
        company.name = Set(name.to_string());
        company.description = Set(description);

        Ok(company.update(&self.db).await?)
    }

    /// Deletes a company by code.
    ///
    /// Deletion is rejected while invoices still reference the company;
    /// industry links are removed by the join table's cascade.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::HasInvoices` if invoices reference the company
    /// and `CompanyError::NotFound` if no rows were affected.
    pub async fn delete(&self, code: &str) -> Result<(), CompanyError> {
        let invoice_count = invoices::Entity::find()
            .filter(invoices::Column::CompCode.eq(code))
            .count(&self.db)
            .await?;

        if invoice_count > 0 {
            return Err(CompanyError::HasInvoices(invoice_count));
        }

        let result = companies::Entity::delete_by_id(code).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(CompanyError::NotFound(code.to_string()));
        }

        Ok(())
    }
}

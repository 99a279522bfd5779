//! Industry repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{companies, company_industries, industries};

/// Error types for industry operations.
#[derive(Debug, thiserror::Error)]
pub enum IndustryError {
    /// Industry not found.
    #[error("Industry '{0}' not found")]
    NotFound(String),

    /// Industry code already exists.
    #[error("Industry code '{0}' already exists")]
    DuplicateCode(String),

    /// Referenced company does not exist.
    #[error("Company '{0}' not found")]
    CompanyNotFound(String),

    /// Company is already linked to the industry.
    #[error("Company '{comp_code}' is already linked to industry '{ind_code}'")]
    AlreadyLinked {
        /// Industry code.
        ind_code: String,
        /// Company code.
        comp_code: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Industry with the codes of its associated companies.
#[derive(Debug, Clone)]
pub struct IndustryWithCompanies {
    /// The industry record.
    pub industry: industries::Model,
    /// Codes of companies in this industry.
    pub company_codes: Vec<String>,
}

/// Industry repository for CRUD and association operations.
#[derive(Debug, Clone)]
pub struct IndustryRepository {
    db: DatabaseConnection,
}

impl IndustryRepository {
    /// Creates a new industry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all industries, each with its associated company codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_with_companies(&self) -> Result<Vec<IndustryWithCompanies>, DbErr> {
        let results = industries::Entity::find()
            .find_with_related(companies::Entity)
            .order_by_asc(industries::Column::Code)
            .all(&self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(industry, companies)| IndustryWithCompanies {
                industry,
                company_codes: companies.into_iter().map(|c| c.code).collect(),
            })
            .collect())
    }

    /// Creates a new industry.
    ///
    /// # Errors
    ///
    /// Returns `IndustryError::DuplicateCode` if the code is already taken.
    pub async fn create(&self, code: &str, name: &str) -> Result<industries::Model, IndustryError> {
        let existing = industries::Entity::find_by_id(code).one(&self.db).await?;

        if existing.is_some() {
            return Err(IndustryError::DuplicateCode(code.to_string()));
        }

        let industry = industries::ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
        };

        Ok(industry.insert(&self.db).await?)
    }

    /// Links a company to an industry.
    ///
    /// # Errors
    ///
    /// Returns `IndustryError::NotFound` if the industry does not exist,
    /// `IndustryError::CompanyNotFound` if the company does not exist, and
    /// `IndustryError::AlreadyLinked` if the association already exists.
    pub async fn link_company(
        &self,
        ind_code: &str,
        comp_code: &str,
    ) -> Result<company_industries::Model, IndustryError> {
        let industry = industries::Entity::find_by_id(ind_code).one(&self.db).await?;
        if industry.is_none() {
            return Err(IndustryError::NotFound(ind_code.to_string()));
        }

        let company = companies::Entity::find_by_id(comp_code).one(&self.db).await?;
        if company.is_none() {
            return Err(IndustryError::CompanyNotFound(comp_code.to_string()));
        }

        let existing = company_industries::Entity::find()
            .filter(company_industries::Column::IndCode.eq(ind_code))
            .filter(company_industries::Column::CompCode.eq(comp_code))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Err(IndustryError::AlreadyLinked {
                ind_code: ind_code.to_string(),
                comp_code: comp_code.to_string(),
            });
        }

        let link = company_industries::ActiveModel {
            comp_code: Set(comp_code.to_string()),
            ind_code: Set(ind_code.to_string()),
        };

        Ok(link.insert(&self.db).await?)
    }
}

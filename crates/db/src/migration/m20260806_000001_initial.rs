//! Initial database migration.
//!
//! Creates the companies, industries, company_industries, and invoices
//! tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(COMPANIES_SQL).await?;
        db.execute_unprepared(INDUSTRIES_SQL).await?;
        db.execute_unprepared(COMPANY_INDUSTRIES_SQL).await?;
        db.execute_unprepared(INVOICES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const COMPANIES_SQL: &str = r"
-- Companies keyed by their canonical code
CREATE TABLE companies (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT
);
";

const INDUSTRIES_SQL: &str = r"
-- Industries keyed by their canonical code
CREATE TABLE industries (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);
";

const COMPANY_INDUSTRIES_SQL: &str = r"
-- Many-to-many join between companies and industries
CREATE TABLE company_industries (
    comp_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
    ind_code TEXT NOT NULL REFERENCES industries(code) ON DELETE CASCADE,
    PRIMARY KEY (comp_code, ind_code)
);
";

const INVOICES_SQL: &str = r"
-- Invoices billed to companies.
-- No ON DELETE CASCADE: deleting a company with invoices is rejected
-- at the repository layer instead.
CREATE TABLE invoices (
    id SERIAL PRIMARY KEY,
    comp_code TEXT NOT NULL REFERENCES companies(code),
    amt NUMERIC(15, 2) NOT NULL,
    paid BOOLEAN NOT NULL DEFAULT false,
    add_date DATE NOT NULL DEFAULT CURRENT_DATE,
    paid_date DATE
);

-- Index for a company's invoice listing
CREATE INDEX idx_invoices_comp_code ON invoices(comp_code);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS invoices CASCADE;
DROP TABLE IF EXISTS company_industries CASCADE;
DROP TABLE IF EXISTS industries CASCADE;
DROP TABLE IF EXISTS companies CASCADE;
";

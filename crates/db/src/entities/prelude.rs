//! Re-exports of all entity types.

pub use super::companies::Entity as Companies;
pub use super::company_industries::Entity as CompanyIndustries;
pub use super::industries::Entity as Industries;
pub use super::invoices::Entity as Invoices;

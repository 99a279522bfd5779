//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod company;
pub mod industry;
pub mod invoice;

pub use company::{CompanyDetail, CompanyError, CompanyRepository, CreateCompanyInput};
pub use industry::{IndustryError, IndustryRepository, IndustryWithCompanies};
pub use invoice::{InvoiceError, InvoiceRepository};

//! Invoice payment lifecycle.
//!
//! The paid-date derivation rule lives here, separate from persistence, so
//! it can be tested without a database.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::BillingService;
pub use types::{PaymentUpdate, ResolvedPayment};

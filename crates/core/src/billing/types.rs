//! Payment lifecycle types.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A requested change to an invoice's amount and payment flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentUpdate {
    /// Replacement amount. Stored unconditionally.
    pub amt: Decimal,
    /// Requested payment flag.
    pub paid: bool,
}

/// The invoice state to persist after a payment update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPayment {
    /// Amount to store.
    pub amt: Decimal,
    /// Payment flag to store.
    pub paid: bool,
    /// Derived payment date to store.
    pub paid_date: Option<NaiveDate>,
}

//! Property-based tests for payment-state transitions.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::BillingService;
use super::types::PaymentUpdate;

/// Strategy for arbitrary calendar dates.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for an optional current paid date.
fn current_date_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    prop_oneof![Just(None), date_strategy().prop_map(Some)]
}

/// Strategy for invoice amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_00i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Marking an invoice unpaid always clears the paid date, whatever the
    /// prior state.
    #[test]
    fn prop_unpaid_clears_date(
        current in current_date_strategy(),
        today in date_strategy(),
    ) {
        prop_assert_eq!(BillingService::resolve_paid_date(current, false, today), None);
    }

    /// An already-paid invoice keeps its original date across repeated
    /// "mark paid" calls.
    #[test]
    fn prop_paid_is_idempotent(
        original in date_strategy(),
        today in date_strategy(),
    ) {
        prop_assert_eq!(
            BillingService::resolve_paid_date(Some(original), true, today),
            Some(original)
        );
    }

    /// A false→true transition always fixes today's date.
    #[test]
    fn prop_first_payment_fixes_today(today in date_strategy()) {
        prop_assert_eq!(
            BillingService::resolve_paid_date(None, true, today),
            Some(today)
        );
    }

    /// The amount passes through untouched by the transition rule.
    #[test]
    fn prop_amount_passes_through(
        current in current_date_strategy(),
        amt in amount_strategy(),
        paid in any::<bool>(),
        today in date_strategy(),
    ) {
        let resolved = BillingService::resolve_payment(
            current,
            PaymentUpdate { amt, paid },
            today,
        );

        prop_assert_eq!(resolved.amt, amt);
        prop_assert_eq!(resolved.paid, paid);
    }
}

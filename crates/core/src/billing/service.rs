//! Paid-date derivation for invoice payment updates.

use chrono::NaiveDate;

use super::types::{PaymentUpdate, ResolvedPayment};

/// Billing service for payment-state transitions.
pub struct BillingService;

impl BillingService {
    /// Derives the paid date for a payment update.
    ///
    /// The date must be stable across repeated "mark paid" calls but reset
    /// whenever payment is reversed, so a later re-payment gets a fresh date
    /// rather than resurrecting a stale one:
    ///
    /// - no current date and `requested_paid` → today (a false→true
    ///   transition fixes today's date)
    /// - `!requested_paid` → cleared, whatever the prior value
    /// - otherwise → current date unchanged
    #[must_use]
    pub fn resolve_paid_date(
        current_paid_date: Option<NaiveDate>,
        requested_paid: bool,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        if current_paid_date.is_none() && requested_paid {
            Some(today)
        } else if !requested_paid {
            None
        } else {
            current_paid_date
        }
    }

    /// Resolves the full state to persist for a payment update.
    ///
    /// The amount is overwritten unconditionally; only the paid date depends
    /// on the current state.
    #[must_use]
    pub fn resolve_payment(
        current_paid_date: Option<NaiveDate>,
        update: PaymentUpdate,
        today: NaiveDate,
    ) -> ResolvedPayment {
        ResolvedPayment {
            amt: update.amt,
            paid: update.paid,
            paid_date: Self::resolve_paid_date(current_paid_date, update.paid, today),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unpaid_to_paid_fixes_today() {
        let today = date(2024, 3, 15);

        let resolved = BillingService::resolve_payment(
            None,
            PaymentUpdate {
                amt: dec!(150),
                paid: true,
            },
            today,
        );

        assert_eq!(resolved.amt, dec!(150));
        assert!(resolved.paid);
        assert_eq!(resolved.paid_date, Some(today));
    }

    #[test]
    fn test_paid_stays_paid_keeps_original_date() {
        let original = date(2024, 1, 5);
        let today = date(2024, 3, 15);

        let resolved = BillingService::resolve_payment(
            Some(original),
            PaymentUpdate {
                amt: dec!(200),
                paid: true,
            },
            today,
        );

        assert_eq!(resolved.paid_date, Some(original));
    }

    #[test]
    fn test_paid_to_unpaid_clears_date() {
        let resolved = BillingService::resolve_payment(
            Some(date(2024, 2, 1)),
            PaymentUpdate {
                amt: dec!(50),
                paid: false,
            },
            date(2024, 3, 15),
        );

        assert!(!resolved.paid);
        assert_eq!(resolved.paid_date, None);
    }

    #[test]
    fn test_unpaid_stays_unpaid_keeps_null_date() {
        let resolved = BillingService::resolve_payment(
            None,
            PaymentUpdate {
                amt: dec!(100),
                paid: false,
            },
            date(2024, 3, 15),
        );

        assert_eq!(resolved.paid_date, None);
    }

    #[test]
    fn test_repeated_mark_paid_is_idempotent() {
        let first_payment = date(2024, 1, 5);
        let update = PaymentUpdate {
            amt: dec!(200),
            paid: true,
        };

        let mut paid_date = Some(first_payment);
        for day in 10..15 {
            paid_date =
                BillingService::resolve_paid_date(paid_date, update.paid, date(2024, 3, day));
        }

        assert_eq!(paid_date, Some(first_payment));
    }

    #[test]
    fn test_repayment_gets_fresh_date() {
        let today = date(2024, 3, 15);

        // Paid in January, reversed, paid again today.
        let after_reversal =
            BillingService::resolve_paid_date(Some(date(2024, 1, 5)), false, date(2024, 2, 1));
        assert_eq!(after_reversal, None);

        let repaid = BillingService::resolve_paid_date(after_reversal, true, today);
        assert_eq!(repaid, Some(today));
    }

    #[rstest]
    #[case(None, false, None)]
    #[case(None, true, Some(date(2024, 3, 15)))]
    #[case(Some(date(2024, 1, 5)), false, None)]
    #[case(Some(date(2024, 1, 5)), true, Some(date(2024, 1, 5)))]
    fn test_transition_table(
        #[case] current: Option<NaiveDate>,
        #[case] requested_paid: bool,
        #[case] expected: Option<NaiveDate>,
    ) {
        assert_eq!(
            BillingService::resolve_paid_date(current, requested_paid, date(2024, 3, 15)),
            expected
        );
    }

    #[test]
    fn test_amount_overwritten_unconditionally() {
        let resolved = BillingService::resolve_payment(
            Some(date(2024, 1, 5)),
            PaymentUpdate {
                amt: dec!(0),
                paid: true,
            },
            date(2024, 3, 15),
        );

        assert_eq!(resolved.amt, dec!(0));
    }
}

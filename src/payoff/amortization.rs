//! Time-to-zero for a fixed balance under a fixed monthly payment
//!
//! Uses the simple monthly periodic rate `annual_rate / 100 / 12` and the
//! closed form `ceil(ln(1 + B*r/P) / ln(1 + r))`, evaluated with `ln_1p` so
//! tiny rates keep their precision. A partial final month is counted as a
//! full month.

use crate::error::{ensure_non_negative, FinanceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a payoff calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "months")]
pub enum PayoffProjection {
    /// Whole months until the balance reaches zero
    Months(u64),
    /// The payment does not exceed one month's interest
    Never,
}

impl PayoffProjection {
    /// Month count, or `None` for a payment that never clears the balance
    pub fn months(self) -> Option<u64> {
        match self {
            PayoffProjection::Months(m) => Some(m),
            PayoffProjection::Never => None,
        }
    }

    pub fn is_never(self) -> bool {
        matches!(self, PayoffProjection::Never)
    }

    /// True when the payoff takes longer than `ceiling` months or never happens
    pub fn exceeds(self, ceiling: u32) -> bool {
        match self {
            PayoffProjection::Months(m) => m > u64::from(ceiling),
            PayoffProjection::Never => true,
        }
    }

    /// Display value with long payoffs collapsed to `"{ceiling}+"`
    pub fn display_capped(self, ceiling: u32) -> String {
        match self {
            PayoffProjection::Months(m) if m <= u64::from(ceiling) => m.to_string(),
            _ => format!("{}+", ceiling),
        }
    }
}

impl fmt::Display for PayoffProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffProjection::Months(m) => write!(f, "{} months", m),
            PayoffProjection::Never => write!(f, "never"),
        }
    }
}

/// Convert an annual percentage rate into the monthly periodic rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Calculate the number of months needed to pay off `balance`
///
/// # Arguments
/// * `balance` - Outstanding balance
/// * `annual_rate_percent` - Annual interest rate as a percentage (18.5 = 18.5%)
/// * `monthly_payment` - Fixed payment made every month
///
/// # Returns
/// * `Months(0)` for a zero balance
/// * `Never` when the payment is less than or equal to one month's interest
/// * `Months(n)` otherwise, rounded up to the next whole month
///
/// Fails with `InvalidArgument` if any input is negative or not finite, and
/// with `HorizonOutOfRange` if the month count does not fit in a `u64`.
pub fn months_to_payoff(
    balance: f64,
    annual_rate_percent: f64,
    monthly_payment: f64,
) -> Result<PayoffProjection> {
    let balance = ensure_non_negative("balance", balance)?;
    let annual_rate_percent = ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
    let monthly_payment = ensure_non_negative("monthly_payment", monthly_payment)?;

    if balance <= 0.0 {
        return Ok(PayoffProjection::Months(0));
    }

    let rate = monthly_rate(annual_rate_percent);

    // Non-strict: a payment equal to the interest never reduces the balance
    if monthly_payment <= balance * rate {
        return Ok(PayoffProjection::Never);
    }

    let months = if rate == 0.0 {
        (balance / monthly_payment).ceil()
    } else {
        ((balance * rate / monthly_payment).ln_1p() / rate.ln_1p()).ceil()
    };

    // 2^64 is the first float past u64::MAX; casts would saturate silently
    if !months.is_finite() || months >= u64::MAX as f64 {
        return Err(FinanceError::HorizonOutOfRange { months });
    }

    Ok(PayoffProjection::Months(months as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_balance_is_zero_months() {
        assert_eq!(months_to_payoff(0.0, 18.5, 100.0).unwrap(), PayoffProjection::Months(0));
        assert_eq!(months_to_payoff(0.0, 0.0, 1.0).unwrap(), PayoffProjection::Months(0));
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        assert_eq!(months_to_payoff(1000.0, 0.0, 300.0).unwrap(), PayoffProjection::Months(4));
        assert_eq!(months_to_payoff(1000.0, 0.0, 250.0).unwrap(), PayoffProjection::Months(4));
        assert_eq!(months_to_payoff(1000.0, 0.0, 1000.0).unwrap(), PayoffProjection::Months(1));
    }

    #[test]
    fn test_zero_payment_never_pays_off() {
        assert_eq!(months_to_payoff(1000.0, 0.0, 0.0).unwrap(), PayoffProjection::Never);
        assert_eq!(months_to_payoff(1000.0, 5.0, 0.0).unwrap(), PayoffProjection::Never);
    }

    #[test]
    fn test_payment_below_interest_is_never() {
        // 5000 * 18.5 / 1200 = 77.083 > 77
        assert_eq!(months_to_payoff(5000.0, 18.5, 77.0).unwrap(), PayoffProjection::Never);
    }

    #[test]
    fn test_payment_equal_to_interest_is_never() {
        // 1200 * 12 / 1200 = 12 exactly
        assert_eq!(months_to_payoff(1200.0, 12.0, 12.0).unwrap(), PayoffProjection::Never);
    }

    #[test]
    fn test_closed_form_value() {
        let rate: f64 = 18.5 / 1200.0;
        let expected = ((5000.0 * rate / 250.0).ln_1p() / rate.ln_1p()).ceil() as u64;
        let months = months_to_payoff(5000.0, 18.5, 250.0).unwrap();
        assert_eq!(months, PayoffProjection::Months(expected));
        assert_eq!(expected, 18);
    }

    #[test]
    fn test_monotonic_in_payment() {
        let mut previous = u64::MAX;
        for payment in [80.0, 100.0, 150.0, 250.0, 500.0, 1000.0, 5000.0] {
            let months = months_to_payoff(5000.0, 18.5, payment)
                .unwrap()
                .months()
                .expect("payment exceeds interest");
            assert!(months >= 1);
            assert!(months <= previous, "{} months at {} exceeds {}", months, payment, previous);
            previous = months;
        }
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let err = months_to_payoff(-1.0, 5.0, 100.0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { name: "balance", .. }));

        let err = months_to_payoff(100.0, -5.0, 100.0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { name: "annual_rate_percent", .. }));

        let err = months_to_payoff(100.0, 5.0, -100.0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { name: "monthly_payment", .. }));
    }

    #[test]
    fn test_tiny_rate_matches_zero_rate() {
        // 1 + r drops most of the rate's digits here
        let zero_rate = months_to_payoff(1000.0, 0.0, 100.0).unwrap();
        assert_eq!(zero_rate, PayoffProjection::Months(10));
        for rate in [1e-13, 1e-12, 1e-9] {
            assert_eq!(months_to_payoff(1000.0, rate, 100.0).unwrap(), zero_rate, "rate {}", rate);
        }
    }

    #[test]
    fn test_horizon_beyond_u64_is_error() {
        let err = months_to_payoff(1e300, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, FinanceError::HorizonOutOfRange { .. }));
    }

    #[test]
    fn test_long_horizon_is_exact() {
        // 1e12 months still fits and is not clamped
        let months = months_to_payoff(1e12, 0.0, 1.0).unwrap();
        assert_eq!(months, PayoffProjection::Months(1_000_000_000_000));
        assert!(months.exceeds(u32::MAX));
    }

    #[test]
    fn test_idempotent() {
        let a = months_to_payoff(15000.0, 8.5, 200.0).unwrap();
        let b = months_to_payoff(15000.0, 8.5, 200.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_capped() {
        assert_eq!(PayoffProjection::Months(42).display_capped(100), "42");
        assert_eq!(PayoffProjection::Months(100).display_capped(100), "100");
        assert_eq!(PayoffProjection::Months(101).display_capped(100), "100+");
        assert_eq!(PayoffProjection::Never.display_capped(100), "100+");
        assert!(PayoffProjection::Never.exceeds(100));
        assert!(!PayoffProjection::Months(100).exceeds(100));
    }

    #[test]
    fn test_monthly_rate() {
        assert_relative_eq!(monthly_rate(12.0), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_projection_serializes_tagged() {
        let json = serde_json::to_string(&PayoffProjection::Months(7)).unwrap();
        assert_eq!(json, r#"{"kind":"months","months":7}"#);
        let json = serde_json::to_string(&PayoffProjection::Never).unwrap();
        assert_eq!(json, r#"{"kind":"never"}"#);
    }
}

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;
use std::fmt;
use std::ops::{Add, AddAssign};

const SCALE: i64 = 10_000;
const FRACTION_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An expense amount stored as ten-thousandths of a unit.
///
/// Sums of amounts are exact, so a ledger written to disk and read back
/// compares equal to the original.
///
/// # Examples
/// ```
/// use expense_ledger::common::amount::Amount;
///
/// let food: Amount = "50".parse().unwrap();
/// let more: Amount = "25.5".parse().unwrap();
/// assert_eq!((food + more).to_string(), "75.5");
/// assert_eq!(Amount::from_units(125_000).to_string(), "12.5");
/// ```
pub struct Amount(i64);

#[derive(thiserror::Error, Debug)]
pub enum AmountParseError {
    #[error("empty amount")]
    Empty,
    #[error("not a number: {0}")]
    Invalid(#[from] ParseBigDecimalError),
    #[error("amount out of range")]
    Overflow,
}

impl Amount {
    /// Builds an amount from raw ten-thousandths.
    pub fn from_units(units: i64) -> Self {
        Amount(units)
    }

    pub fn zero() -> Self {
        Amount(0)
    }

    pub fn units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// `None` when the sum does not fit.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Natural base-10 form: trailing fractional zeros trimmed, at least one
    /// fractional digit kept (`75.0`, `12.5`, `0.0001`).
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / SCALE as u64;
        let frac = format!("{:0width$}", abs % SCALE as u64, width = FRACTION_DIGITS);
        let frac = frac.trim_end_matches('0');
        let frac = if frac.is_empty() { "0" } else { frac };
        format!("{sign}{whole}.{frac}")
    }
}

impl std::str::FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value = scaled.to_i64().ok_or(AmountParseError::Overflow)?;

        Ok(Amount(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

/// Saturates at the `i64` bounds; ledger totals go through `checked_add`.
impl Add for Amount {
    type Output = Amount;
    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
const SCALE: i64 = 100;
// i64::MAX cents has 17 digits before the decimal point.
const MAX_WHOLE_DIGITS: i64 = 17;

#[derive(Debug, Clone, Copy, Default)]
/// A struct representing monetary value in the smallest currency unit (cents).
///
/// # Why Use Money? It is a Value Object.
/// Using `Money` as a wrapper around `i64` keeps balances and amounts from being
/// mixed up with account numbers or counts. Storing cents as an integer keeps
/// deposit/withdrawal arithmetic exact, so a replayed transaction log always
/// lands on the same balance.
///
/// # Examples
/// ```
/// use bank_account::common::money::Money;
///
/// let amount = Money::new(1050); // Represents 10.50 in currency
/// assert_eq!(amount.as_i64(), 1050);
/// assert_eq!(amount.to_string_2dp(), "10.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn to_string_2dp(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        let scale = SCALE as u64;
        format!("{sign}{}.{:02}", cents / scale, cents % scale)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Bound the magnitude before rescaling; an exponent like 1e10000000
        // would otherwise expand into a ten-million-digit integer.
        let (digits, exponent) = bd.as_bigint_and_exponent();
        if digits.is_zero() {
            return Ok(Money::zero());
        }
        let significant = digits.to_string().trim_start_matches('-').len() as i64;
        let whole_digits = significant.saturating_sub(exponent);
        if whole_digits > MAX_WHOLE_DIGITS {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }
        if whole_digits < -2 {
            // below a tenth of a cent, rounds to zero
            return Ok(Money::zero());
        }

        // Scale to cents, ties away from zero
        let scaled = (bd * BigDecimal::from(SCALE)).with_scale_round(0, RoundingMode::HalfUp);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

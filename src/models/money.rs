//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths of the currency unit (i64) to avoid
//! floating-point drift in the running balance. The ledger is
//! currency-agnostic; the symbol only appears when formatting for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use pocketbook::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use pocketbook::models::Money;
    /// let salary = Money::from_units(500_000);
    /// assert_eq!(salary.cents(), 50_000_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a decimal number of units, rounding to the
    /// nearest hundredth
    ///
    /// Out-of-range values saturate; use [`Money::try_from_f64`] when the
    /// input is untrusted.
    pub fn from_f64(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// Like [`Money::from_f64`], but `None` for non-finite values and for
    /// amounts whose hundredths do not fit in an `i64`
    pub fn try_from_f64(units: f64) -> Option<Self> {
        let cents = (units * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if !cents.is_finite() || cents >= i64::MAX as f64 || cents < i64::MIN as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal number of units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Addition that reports overflow instead of saturating
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Subtraction that reports overflow instead of saturating
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts an optional leading sign, an optional currency prefix ("Rp",
    /// "$", ...), and grouping with commas, underscores or spaces:
    /// "500000", "500,000", "Rp 1,250.50", "-10.5". A string with more than
    /// one '.' treats every '.' as a grouping mark ("1.000.000").
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        // Currency prefix is anything before the first digit
        let s = s.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.');
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let mut cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, ',' | '_' | ' '))
            .collect();

        if cleaned.matches('.').count() > 1 {
            cleaned.retain(|c| c != '.');
        }

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let cents = match cleaned.split_once('.') {
            Some((whole, fraction)) => {
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };

                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }

                // Pad or truncate to 2 digits
                let fraction: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };

                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction))
                    .ok_or_else(invalid)?
            }
            None => cleaned
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, e.g. "Rp 500,000.00" or "$10.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let separator = if symbol.ends_with(|c: char| c.is_alphabetic()) {
            " "
        } else {
            ""
        };

        if self.is_negative() {
            format!("-{}{}{}", symbol, separator, self.abs())
        } else {
            format!("{}{}{}", symbol, separator, self)
        }
    }

    /// Format with an explicit sign, as used in exported registers ("+1,000.00")
    pub fn format_signed(&self) -> String {
        if self.is_negative() {
            format!("-{}", self.abs())
        } else {
            format!("+{}", self)
        }
    }
}

/// Insert thousands separators into a non-negative integer
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            group_thousands(self.units()),
            self.cents_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

/// Serde adapter that writes Money as a decimal number of units
///
/// Used by the ledger file so that amounts read as `500000.0` rather than
/// hundredths.
pub mod as_units {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.as_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = f64::deserialize(deserializer)?;
        Money::try_from_f64(units).ok_or_else(|| {
            serde::de::Error::custom(format!("amount {} is out of range", units))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_units_and_f64() {
        assert_eq!(Money::from_units(500_000).cents(), 50_000_000);
        assert_eq!(Money::from_f64(10.506).cents(), 1051);
        assert_eq!(Money::from_f64(500000.0), Money::from_units(500_000));
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_units(500_000).to_string(), "500,000.00");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_units(-20_000).to_string(), "-20,000.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_units(999).to_string(), "999.00");
        assert_eq!(Money::from_units(1_000).to_string(), "1,000.00");
    }

    #[test]
    fn test_format_with_symbol() {
        let m = Money::from_units(1_500);
        assert_eq!(m.format_with_symbol("Rp"), "Rp 1,500.00");
        assert_eq!(m.format_with_symbol("$"), "$1,500.00");
        assert_eq!((-m).format_with_symbol("$"), "-$1,500.00");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(Money::from_units(100).format_signed(), "+100.00");
        assert_eq!(Money::from_units(-100).format_signed(), "-100.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_grouping_and_prefix() {
        assert_eq!(Money::parse("500,000").unwrap(), Money::from_units(500_000));
        assert_eq!(Money::parse("Rp 1,250.50").unwrap().cents(), 125_050);
        assert_eq!(Money::parse("1.000.000").unwrap(), Money::from_units(1_000_000));
        assert_eq!(Money::parse("1_000").unwrap(), Money::from_units(1_000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12x").is_err());
        assert!(Money::parse("1.2x").is_err());
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_cents(1000));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization_as_units() {
        #[derive(Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_units")]
            amount: Money,
        }

        let json = serde_json::to_string(&Row {
            amount: Money::from_cents(1050),
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":10.5}"#);

        let row: Row = serde_json::from_str(r#"{"amount":500000}"#).unwrap();
        assert_eq!(row.amount, Money::from_units(500_000));
    }
}

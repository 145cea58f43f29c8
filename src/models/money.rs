//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift in
//! the running balance. Provides safe arithmetic operations and formatting.

use std::fmt;
use std::ops::Neg;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use cash_forecast::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_decimal_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, returning `None` if the sum leaves the i64 cent range
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a decimal amount, rounding to the nearest cent
    ///
    /// Accepts anything a float parser accepts ("10.5", "-3", "1e3", " 7 "),
    /// rejecting non-numeric and non-finite input. Ties round to even, so
    /// "0.125" becomes 12 cents.
    pub fn parse_decimal(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = (value * 100.0).round_ties_even();
        if cents.abs() >= i64::MAX as f64 {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        Ok(Self(cents as i64))
    }

    /// Plain two-decimal rendering used by the CSV export ("1000.00", "-50.00")
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Balance-style rendering with thousands separators ("$1,000.00", "-$20.00")
    pub fn format_balance(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.grouped_magnitude())
    }

    /// Always-signed rendering for posted amounts ("+$50.00", "-$50.00")
    pub fn format_signed(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "+" };
        format!("{}{}{}", sign, symbol, self.grouped_magnitude())
    }

    fn grouped_magnitude(&self) -> String {
        let digits = self.dollars().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{}.{:02}", grouped, self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_balance("$"))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b).unwrap().cents(), 1500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse_decimal("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse_decimal("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse_decimal(" 10.5 ").unwrap().cents(), 1050);
        assert_eq!(Money::parse_decimal("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse_decimal("1e3").unwrap().cents(), 100000);
    }

    #[test]
    fn test_parse_decimal_rounds_to_cents() {
        assert_eq!(Money::parse_decimal("12.345678").unwrap().cents(), 1235);
        assert_eq!(Money::parse_decimal("0.125").unwrap().cents(), 12);
        assert_eq!(Money::parse_decimal("-4.004").unwrap().cents(), -400);
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(Money::parse_decimal("abc").is_err());
        assert!(Money::parse_decimal("").is_err());
        assert!(Money::parse_decimal("$10").is_err());
        assert!(Money::parse_decimal("inf").is_err());
        assert!(Money::parse_decimal("NaN").is_err());
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(100000).to_decimal_string(), "1000.00");
        assert_eq!(Money::from_cents(-5000).to_decimal_string(), "-50.00");
        assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
        assert_eq!(Money::from_cents(0).to_decimal_string(), "0.00");
    }

    #[test]
    fn test_grouped_formats() {
        assert_eq!(Money::from_cents(123456789).format_balance("$"), "$1,234,567.89");
        assert_eq!(Money::from_cents(-2000).format_balance("$"), "-$20.00");
        assert_eq!(Money::from_cents(100000).format_signed("$"), "+$1,000.00");
        assert_eq!(Money::from_cents(-5000).format_signed("$"), "-$50.00");
        assert_eq!(Money::zero().format_signed("€"), "+€0.00");
        assert_eq!(Money::from_cents(99999).format_balance("$"), "$999.99");
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(-1500)), Some(Money::from_cents(-500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_add(Money::from_cents(-1)), None);
    }
}

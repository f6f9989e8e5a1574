//! Money type for representing student balances and fee payments
//!
//! Internally stores amounts as an i64 count of millionths of the currency
//! unit, so typed amounts like `0.125` or `0.001` keep their exact value.
//! Provides checked subtraction, lenient parsing of typed amounts, and
//! plain-number formatting.

use std::fmt;

/// Number of stored units per whole currency unit
const UNITS_PER_DOLLAR: i64 = 1_000_000;

/// Digits kept after the decimal point
const FRACTION_DIGITS: usize = 6;

/// Largest magnitude, in stored units, that a typed value may round to
const MAX_PARSED_UNITS: f64 = 1.0e18;

/// Represents a monetary amount in millionths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use aeyla::models::Money;
    /// assert_eq!(Money::from_cents(1050).to_string(), "10.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents * (UNITS_PER_DOLLAR / 100))
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use aeyla::models::Money;
    /// assert_eq!(Money::from_dollars(100).to_string(), "100");
    /// ```
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * UNITS_PER_DOLLAR)
    }

    /// Create a Money amount from millionths of the currency unit
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Subtract, or `None` if the result leaves the i64 range
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Parse a money amount from a string
    ///
    /// Reads the longest leading decimal number, ignoring whatever follows:
    /// "30abc" is 30 and "12.5.3" is 12.5. One optional sign and an optional
    /// `$` may come first ("-$5"). Exponents are accepted ("1e2"). Values are
    /// rounded to six decimal places. Fails when no number starts the input.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let len = numeric_prefix_len(rest);
        if len == 0 {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value: f64 = rest[..len]
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        let units = (value * UNITS_PER_DOLLAR as f64).round();
        if !units.is_finite() || units.abs() > MAX_PARSED_UNITS {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        let units = units as i64;
        Ok(Self(if negative { -units } else { units }))
    }
}

/// Length of the leading `digits [. digits] [e [sign] digits]` run of `s`,
/// or 0 if it does not start with a number
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut end = int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    end
}

/// Formats as a plain number with trailing fractional zeros trimmed:
/// `100`, `12.5`, `0.125`, `-5`. Currency symbols are left to the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = UNITS_PER_DOLLAR as u64;
        let whole = abs / scale;
        let fraction = abs % scale;

        if fraction == 0 {
            return write!(f, "{}{}", sign, whole);
        }

        let digits = format!("{:0width$}", fraction, width = FRACTION_DIGITS);
        write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
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
            MoneyParseError::OutOfRange(s) => write!(f, "Money amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

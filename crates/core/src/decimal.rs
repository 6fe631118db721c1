//! Codec for fixed-precision NUMERIC columns.
//!
//! Prices, square footage and budgets travel over the wire as JSON numbers
//! but are stored as `NUMERIC(p, s)`. The repositories bind them as text and
//! read them back as text, and every conversion in either direction goes
//! through [`DecimalColumn`].
//!
//! Encoding refuses values the store would round or overflow, so for every
//! value that encodes successfully, `decode(encode(x)) == x` holds exactly.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Shape of a `NUMERIC(precision, scale)` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalColumn {
    /// Total significant digits.
    pub precision: u32,
    /// Digits after the decimal point.
    pub scale: u32,
}

/// `properties.price`: `NUMERIC(12, 2)`.
pub const PRICE: DecimalColumn = DecimalColumn::new(12, 2);

/// `properties.square_footage`: `NUMERIC(10, 2)`.
pub const SQUARE_FOOTAGE: DecimalColumn = DecimalColumn::new(10, 2);

/// `clients.budget`: `NUMERIC(12, 2)`.
pub const BUDGET: DecimalColumn = DecimalColumn::new(12, 2);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    #[error("must be a finite number")]
    NotFinite,

    #[error("must have at most {scale} decimal places")]
    TooManyFractionalDigits { scale: u32 },

    #[error("must have at most {max_integer_digits} digits before the decimal point")]
    Overflow { max_integer_digits: u32 },

    #[error("is not a valid decimal: {0}")]
    Malformed(String),
}

impl DecimalColumn {
    pub const fn new(precision: u32, scale: u32) -> Self {
        Self { precision, scale }
    }

    fn max_integer_digits(self) -> u32 {
        self.precision - self.scale
    }

    /// Convert a wire number into the column's text form, e.g. `250000.0` -> `"250000.00"`.
    pub fn encode(self, value: f64) -> Result<String, DecimalError> {
        if !value.is_finite() {
            return Err(DecimalError::NotFinite);
        }
        // Collapse -0.0 so it never renders as "-0.00".
        let value = if value == 0.0 { 0.0 } else { value };

        let max_integer_digits = self.max_integer_digits();
        if value.abs() >= 10f64.powi(max_integer_digits as i32) {
            return Err(DecimalError::Overflow { max_integer_digits });
        }

        // f64's Display is the shortest string that parses back to the same
        // value and never uses exponent notation.
        let mut decimal = Decimal::from_str(&value.to_string())
            .map_err(|e| DecimalError::Malformed(e.to_string()))?;
        // Parsing rounds past 28 fractional digits, so a tiny non-zero input
        // can come back as zero.
        if decimal.is_zero() && value != 0.0 {
            return Err(DecimalError::TooManyFractionalDigits { scale: self.scale });
        }
        if decimal.normalize().scale() > self.scale {
            return Err(DecimalError::TooManyFractionalDigits { scale: self.scale });
        }

        decimal.rescale(self.scale);
        Ok(decimal.to_string())
    }

    /// Parse the column's text form back into a wire number.
    pub fn decode(self, text: &str) -> Result<f64, DecimalError> {
        let decimal = Decimal::from_str(text.trim())
            .map_err(|e| DecimalError::Malformed(format!("'{text}': {e}")))?;
        decimal
            .normalize()
            .to_string()
            .parse::<f64>()
            .map_err(|e| DecimalError::Malformed(format!("'{text}': {e}")))
    }

    /// Validation-time check that `value` can be stored without change.
    pub fn check(self, field: &str, value: f64) -> Result<(), CoreError> {
        self.encode(value)
            .map(|_| ())
            .map_err(|e| CoreError::Validation(format!("{field} {e}")))
    }
}

//! Money value object for BRL amounts.
//!
//! Amounts are stored as whole centavos so that budget sums stay exact.
//! Construction from fractional reais rejects negative and non-finite
//! input; malformed amounts are a caller contract violation, not a state
//! the store can reach.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// A non-negative BRL amount in whole centavos.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero reais.
    pub const ZERO: Self = Self(0);

    /// Creates a Money value from whole centavos, clamping negatives to zero.
    pub fn from_centavos(centavos: i64) -> Self {
        Self(centavos.max(0))
    }

    /// Creates a Money value from fractional reais (e.g. form input).
    ///
    /// Rejects negative, NaN, and infinite input. Fractions beyond
    /// centavo precision are rounded half-up.
    pub fn from_reais(reais: f64) -> Result<Self, ValidationError> {
        if !reais.is_finite() {
            return Err(ValidationError::invalid_amount(
                "amount",
                "must be a finite number",
            ));
        }
        if reais < 0.0 {
            return Err(ValidationError::invalid_amount(
                "amount",
                "must not be negative",
            ));
        }
        Ok(Self((reais * 100.0).round() as i64))
    }

    /// Returns the amount in whole centavos.
    pub fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the amount in fractional reais.
    pub fn as_reais(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtraction clamped at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Returns the smaller of two amounts.
    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Formats the amount in the pt-BR style: "R$ 45.000,00".
    pub fn format_brl(&self) -> String {
        let reais = self.0 / 100;
        let centavos = self.0 % 100;

        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        format!("R$ {},{:02}", grouped, centavos)
    }
}

impl Add for Money {
    type Output = Money;

    /// Saturating at `i64::MAX` centavos; totals over the collections
    /// stay total even for absurd inputs.
    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_brl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reais_accepts_valid_amounts() {
        assert_eq!(Money::from_reais(0.0).unwrap(), Money::ZERO);
        assert_eq!(Money::from_reais(2200.0).unwrap().centavos(), 220_000);
        assert_eq!(Money::from_reais(10.555).unwrap().centavos(), 1056);
    }

    #[test]
    fn from_reais_rejects_negative() {
        assert!(Money::from_reais(-1.0).is_err());
    }

    #[test]
    fn from_reais_rejects_non_finite() {
        assert!(Money::from_reais(f64::NAN).is_err());
        assert!(Money::from_reais(f64::INFINITY).is_err());
    }

    #[test]
    fn from_reais_caps_at_the_representable_maximum() {
        assert_eq!(Money::from_reais(1e17).unwrap().centavos(), i64::MAX);
    }

    #[test]
    fn from_centavos_clamps_negative_to_zero() {
        assert_eq!(Money::from_centavos(-500), Money::ZERO);
    }

    #[test]
    fn sums_are_exact() {
        let items = [
            Money::from_centavos(10),
            Money::from_centavos(20),
            Money::from_centavos(30),
        ];
        let total: Money = items.iter().copied().sum();
        assert_eq!(total.centavos(), 60);
    }

    #[test]
    fn addition_saturates_at_the_upper_bound() {
        let huge = Money::from_centavos(i64::MAX);
        assert_eq!((huge + Money::from_centavos(1)).centavos(), i64::MAX);

        let total: Money = [huge, huge, Money::from_centavos(42)].into_iter().sum();
        assert_eq!(total.centavos(), i64::MAX);
    }

    #[test]
    fn saturating_sub_never_goes_negative() {
        let a = Money::from_centavos(100);
        let b = Money::from_centavos(250);
        assert_eq!(a.saturating_sub(b), Money::ZERO);
        assert_eq!(b.saturating_sub(a).centavos(), 150);
    }

    #[test]
    fn formats_brl_with_thousand_separators() {
        assert_eq!(Money::from_centavos(4_500_000).format_brl(), "R$ 45.000,00");
        assert_eq!(Money::from_centavos(123_456).format_brl(), "R$ 1.234,56");
        assert_eq!(Money::ZERO.format_brl(), "R$ 0,00");
        assert_eq!(Money::from_centavos(85_000).format_brl(), "R$ 850,00");
    }
}

//! Dish price, held as integer cents.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Upper bound keeps cents well inside `i64` and rejects obvious typos.
const MAX_PRICE_CENTS: i64 = 100_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(i64);

impl Price {
    pub fn from_cents(cents: i64) -> Result<Self, DomainError> {
        if !(0..=MAX_PRICE_CENTS).contains(&cents) {
            return Err(DomainError::ValidationError(
                "Price must be between 0 and 1000000".to_string(),
            ));
        }
        Ok(Self(cents))
    }

    /// Rounds to the nearest cent.
    pub fn from_decimal(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::ValidationError("Price must be a number".to_string()));
        }
        Self::from_cents((amount * 100.0).round() as i64)
    }

    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let amount: f64 = text
            .trim()
            .parse()
            .map_err(|_| DomainError::ValidationError("Price must be a number".to_string()))?;
        Self::from_decimal(amount)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Price::from_decimal(n),
            Raw::Text(s) => Price::parse(&s),
        }
        .map_err(de::Error::custom)
    }
}

//! Lenient decoding for bean amounts
//!
//! Older installations stored bean values as plain JS numbers, so a shop item
//! with a fractional price left fractions in the balance, ledger and orders.
//! These helpers accept any JSON number and round it to whole beans.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

struct WholeBeans {
    round: fn(f64) -> f64,
}

impl<'de> Visitor<'de> for WholeBeans {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a bean amount")
    }

    fn visit_u64<E>(self, value: u64) -> Result<u64, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<u64, E>
    where
        E: de::Error,
    {
        Ok(value.max(0) as u64)
    }

    fn visit_f64<E>(self, value: f64) -> Result<u64, E>
    where
        E: de::Error,
    {
        if !value.is_finite() {
            return Err(de::Error::custom(format!("invalid bean amount: {}", value)));
        }
        // `as` saturates, negatives land on 0
        Ok((self.round)(value) as u64)
    }
}

/// Deserialize a debit-side amount, rounding fractions up like `Product::bean_price`
pub fn beans_ceil<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(WholeBeans { round: f64::ceil })
}

/// Deserialize a balance, dropping fractions
pub fn beans_floor<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(WholeBeans { round: f64::floor })
}

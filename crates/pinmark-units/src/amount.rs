use std::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::convert::{from_wei, to_wei, ETHER_DECIMALS};
use crate::error::{invalid, UnitError, UnitResult};

/// A price kept in both its entered decimal form and its 18-decimal
/// on-chain form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MoneyAmount {
    decimal: String,
    scaled: U256,
}

impl MoneyAmount {
    /// Parse an entered price.
    ///
    /// More than 18 fractional digits is rejected rather than truncated, so
    /// the kept decimal form always equals the scaled value.
    pub fn parse(decimal: &str) -> UnitResult<Self> {
        let scaled = to_wei(decimal)?;
        let fraction_len = decimal.split_once('.').map_or(0, |(_, f)| f.len());
        if fraction_len > ETHER_DECIMALS as usize {
            return Err(invalid(decimal, "more fractional digits than the unit allows"));
        }
        Ok(Self {
            decimal: decimal.to_owned(),
            scaled,
        })
    }

    /// Build from an on-chain value, rendering its canonical decimal form.
    pub fn from_scaled(scaled: U256) -> Self {
        Self {
            decimal: from_wei(scaled),
            scaled,
        }
    }

    /// The decimal form as entered.
    pub fn decimal(&self) -> &str {
        &self.decimal
    }

    /// The value scaled by `10^18`.
    pub fn scaled(&self) -> U256 {
        self.scaled
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decimal)
    }
}

impl TryFrom<String> for MoneyAmount {
    type Error = UnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MoneyAmount> for String {
    fn from(amount: MoneyAmount) -> Self {
        amount.decimal
    }
}

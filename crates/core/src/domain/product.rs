use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, non-negative monetary value.
///
/// Constructed only through [`Price::parse`] or [`Price::new`], so a
/// `Price` held anywhere in the system is known to be well-formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::NegativePrice { value: value.to_string() });
        }
        Ok(Self(value))
    }

    /// Parse a raw textual price as it arrives at the write boundary.
    ///
    /// Anything `Decimal` cannot read (e.g. `"free"`) is a
    /// [`ValidationError::MalformedPrice`], never silently stored.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value = Decimal::from_str(raw.trim())
            .map_err(|_| ValidationError::MalformedPrice { raw: raw.to_string() })?;
        Self::new(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

/// Product data that has passed validation but has no identifier yet.
///
/// The only way catalog data enters storage; constructing one rejects
/// empty names and malformed prices up front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        raw_price: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let price = Price::parse(raw_price)?;
        Ok(Self { name, description: description.into(), price })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
}

impl Product {
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self { id, name: draft.name, description: draft.description, price: draft.price }
    }
}

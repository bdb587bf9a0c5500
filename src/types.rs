//! Core types exchanged with the payment gateway
//!
//! Amounts are integers in the currency's minor unit (paise for INR,
//! cents for USD).

use crate::{PaygateError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// ISO 4217 currency code, three uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Indian rupee
    pub fn inr() -> Self {
        Self("INR".to_string())
    }

    /// Get the currency code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = PaygateError;

    fn from_str(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PaygateError::invalid_order(format!(
                "currency must be a 3-letter code, got {:?}",
                code
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for Currency {
    type Error = PaygateError;

    fn try_from(code: String) -> Result<Self> {
        code.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a create-order request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    /// Amount in minor units
    pub amount: u64,
    /// Currency code
    pub currency: Currency,
    /// Caller-side reference for reconciliation
    pub receipt: String,
    /// Free-form key/value notes
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub notes: BTreeMap<String, String>,
    /// Whether the order may be paid in parts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_payment: Option<bool>,
}

impl OrderRequest {
    /// Create a new order request
    pub fn new(amount: u64, currency: Currency, receipt: impl Into<String>) -> Self {
        Self {
            amount,
            currency,
            receipt: receipt.into(),
            notes: BTreeMap::new(),
            partial_payment: None,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes.insert(key.into(), value.into());
        self
    }

    /// Allow or forbid partial payments
    pub fn with_partial_payment(mut self, allowed: bool) -> Self {
        self.partial_payment = Some(allowed);
        self
    }

    /// Check the request before it goes on the wire
    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(PaygateError::invalid_order("amount must be positive"));
        }

        if self.receipt.trim().is_empty() {
            return Err(PaygateError::invalid_order("receipt cannot be empty"));
        }

        Ok(())
    }
}

/// Order as returned by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub amount_paid: u64,
    #[serde(default)]
    pub amount_due: u64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub attempts: u32,
    /// The gateway sends `[]` instead of `{}` for empty notes
    #[serde(default)]
    pub notes: serde_json::Value,
    #[serde(default)]
    pub created_at: i64,
}

impl Order {
    /// Creation time, if the gateway reported one
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created_at)
    }
}

/// Payment as returned by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub amount: u64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

impl Payment {
    /// Creation time, if the gateway reported one
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created_at)
    }
}

/// One page of payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCollection {
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub items: Vec<Payment>,
}

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

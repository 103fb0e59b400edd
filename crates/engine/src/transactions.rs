//! Transaction primitives.
//!
//! A [`Transaction`] is one sale event: a product identifier and the amount it
//! was sold for. The persisted log is a sequence of [`Record`]s, which keep
//! whatever JSON value was found on disk so that legacy or malformed entries
//! are carried through untouched when the log is rewritten.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A validated sale, as accepted by the write path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub product_id: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(product_id: impl Into<String>, amount: f64) -> Self {
        Self {
            product_id: product_id.into(),
            amount,
        }
    }
}

/// One element of the persisted transaction log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Returns the product id and amount when both are usable.
    ///
    /// A record is usable when `productId` is a non-empty string and `amount`
    /// is a JSON number. Anything else is a malformed record.
    pub fn parts(&self) -> Option<(&str, f64)> {
        let product_id = self
            .0
            .get("productId")?
            .as_str()
            .filter(|id| !id.is_empty())?;
        let amount = self.0.get("amount")?.as_f64()?;
        Some((product_id, amount))
    }

    pub fn product_id(&self) -> Option<&str> {
        self.0.get("productId").and_then(Value::as_str)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&Transaction> for Record {
    fn from(tx: &Transaction) -> Self {
        Self(json!({
            "productId": tx.product_id,
            "amount": tx.amount,
        }))
    }
}

impl From<Transaction> for Record {
    fn from(tx: Transaction) -> Self {
        Self::from(&tx)
    }
}

/// Untyped shape of an incoming write.
///
/// Fields are kept as raw JSON so the validator, not the deserializer,
/// decides which one is wrong.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCandidate {
    #[serde(default)]
    pub product_id: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
}

impl TransactionCandidate {
    pub fn new(product_id: impl Into<String>, amount: f64) -> Self {
        Self {
            product_id: Some(Value::String(product_id.into())),
            amount: Some(json!(amount)),
        }
    }
}

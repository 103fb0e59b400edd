//! Write-path validation.
//!
//! Only new writes are checked here. Records already in the store are never
//! re-validated; the aggregations skip what they cannot use instead.

use serde_json::Value;

use crate::{Transaction, TransactionCandidate, ValidationError};

/// Checks a candidate and turns it into a [`Transaction`].
///
/// `productId` must be a non-empty string and `amount` a finite number
/// strictly greater than zero. The product id is checked first.
pub fn validate(candidate: &TransactionCandidate) -> Result<Transaction, ValidationError> {
    let product_id = match &candidate.product_id {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err(ValidationError::MissingProductId),
    };

    let amount = candidate
        .amount
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or(ValidationError::InvalidAmount)?;

    Ok(Transaction { product_id, amount })
}

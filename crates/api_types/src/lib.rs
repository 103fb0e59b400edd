use serde::{Deserialize, Serialize};

/// Envelope of every successful response.
#[derive(Debug, Serialize, Deserialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Envelope of every failed response.
#[derive(Debug, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

impl Failure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

pub mod product {
    use super::*;
    use serde_json::Value;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductTotal {
        pub product_id: String,
        pub total_amount: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductAmounts {
        pub product_id: String,
        pub amounts: Vec<f64>,
    }

    /// Request body for adding a sale.
    ///
    /// Both fields are left untyped; the server reports which one is invalid.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductNew {
        #[serde(default)]
        pub product_id: Option<Value>,
        #[serde(default)]
        pub amount: Option<Value>,
    }

    /// The sale as it was stored.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductAdded {
        pub product_id: String,
        pub amount: f64,
    }
}

pub mod index {
    use super::*;
    use indexmap::IndexMap;

    /// Body of `GET /`: a short description of every route.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Index {
        pub message: String,
        pub endpoints: IndexMap<String, String>,
    }
}

pub mod report {
    use super::*;

    /// Output of the total-sales report.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SalesReport {
        pub total_sales: f64,
    }
}

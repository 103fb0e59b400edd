//! Products API endpoints

use api_types::{
    Success,
    product::{ProductAdded, ProductAmounts, ProductNew, ProductTotal},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::TransactionCandidate;
use serde_json::Value;

use crate::{ServerError, server::ServerState};

pub async fn list_totals(State(state): State<ServerState>) -> Json<Success<Vec<ProductTotal>>> {
    let data = state
        .ledger
        .totals()
        .into_iter()
        .map(|(product_id, total_amount)| ProductTotal {
            product_id,
            total_amount,
        })
        .collect();

    Json(Success::new(data))
}

pub async fn list_grouped(
    State(state): State<ServerState>,
) -> Json<Success<Vec<ProductAmounts>>> {
    let data = state
        .ledger
        .grouped()
        .into_iter()
        .map(|(product_id, amounts)| ProductAmounts {
            product_id,
            amounts,
        })
        .collect();

    Json(Success::new(data))
}

pub async fn get_total(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Success<ProductTotal>>, ServerError> {
    let total_amount = state.ledger.product_total(&id).ok_or(ServerError::NotFound)?;

    Ok(Json(Success::new(ProductTotal {
        product_id: id,
        total_amount,
    })))
}

pub async fn get_amounts(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Success<ProductAmounts>>, ServerError> {
    let amounts = state.ledger.product_amounts(&id);
    if amounts.is_empty() {
        return Err(ServerError::NotFound);
    }

    Ok(Json(Success::new(ProductAmounts {
        product_id: id,
        amounts,
    })))
}

pub async fn add(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Success<ProductAdded>>), ServerError> {
    let payload = match payload {
        Ok(Json(body @ Value::Object(_))) => serde_json::from_value::<ProductNew>(body).ok(),
        Ok(Json(_)) => None,
        Err(rejection) => {
            tracing::debug!("rejected product body: {rejection}");
            None
        }
    }
    .ok_or_else(|| ServerError::BadRequest("Invalid request body".to_string()))?;

    let tx = state
        .ledger
        .add(&TransactionCandidate {
            product_id: payload.product_id,
            amount: payload.amount,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Success::with_message(
            "Product added",
            ProductAdded {
                product_id: tx.product_id,
                amount: tx.amount,
            },
        )),
    ))
}

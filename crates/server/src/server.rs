use axum::{
    Router,
    routing::get,
};

use std::sync::Arc;

use crate::{index, products};
use engine::Ledger;

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(index::get))
        .route(
            "/api/products",
            get(products::list_grouped).post(products::add),
        )
        .route("/api/products/totals", get(products::list_totals))
        .route("/api/products/{id}/total", get(products::get_total))
        .route("/api/products/{id}/amounts", get(products::get_amounts))
        .with_state(state)
}

/// Build the application router over `ledger`.
pub fn app(ledger: Arc<Ledger>) -> Router {
    router(ServerState { ledger })
}

pub async fn run_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server running on http://{}", addr);
    for (endpoint, _) in index::ENDPOINTS {
        tracing::info!("  {endpoint}");
    }

    axum::serve(listener, app(Arc::new(ledger))).await
}

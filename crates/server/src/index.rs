use api_types::index::Index;
use axum::Json;

pub(crate) const ENDPOINTS: [(&str, &str); 5] = [
    (
        "GET /api/products/totals",
        "Get total amount for all products",
    ),
    ("GET /api/products", "Get product details with amounts"),
    (
        "GET /api/products/:id/total",
        "Get product by ID with total amount",
    ),
    (
        "GET /api/products/:id/amounts",
        "Get product by ID with all amounts",
    ),
    ("POST /api/products", "Add new product"),
];

pub async fn get() -> Json<Index> {
    Json(Index {
        message: "Product API Server".to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(endpoint, description)| (endpoint.to_string(), description.to_string()))
            .collect(),
    })
}

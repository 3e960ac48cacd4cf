mod health;
mod products;

use axum::{
    routing::get,
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
}

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::store::traits::Store;
use crate::web;

/// JSON endpoints, mounted under `/api`.
pub fn create_api_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/products", get(handlers::list_products::<S>))
        .route("/products/:id", get(handlers::get_product::<S>))
        .route("/departments", get(handlers::list_departments::<S>))
        .route("/departments/:id", get(handlers::get_department::<S>))
        .route(
            "/departments/:id/products",
            get(handlers::list_department_products::<S>),
        )
        .fallback(handlers::api_not_found)
}

/// Whole application: health check, `/api`, and the browsing pages.
pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", create_api_router::<S>())
        .merge(web::create_page_router::<S>())
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(handlers::log_requests)),
        )
}

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::api::error::{require_id, ApiError};
use crate::model::{
    Department, DepartmentProduct, DepartmentSummary, PageQuery, Pagination, Product,
    ProductSummary,
};
use crate::store::traits::Store;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /api/products
pub async fn list_products<S: Store>(
    State(store): State<AppState<S>>,
    query: PageQuery,
) -> Result<Json<Vec<ProductSummary>>, ApiError> {
    let products = store.list_products(Pagination::from_query(&query)).await?;
    Ok(Json(products))
}

/// GET /api/products/:id
pub async fn get_product<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = require_id(&id, "product")?;

    match store.get_product(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound("Product")),
    }
}

/// GET /api/departments
pub async fn list_departments<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<DepartmentSummary>>, ApiError> {
    Ok(Json(store.list_departments().await?))
}

/// GET /api/departments/:id
pub async fn get_department<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Department>, ApiError> {
    let id = require_id(&id, "department")?;

    store
        .get_department(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Department"))
}

/// GET /api/departments/:id/products
///
/// The department is looked up first so an unknown id is a 404 no matter
/// which page was asked for.
pub async fn list_department_products<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
    query: PageQuery,
) -> Result<Json<Vec<DepartmentProduct>>, ApiError> {
    let id = require_id(&id, "department")?;

    if store.get_department(id).await?.is_none() {
        return Err(ApiError::NotFound("Department"));
    }

    let products = store
        .list_department_products(id, Pagination::from_query(&query))
        .await?;
    Ok(Json(products))
}

pub async fn api_not_found() -> ApiError {
    ApiError::NoRoute
}

/// Request log line at debug level: method, path, status, elapsed.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log::debug!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

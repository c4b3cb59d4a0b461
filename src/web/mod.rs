//! Server-rendered catalog pages: product list, product detail and
//! department detail, each with the department link bar.

pub mod html;
pub mod pages;
pub mod paging;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::store::traits::Store;

pub fn create_page_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/", get(pages::product_list_page::<S>))
        .route("/products/:id", get(pages::product_detail_page::<S>))
        .route("/departments/:id", get(pages::department_page::<S>))
        .route("/static/app.css", get(pages::stylesheet))
}

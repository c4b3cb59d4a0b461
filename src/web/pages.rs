use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use crate::api::error::{require_id, ApiError};
use crate::api::handlers::AppState;
use crate::model::{parse_or_default, Id, PageQuery, Pagination, DEFAULT_PAGE};
use crate::store::traits::Store;
use crate::web::html::{self, Card};
use crate::web::paging::{safe_return_path, DetailQuery, PageControls, VIEW_LIMIT};

type PageResponse = (StatusCode, Html<String>);

fn respond(status: StatusCode, title: &str, body: &str) -> PageResponse {
    (status, Html(html::page(title, body)))
}

/// Render a failed load: a not-found gets its own message, anything else the
/// generic one. Store causes are logged here since they never reach the page.
fn failure(err: ApiError, title: &str, nav: &str, not_found: &str, generic: &str) -> PageResponse {
    let message = match &err {
        ApiError::NotFound(_) => not_found,
        ApiError::Internal(cause) => {
            log::error!("{}: {:#}", generic, cause);
            generic
        }
        _ => generic,
    };
    respond(err.status(), title, &format!("{}{}", nav, html::error_banner(message)))
}

async fn department_nav<S: Store>(store: &S, active: Option<Id>) -> String {
    match store.list_departments().await {
        Ok(departments) => html::department_nav(&departments, active),
        Err(e) => {
            log::error!("Failed to fetch departments: {:#}", e);
            html::department_nav_error()
        }
    }
}

/// GET /
pub async fn product_list_page<S: Store>(
    State(store): State<AppState<S>>,
    query: PageQuery,
) -> PageResponse {
    let page = parse_or_default(query.page.as_deref(), DEFAULT_PAGE);
    let nav = department_nav(&*store, None).await;

    let products = match store.list_products(Pagination::new(page, VIEW_LIMIT)).await {
        Ok(products) => products,
        Err(e) => {
            return failure(
                e.into(),
                "Products",
                &nav,
                "Failed to fetch products. Please try again later.",
                "Failed to fetch products. Please try again later.",
            )
        }
    };

    let controls = PageControls::new("/", page, products.len());
    let grid = html::product_grid(
        products.iter().map(|p| Card {
            id: p.id,
            name: p.name.as_deref(),
            brand: p.brand.as_deref(),
            retail_price: p.retail_price,
        }),
        &controls.current_href(),
    );

    let body = format!(
        r#"{nav}<div class="product-list-container"><h2>Products</h2>{grid}{pager}</div>"#,
        nav = nav,
        grid = grid,
        pager = html::pagination_controls(&controls),
    );
    respond(StatusCode::OK, "Products", &body)
}

/// GET /products/:id
pub async fn product_detail_page<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
    query: DetailQuery,
) -> PageResponse {
    let back = safe_return_path(query.from.as_deref());

    let product = async {
        let id = require_id(&id, "product")?;
        let product = store
            .get_product(id)
            .await?
            .ok_or(ApiError::NotFound("Product"))?;
        Ok::<_, ApiError>(product)
    }
    .await;

    let product = match product {
        Ok(product) => product,
        Err(err) => {
            return failure(
                err,
                "Product",
                "",
                "Product not found.",
                "Failed to fetch product details.",
            )
        }
    };

    let name = product.name.as_deref().unwrap_or("Untitled Product");
    let body = format!(
        r#"<div class="product-detail-container">
<a href="{back}" class="btn-back">&larr; Back</a>
<div class="product-detail-content">
<img src="{img}" alt="{name}" class="product-detail-image">
<div class="product-detail-info">
<h1>{name}</h1>
<span class="product-detail-brand">{brand}</span>
<p class="product-detail-price">{price}</p>
<p class="product-detail-description">This is a placeholder description for {name}. It belongs to the {department} department and {category} category.</p>
</div>
</div>
</div>"#,
        back = html::escape(back),
        img = html::product_detail_image(product.name.as_deref()),
        name = html::escape(name),
        brand = html::escape(product.brand.as_deref().unwrap_or("")),
        price = html::price(product.retail_price),
        department = html::escape(&product.department),
        category = html::escape(product.category.as_deref().unwrap_or("uncategorized")),
    );
    respond(StatusCode::OK, name, &body)
}

/// GET /departments/:id
pub async fn department_page<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<String>,
    query: PageQuery,
) -> PageResponse {
    let page = parse_or_default(query.page.as_deref(), DEFAULT_PAGE);
    let active = require_id(&id, "department").ok();
    let nav = department_nav(&*store, active).await;

    let loaded = async {
        let id = require_id(&id, "department")?;
        let department = store
            .get_department(id)
            .await?
            .ok_or(ApiError::NotFound("Department"))?;
        let products = store
            .list_department_products(id, Pagination::new(page, VIEW_LIMIT))
            .await?;
        Ok::<_, ApiError>((department, products))
    }
    .await;

    let (department, products) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            return failure(
                err,
                "Department",
                &nav,
                "Department not found.",
                "Failed to load data. Please try again.",
            )
        }
    };

    let base_path = format!("/departments/{}", department.id);
    let controls = PageControls::new(base_path, page, products.len());
    let listing = if products.is_empty() {
        "<p>No products found in this department.</p>".to_string()
    } else {
        let grid = html::product_grid(
            products.iter().map(|p| Card {
                id: p.id,
                name: p.name.as_deref(),
                brand: p.brand.as_deref(),
                retail_price: p.retail_price,
            }),
            &controls.current_href(),
        );
        format!("{}{}", grid, html::pagination_controls(&controls))
    };

    let body = format!(
        r#"{nav}<div class="department-page-container">
<header class="department-header">
<h2>{name}</h2>
<p>Showing {count} products (Page {page})</p>
</header>
{listing}
</div>"#,
        nav = nav,
        name = html::escape(&department.name),
        count = products.len(),
        page = page,
        listing = listing,
    );
    respond(StatusCode::OK, &department.name, &body)
}

/// GET /static/app.css
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/app.css"),
    )
}

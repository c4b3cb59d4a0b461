mod common;

use common::{single_department_catalog, small_catalog, spawn_app};
use reqwest::StatusCode;
use serde_json::{json, Value};

fn ids(rows: &Value) -> Vec<i64> {
    rows.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_products_defaults() {
    let client = spawn_app(small_catalog()).await;

    let response = client.get("/api/products").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows: Value = response.json().await.unwrap();
    assert_eq!(ids(&rows), vec![1, 2, 3]);
    assert_eq!(
        rows[2],
        json!({
            "id": 3,
            "name": "Denim Jacket",
            "brand": "Rivet & Co",
            "retail_price": 74.25,
            "department": "Men"
        })
    );
}

#[tokio::test]
async fn test_list_products_pages_through_catalog() {
    let client = spawn_app(small_catalog()).await;

    let first: Value = client
        .get("/api/products?page=1&limit=2")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get("/api/products?page=2&limit=2")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let third: Value = client
        .get("/api/products?page=3&limit=2")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(ids(&first), vec![1, 2]);
    assert_eq!(ids(&second), vec![3]);
    assert!(ids(&third).is_empty());
}

#[tokio::test]
async fn test_list_products_ignores_junk_pagination() {
    let client = spawn_app(single_department_catalog(12)).await;

    let response = client
        .get("/api/products?page=abc&limit=-4")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let rows: Value = response.json().await.unwrap();
    assert_eq!(ids(&rows), (1..=10).collect::<Vec<i64>>());

    let rows: Value = client
        .get("/api/products?page=2abc&limit=5x")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&rows), vec![6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn test_repeated_pagination_keys_use_first_value() {
    let client = spawn_app(single_department_catalog(12)).await;

    let response = client.get("/api/products?page=1&page=2").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let rows: Value = response.json().await.unwrap();
    assert_eq!(ids(&rows), (1..=10).collect::<Vec<i64>>());

    let response = client
        .get("/api/departments/1/products?limit=1&limit=2")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let rows: Value = response.json().await.unwrap();
    assert_eq!(ids(&rows), vec![1]);

    let rows: Value = client
        .get("/api/products?limit=3&page=2&limit=50")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&rows), vec![4, 5, 6]);
}

#[tokio::test]
async fn test_get_product() {
    let client = spawn_app(small_catalog()).await;

    let response = client.get("/api/products/1").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product: Value = response.json().await.unwrap();
    assert_eq!(
        product,
        json!({
            "id": 1,
            "name": "Linen Shirt",
            "brand": "Coastline",
            "retail_price": 39.5,
            "department_id": 1,
            "category": "Tops",
            "department": "Women"
        })
    );
}

#[tokio::test]
async fn test_get_product_errors() {
    let client = spawn_app(small_catalog()).await;

    let response = client.get("/api/products/abc").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Invalid product ID. Must be an integer."}));

    let response = client.get("/api/products/999999").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn test_list_departments_counts_products() {
    let client = spawn_app(small_catalog()).await;

    let response = client.get("/api/departments").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let departments: Value = response.json().await.unwrap();
    assert_eq!(
        departments,
        json!([
            {"id": 3, "name": "Accessories", "product_count": 0},
            {"id": 2, "name": "Men", "product_count": 1},
            {"id": 1, "name": "Women", "product_count": 2}
        ])
    );
}

#[tokio::test]
async fn test_get_department() {
    let client = spawn_app(small_catalog()).await;

    let response = client.get("/api/departments/2").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let department: Value = response.json().await.unwrap();
    assert_eq!(department, json!({"id": 2, "name": "Men"}));

    let response = client.get("/api/departments/men").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Invalid department ID. Must be an integer."}));

    let response = client.get("/api/departments/42").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Department not found"}));
}

#[tokio::test]
async fn test_department_products_are_scoped_and_paged() {
    let client = spawn_app(small_catalog()).await;

    let rows: Value = client
        .get("/api/departments/1/products")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        rows,
        json!([
            {"id": 1, "name": "Linen Shirt", "brand": "Coastline", "retail_price": 39.5},
            {"id": 2, "name": "Wool Coat", "brand": "Northfield", "retail_price": 189.0}
        ])
    );

    let rows: Value = client
        .get("/api/departments/1/products?page=2&limit=1")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&rows), vec![2]);

    let rows: Value = client
        .get("/api/departments/3/products")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(ids(&rows).is_empty());
}

#[tokio::test]
async fn test_department_products_unknown_department() {
    let client = spawn_app(small_catalog()).await;

    for path in [
        "/api/departments/42/products",
        "/api/departments/42/products?page=5&limit=1",
        "/api/departments/42/products?page=junk",
    ] {
        let response = client.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Department not found"}));
    }

    let response = client.get("/api/departments/x/products").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let client = spawn_app(small_catalog()).await;

    for path in ["/api/products?page=1&limit=2", "/api/departments", "/api/products/3"] {
        let first = client.get(path).await.unwrap().text().await.unwrap();
        let second = client.get(path).await.unwrap().text().await.unwrap();
        assert_eq!(first, second, "{}", path);
    }
}

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let store = small_catalog();
    let client = spawn_app(store.clone()).await;
    store.set_unavailable(true);

    for path in [
        "/api/products",
        "/api/products/1",
        "/api/departments",
        "/api/departments/1",
        "/api/departments/1/products",
    ] {
        let response = client.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", path);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Internal Server Error"}));
    }

    // Validation still runs before the store is touched
    let response = client.get("/api/products/abc").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_api_route() {
    let client = spawn_app(small_catalog()).await;

    let response = client.get("/api/orders").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let client = spawn_app(small_catalog()).await;

    let response = client
        .get_with_origin("/api/departments", "http://localhost:3000")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_health_check() {
    let client = spawn_app(small_catalog()).await;

    let response = client.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().is_some());
}

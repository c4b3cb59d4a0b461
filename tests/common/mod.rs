#![allow(dead_code)]

use catalog_browser::model::{Department, ProductRecord};
use catalog_browser::routes::create_router;
use catalog_browser::MemoryStore;
use reqwest::Client;
use std::sync::Arc;
use tokio::net::TcpListener;

// Test client wrapper for making API calls
pub struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(&format!("{}{}", self.base_url, path))
            .send()
            .await
    }

    pub async fn get_with_origin(
        &self,
        path: &str,
        origin: &str,
    ) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(&format!("{}{}", self.base_url, path))
            .header("Origin", origin)
            .send()
            .await
    }
}

/// Serve the full router for `store` on an ephemeral local port.
pub async fn spawn_app(store: Arc<MemoryStore>) -> TestClient {
    let app = create_router::<MemoryStore>().with_state(store);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    TestClient::new(format!("http://{}", address))
}

/// Three departments (one empty) and three products.
pub fn small_catalog() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.insert_department(Department::new(1, "Women"));
    store.insert_department(Department::new(2, "Men"));
    store.insert_department(Department::new(3, "Accessories"));

    store
        .insert_product(ProductRecord::new(1, "Linen Shirt", "Coastline", 39.5, 1, "Tops"))
        .unwrap();
    store
        .insert_product(ProductRecord::new(2, "Wool Coat", "Northfield", 189.0, 1, "Outerwear"))
        .unwrap();
    store
        .insert_product(ProductRecord::new(3, "Denim Jacket", "Rivet & Co", 74.25, 2, "Outerwear"))
        .unwrap();

    Arc::new(store)
}

/// One department holding `count` products, ids 1..=count.
pub fn single_department_catalog(count: i32) -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.insert_department(Department::new(1, "Women"));
    for id in 1..=count {
        store
            .insert_product(ProductRecord::new(
                id,
                format!("Item {}", id),
                "Acme",
                id as f64,
                1,
                "Basics",
            ))
            .unwrap();
    }
    Arc::new(store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so RUST_LOG from it applies
    dotenvy::dotenv().ok();
    catalog_browser::init_logging();

    log::info!("Catalog Browser: products and departments over HTTP");

    if let Err(e) = catalog_browser::run_server().await {
        log::error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

//! Mentorbot HTTP server binary

use mentorbot::server::{run_server, AppState};
use mentorbot::{HistoryStore, HttpHistoryStore, InMemoryHistoryStore, ResponderEngine};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    println!("Mentorbot responder");
    println!("   Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let engine = ResponderEngine::with_default_templates();
    println!("✓ Template store seeded ({} languages)", engine.store().len());

    // Remote history API is optional; default is a process-local store
    let history_api_url = std::env::var("HISTORY_API_URL").ok();

    let store: Arc<dyn HistoryStore> = if let Some(url) = history_api_url {
        println!("✓ History backend: remote API at {}", url);
        let remote = HttpHistoryStore::new(url.clone());

        match remote.health_check().await {
            Ok(true) => println!("✓ History API is healthy"),
            Ok(false) => eprintln!("⚠️  History API health check returned non-success"),
            Err(e) => {
                eprintln!("❌ Failed to connect to history API at {}: {}", url, e);
                return Err(e);
            }
        }

        Arc::new(remote)
    } else {
        println!("✓ History backend: in-memory (set HISTORY_API_URL for a shared store)");
        Arc::new(InMemoryHistoryStore::new())
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8082);

    println!("✓ Responder engine initialized");
    println!("✓ Starting HTTP server on port {}...", port);
    println!();

    run_server(AppState { engine, store }, port).await?;

    Ok(())
}

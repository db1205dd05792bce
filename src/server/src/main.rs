/* src/server/src/main.rs */

use std::path::Path;
use std::sync::Arc;

use ekush_server::{AppState, EkushConfig, build_router};
use ekush_store::RestStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config_path = std::env::args().nth(1).unwrap_or_else(|| "ekush.toml".to_string());
  let config = EkushConfig::load(Path::new(&config_path))?;

  if config.server.admin_token.is_none() {
    tracing::warn!("server.admin_token not set, admin API is disabled");
  }

  let store = Arc::new(RestStore::new(&config.backend.url, &config.backend.api_key));
  let state = Arc::new(AppState::new(store, &config));
  let router = build_router(state);

  let addr = format!("0.0.0.0:{}", config.server.port);
  let listener = tokio::net::TcpListener::bind(&addr).await?;
  tracing::info!(port = listener.local_addr()?.port(), backend = %config.backend.url, "ekush server listening");
  axum::serve(listener, router).await?;
  Ok(())
}

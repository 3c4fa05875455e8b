use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::store::{NetworkStore, load_seed};
use subway_server::web::{AppState, create_router};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = ServerConfig::from_env()?;

    let store = NetworkStore::new();
    if let Some(seed) = &config.seed {
        info!(path = %seed.display(), "Loading seed data");
        load_seed(&store, seed).await?;
    }

    let app = create_router(AppState::new(store), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Subway route finder listening");
    info!("Open http://{} in your browser for the web interface.", config.addr);

    axum::serve(listener, app).await?;
    Ok(())
}

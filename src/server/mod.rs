pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use crate::{Config, Error, Result};

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(config.clone())?;
    let router = create_router(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("AIFortune listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| Error::Config(e.to_string()))?;

    Ok(())
}

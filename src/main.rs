mod model;
mod server;

use crate::server::{
    config::Config, data::collection::ProjectCollection, error::AppError, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open projects store: {}", e);
            return Err(e);
        }
    };

    let listener = startup::bind_listener(&config).await?;

    tracing::info!("Starting server");

    let state = AppState::new(ProjectCollection::new(db.clone()));
    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;

    Ok(())
}

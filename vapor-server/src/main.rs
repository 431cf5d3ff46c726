use vapor_server::{AppState, Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Vapor server starting...");

    // 2. Connect to the store
    let state = AppState::initialize(&config).await?;

    // 3. First-launch demo catalog
    vapor_server::db::seed::seed_catalog(state.store.clone()).await?;

    // 4. Serve until ctrl-c
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

use payroll_server::{Config, Server, ServerState, setup_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env (a missing file is fine)
    let _ = dotenvy::dotenv();

    // 2. Configuration, then logging
    let config = Config::from_env().inspect_err(|e| eprintln!("Invalid configuration: {e}"))?;
    setup_logging(&config);
    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Payroll server starting"
    );

    // 3. State (database pool, JWT keys)
    let state = ServerState::initialize(&config).await?;

    // 4. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

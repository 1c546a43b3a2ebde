use mock_project_graphql::config::AppConfig;
use mock_project_graphql::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Default to info, keep the HTTP stack at warn
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("hyper", log::LevelFilter::Warn)
        .filter_module("tower_http", log::LevelFilter::Warn)
        .init();

    println!("Mock project GraphQL server");

    // Load configuration
    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    if let Err(e) = run_server(&config).await {
        log::error!("Server stopped: {:#}", e);
        return Err(e);
    }

    Ok(())
}

pub mod api;
pub mod config;
pub mod model;
pub mod schema;
pub mod seed;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export all model types
pub use model::*;

pub use schema::{build_schema, MockSchema, QueryRoot};
pub use seed::Faker;

use crate::config::AppConfig;

/// Build the random source described by the configuration.
pub fn create_faker(config: &AppConfig) -> Faker {
    match config.fake.seed {
        Some(seed) => {
            log::info!("Fake data seeded with {}", seed);
            Faker::seeded(seed)
        }
        None => Faker::from_entropy(),
    }
}

/// Build the full application router with its state attached.
pub fn build_app(config: &AppConfig) -> axum::Router {
    let schema = build_schema(create_faker(config), &config.graphql);
    let state = api::AppState::new(schema, &config.graphql);
    api::create_router(&config.graphql).with_state(state)
}

pub async fn run_server(config: &AppConfig) -> anyhow::Result<()> {
    use axum::serve;
    use tokio::net::TcpListener;

    let app = build_app(config);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!(
        "GraphQL endpoint available at http://{}{}",
        bind_address,
        config.graphql.path
    );
    if config.graphql.explorer {
        log::info!("GraphiQL explorer enabled on GET {}", config.graphql.path);
    }

    serve(listener, app).await?;

    Ok(())
}

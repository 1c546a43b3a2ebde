use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{FromRequest, Request, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::config::GraphQlConfig;
use crate::schema::MockSchema;

#[derive(Clone)]
pub struct AppState {
    pub schema: MockSchema,
    /// Path the explorer page posts its queries to.
    pub endpoint: Arc<str>,
    pub explorer: bool,
    pub pretty: bool,
}

impl AppState {
    pub fn new(schema: MockSchema, config: &GraphQlConfig) -> Self {
        Self {
            schema,
            endpoint: Arc::from(config.path.as_str()),
            explorer: config.explorer,
            pretty: config.pretty,
        }
    }
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Execute a GraphQL request against the mock schema.
///
/// Malformed queries, unknown fields and bad variables never fail the HTTP
/// request; they come back in the `errors` list of the response envelope.
pub async fn graphql_handler(State(state): State<AppState>, request: GraphQLRequest) -> Response {
    execute(&state, request.into_inner()).await
}

/// GET on the GraphQL path: the explorer for browsers, query execution for
/// everyone else.
pub async fn graphql_get(State(state): State<AppState>, request: Request) -> Response {
    if state.explorer && wants_explorer(request.headers()) {
        return graphiql(&state).into_response();
    }

    match <GraphQLRequest as FromRequest<AppState>>::from_request(request, &state).await {
        Ok(request) => execute(&state, request.into_inner()).await,
        Err(rejection) => rejection.into_response(),
    }
}

async fn execute(state: &AppState, request: async_graphql::Request) -> Response {
    log::debug!(
        "executing GraphQL operation {}",
        request.operation_name.as_deref().unwrap_or("<anonymous>")
    );

    let response = state.schema.execute(request).await;
    if response.is_err() {
        for error in &response.errors {
            log::warn!("GraphQL request failed: {}", error.message);
        }
    }
    render(response, state.pretty)
}

fn render(response: async_graphql::Response, pretty: bool) -> Response {
    if pretty {
        match serde_json::to_string_pretty(&response) {
            Ok(body) => {
                return ([(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            Err(e) => log::error!("Failed to pretty-print GraphQL response: {}", e),
        }
    }
    GraphQLResponse::from(response).into_response()
}

/// A browser navigating to the endpoint asks for HTML and not for JSON.
fn wants_explorer(headers: &HeaderMap) -> bool {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    accept.contains("text/html") && !accept.contains("application/json")
}

/// Interactive GraphiQL explorer pointing back at the query endpoint.
fn graphiql(state: &AppState) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(&state.endpoint).finish())
}

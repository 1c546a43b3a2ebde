use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::handlers::{self, AppState};
use crate::config::GraphQlConfig;

pub fn create_router(config: &GraphQlConfig) -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .route(
            &config.path,
            get(handlers::graphql_get).post(handlers::graphql_handler),
        )
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::build_schema;
    use crate::seed::Faker;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app(config: &GraphQlConfig) -> Router {
        let schema = build_schema(Faker::seeded(9), config);
        create_router(config).with_state(AppState::new(schema, config))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_executes_query() {
        let request = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"query":"{ project { hash title } }"}"#))
            .unwrap();

        let response = app(&GraphQlConfig::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json.get("errors").is_none());
        assert!(json["data"]["project"]["hash"].is_string());
        assert!(json["data"]["project"]["title"].is_string());
    }

    #[tokio::test]
    async fn test_get_serves_explorer_to_browsers() {
        let request = Request::builder()
            .uri("/graphql")
            .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8")
            .body(Body::empty())
            .unwrap();

        let response = app(&GraphQlConfig::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("graphiql"));
        assert!(html.contains("/graphql"));
    }

    #[tokio::test]
    async fn test_get_with_json_accept_executes_query_while_explorer_enabled() {
        let request = Request::builder()
            .uri("/graphql?query=%7B%20project%20%7B%20hash%20%7D%20%7D")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();

        let response = app(&GraphQlConfig::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json"));

        let json = body_json(response).await;
        assert!(json["data"]["project"]["hash"].is_string());
    }

    #[tokio::test]
    async fn test_browser_gets_json_when_explorer_disabled() {
        let config = GraphQlConfig {
            explorer: false,
            ..GraphQlConfig::default()
        };
        let request = Request::builder()
            .uri("/graphql?query=%7B%20project%20%7B%20title%20%7D%20%7D")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();

        let response = app(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["data"]["project"]["title"].is_string());
    }

    #[tokio::test]
    async fn test_pretty_and_compact_output() {
        let post = || {
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"query":"{ project { hash } }"}"#))
                .unwrap()
        };

        let response = app(&GraphQlConfig::default()).oneshot(post()).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("\n  \"data\""), "{}", text);

        let config = GraphQlConfig {
            pretty: false,
            ..GraphQlConfig::default()
        };
        let response = app(&config).oneshot(post()).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!text.contains('\n'), "{}", text);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(json["data"]["project"]["hash"].is_string());
    }

    #[tokio::test]
    async fn test_get_executes_query_when_explorer_disabled() {
        let config = GraphQlConfig {
            explorer: false,
            ..GraphQlConfig::default()
        };
        let request = Request::builder()
            .uri("/graphql?query=%7B%20repositories%20%7B%20hash%20%7D%20%7D")
            .body(Body::empty())
            .unwrap();

        let response = app(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["data"]["repositories"].is_array());
    }

    #[tokio::test]
    async fn test_custom_path() {
        let config = GraphQlConfig {
            path: "/api/graphql".to_string(),
            ..GraphQlConfig::default()
        };
        let request = Request::builder()
            .method("POST")
            .uri("/api/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"query":"{ projects { hash } }"}"#))
            .unwrap();

        let response = app(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["data"]["projects"].is_array());
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app(&GraphQlConfig::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }
}

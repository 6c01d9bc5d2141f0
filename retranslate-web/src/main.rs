use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use retranslate_mt::DeepLProvider;

mod config;
mod error;
mod routes;

use config::ServerConfig;
use routes::{AppState, api_router};

fn build_app(state: AppState, request_timeout: Duration) -> Router {
    api_router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::map_response(error::timeout_as_json))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let translator = DeepLProvider::new(config.gateway.clone())
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;

    info!(
        endpoint = translator.endpoint(),
        gateway_timeout_secs = config.gateway.timeout.as_secs(),
        "Starting retranslate web server"
    );

    let state = AppState {
        translator: Arc::new(translator),
    };
    let app = build_app(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Server running at http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use retranslate_mt::{MockMode, MockTranslator};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_slow_gateway_hits_request_timeout() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 500);
        let app = build_app(
            AppState {
                translator: Arc::new(mock),
            },
            Duration::from_millis(50),
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/translate")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text":"Hello","api_key":"key"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn test_cors_preflight_allowed() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let app = build_app(
            AppState {
                translator: Arc::new(mock),
            },
            Duration::from_secs(5),
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/translate")
                    .header("origin", "http://localhost:5173")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert!(response.headers().contains_key("access-control-allow-origin"));
    }
}

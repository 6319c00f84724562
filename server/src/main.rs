mod api;
mod db;
mod history;
mod models;
mod schema;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use pantrychef_core::llm::{provider_from_env, LlmProvider};
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers.
///
/// `db` is None when DATABASE_URL is not set; persistence endpoints degrade
/// instead of the server refusing to start.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<db::DbPool>,
    pub llm: Arc<dyn LlmProvider>,
}

/// Get a pooled connection or early-return the appropriate error response.
#[macro_export]
macro_rules! get_conn {
    ($state:expr) => {
        match $state.db.as_ref() {
            Some(pool) => match pool.get() {
                Ok(conn) => conn,
                Err(_) => {
                    return (
                        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                        axum::Json($crate::api::ErrorResponse {
                            error: "Database connection failed".to_string(),
                        }),
                    )
                        .into_response()
                }
            },
            None => {
                return (
                    axum::http::StatusCode::SERVICE_UNAVAILABLE,
                    axum::Json($crate::api::ErrorResponse {
                        error: "Persistent storage is not configured".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    };
}

fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    init_telemetry();

    let db = match env::var("DATABASE_URL") {
        Ok(url) => Some(db::create_pool(&url)),
        Err(_) => {
            tracing::warn!(
                "DATABASE_URL not set - saved recipes and history are disabled for this run"
            );
            None
        }
    };

    let llm: Arc<dyn LlmProvider> = Arc::from(provider_from_env());
    tracing::info!(
        provider = llm.provider_name(),
        model = llm.model_name(),
        "Recipe generation provider configured"
    );

    let state = AppState { db, llm };

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/ingredients", api::ingredients::router())
        .route(
            "/api/validate-ingredient",
            axum::routing::post(api::ingredients::validate::validate_ingredient),
        )
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        );

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:3000/swagger-ui/");

    axum::serve(listener, app).await.unwrap();
}

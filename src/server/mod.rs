//! HTTP/WebSocket transport.
//!
//! One path carries both GraphQL channels: `POST` (or `GET ?query=`) for queries and
//! mutations, `GET` with a WebSocket upgrade for subscriptions (`graphql-transport-ws`
//! or the legacy `graphql-ws` subprotocol). `/health` answers liveness probes.

use crate::graphql::ResourceSchema;
use crate::services::{QueryService, SubscriptionService};
use async_graphql_axum::{GraphQL, GraphQLSubscription};
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server terminated: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Clone)]
struct HealthState {
    query: QueryService,
    subscription: SubscriptionService,
}

/// Builds the router: GraphQL at `path`, health at `/health`.
pub fn router(
    schema: ResourceSchema,
    path: &str,
    query: QueryService,
    subscription: SubscriptionService,
) -> Router {
    let graphql = Router::new()
        .route(
            path,
            get(graphql_get).post_service(GraphQL::new(schema.clone())),
        )
        .with_state(schema);

    let health = Router::new()
        .route("/health", get(health))
        .with_state(HealthState {
            query,
            subscription,
        });

    graphql
        .merge(health)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// WebSocket upgrades go to the subscription handler, plain `GET ?query=` to the
/// request/response one.
async fn graphql_get(State(schema): State<ResourceSchema>, request: Request) -> Response {
    if request.headers().contains_key(header::UPGRADE) {
        GraphQLSubscription::new(schema)
            .oneshot(request)
            .await
            .into_response()
    } else {
        GraphQL::new(schema).oneshot(request).await.into_response()
    }
}

async fn health(State(state): State<HealthState>) -> impl IntoResponse {
    match state.query.count().await {
        Ok(resources) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "resources": resources,
                "listeners": state.subscription.listener_count(),
            })),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "error": e.to_string(),
                })),
            )
        }
    }
}

/// Binds `addr` and serves `router` until Ctrl-C.
pub async fn serve(
    addr: std::net::SocketAddr,
    path: &str,
    router: Router,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local = listener.local_addr()?;

    info!("Server is running at http://{local}{path}");
    info!("Subscriptions are running on ws://{local}{path}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
        return;
    }
    info!("Received shutdown signal");
}

use std::sync::Arc;
use std::time::Duration;

use auth::AuthGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::me::me;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::service::AuthService;

pub struct AppState<S: CredentialStore> {
    pub auth_service: Arc<AuthService<S>>,
    pub gate: Arc<AuthGate>,
}

impl<S: CredentialStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            gate: Arc::clone(&self.gate),
        }
    }
}

pub fn create_router<S: CredentialStore>(
    auth_service: Arc<AuthService<S>>,
    gate: Arc<AuthGate>,
) -> Router {
    let state = AppState {
        auth_service,
        gate: Arc::clone(&gate),
    };

    let public_routes = Router::new().route("/api/auth/login", post(login::<S>));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me::<S>))
        .route_layer(middleware::from_fn_with_state(gate, auth_middleware));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // The span deliberately carries no headers: bearer credentials
            // must never reach the logs.
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

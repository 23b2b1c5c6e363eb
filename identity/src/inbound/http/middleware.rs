use std::sync::Arc;

use auth::AuthGate;
use auth::GateOutcome;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::auth::models::CredentialId;

/// Extension type carrying the authenticated principal through one request.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub credential_id: CredentialId,
}

/// Middleware that gates protected routes on a valid bearer credential.
///
/// The gate logs the specific failure; the response body is identical for
/// every rejection shape so callers cannot probe why a credential was
/// refused. The downstream handler runs only on admission.
pub async fn authenticate(
    State(gate): State<Arc<AuthGate>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let authorization = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let principal = match gate.evaluate(authorization) {
        GateOutcome::Admitted(principal) => principal,
        GateOutcome::Rejected => return Err(unauthorized()),
    };

    let credential_id = CredentialId::from_string(&principal.subject).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a credential id");
        unauthorized()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedPrincipal { credential_id });

    Ok(next.run(req).await)
}

/// The single rejection body every refused credential receives, whatever the
/// underlying failure. Shared with the handlers so the shape cannot diverge.
pub(crate) fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "invalid or expired credential"
        })),
    )
        .into_response()
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::Credential;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// Return the credential behind the authenticated principal.
pub async fn me<S: CredentialStore>(
    State(state): State<AppState<S>>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
) -> Result<ApiSuccess<CredentialData>, ApiError> {
    let credential = state
        .auth_service
        .credential(&principal.credential_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CredentialData::from(&credential),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialData {
    pub id: String,
    pub email: String,
}

impl From<&Credential> for CredentialData {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id.to_string(),
            email: credential.email.as_str().to_string(),
        }
    }
}

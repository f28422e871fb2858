use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Admin service error variants.
///
/// Every failed operation surfaces one of these as a JSON body with a stable
/// `kind` field.
#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("flavor not found")]
    FlavorNotFound,
    #[error("step not found")]
    StepNotFound,
    #[error("flavor name already taken")]
    FlavorNameTaken,
    #[error("step number already taken")]
    StepNumberTaken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AdminServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::FlavorNotFound => "FLAVOR_NOT_FOUND",
            Self::StepNotFound => "STEP_NOT_FOUND",
            Self::FlavorNameTaken => "FLAVOR_NAME_TAKEN",
            Self::StepNumberTaken => "STEP_NUMBER_TAKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AdminServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::FlavorNotFound | Self::StepNotFound => StatusCode::NOT_FOUND,
            Self::FlavorNameTaken | Self::StepNumberTaken => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests; client errors carry their own kind in the body.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

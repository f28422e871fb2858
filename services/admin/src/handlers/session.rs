use axum::Extension;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use capvote_core::session::{clear_session_cookie, session_token};

use crate::domain::repository::IdentityPort;
use crate::state::AppState;
use crate::usecase::authorize::AdminIdentity;

/// Invalidates the session upstream, clears the cookie and sends the
/// caller back to the login page.
///
/// The upstream sign-out is best-effort: when the identity service is
/// unreachable the session is still cleared locally so the admin is not
/// stuck logged in.
pub async fn logout(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    jar: CookieJar,
) -> Response {
    if let Some(token) = session_token(&jar) {
        if let Err(e) = state.identity.sign_out(&token).await {
            tracing::warn!(error = %e, "identity sign out failed; clearing session locally");
        }
    }

    tracing::info!(profile_id = %identity.profile_id, "superadmin signed out");

    let jar = clear_session_cookie(jar, state.cookie_domain.clone());

    (
        StatusCode::SEE_OTHER,
        jar,
        [(header::LOCATION, state.guard_routes.login.clone())],
    )
        .into_response()
}

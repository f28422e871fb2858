use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use capvote_core::session::session_token;

use crate::state::{AppState, GuardRoutes};
use crate::usecase::authorize::{AuthorizeAdminUseCase, GuardRejection};

/// Middleware gating every admin route behind the superadmin check.
///
/// On success the resolved [`AdminIdentity`] is attached as a request
/// extension, so handlers never re-run the check.
///
/// [`AdminIdentity`]: crate::usecase::authorize::AdminIdentity
pub async fn require_superadmin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let usecase = AuthorizeAdminUseCase {
        identity: state.identity.clone(),
        profile_repo: state.profile_repo(),
    };

    match usecase.execute(session_token(&jar).as_deref()).await {
        Ok(Ok(identity)) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Ok(Err(rejection)) => rejection_response(rejection, &state.guard_routes),
        Err(e) => e.into_response(),
    }
}

/// See Other redirect to the configured login or unauthorized route.
pub fn rejection_response(rejection: GuardRejection, routes: &GuardRoutes) -> Response {
    let location = match rejection {
        GuardRejection::Login => routes.login.as_str(),
        GuardRejection::Unauthorized => routes.unauthorized.as_str(),
    };

    (StatusCode::SEE_OTHER, [(header::LOCATION, location.to_owned())]).into_response()
}

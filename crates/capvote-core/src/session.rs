//! Session-cookie helpers.
//!
//! Sessions are minted by the identity service; capvote services only read
//! the opaque token, forward it, and clear it on logout.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the identity-service session token.
pub const CAPVOTE_SESSION: &str = "capvote_session";

/// Read the session token from the jar, if present.
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(CAPVOTE_SESSION).map(|c| c.value().to_owned())
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use capvote_core::session::{clear_session_cookie, CAPVOTE_SESSION};
///
/// let jar = clear_session_cookie(CookieJar::new(), "example.com".to_string());
/// let cookie = jar.get(CAPVOTE_SESSION).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// assert_eq!(cookie.path(), Some("/"));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn clear_session_cookie(jar: CookieJar, domain: String) -> CookieJar {
    let cookie = Cookie::build((CAPVOTE_SESSION, ""))
        .path("/")
        .domain(domain)
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

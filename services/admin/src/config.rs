/// Admin service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AdminConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Base URL of the identity service (e.g. "http://identity:3110").
    pub identity_url: String,
    /// TCP port for the HTTP server (default 3190). Env var: `ADMIN_PORT`.
    pub admin_port: u16,
    /// Cookie domain used when clearing the session cookie on logout.
    pub cookie_domain: String,
    /// Redirect target for unauthenticated visitors (default "/login").
    pub login_route: String,
    /// Redirect target for non-superadmin visitors (default "/unauthorized").
    pub unauthorized_route: String,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            identity_url: std::env::var("IDENTITY_URL").expect("IDENTITY_URL"),
            admin_port: std::env::var("ADMIN_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3190),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
            login_route: std::env::var("LOGIN_ROUTE").unwrap_or_else(|_| "/login".to_owned()),
            unauthorized_route: std::env::var("UNAUTHORIZED_ROUTE")
                .unwrap_or_else(|_| "/unauthorized".to_owned()),
        }
    }
}

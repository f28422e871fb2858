use sea_orm::Database;
use tracing::info;

use capvote_admin::config::AdminConfig;
use capvote_admin::infra::identity::HttpIdentityClient;
use capvote_admin::router::build_router;
use capvote_admin::state::{AppState, GuardRoutes};
use capvote_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AdminConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        identity: HttpIdentityClient::new(&config.identity_url),
        guard_routes: GuardRoutes {
            login: config.login_route,
            unauthorized: config.unauthorized_route,
        },
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.admin_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("admin service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}

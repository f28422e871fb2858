use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use capvote_core::health::{healthz, readyz};
use capvote_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::guard::require_superadmin;
use crate::handlers::{
    flavor::{create_flavor, delete_flavor, list_flavors, update_flavor},
    session::logout,
    stats::dashboard_stats,
    step::{create_step, delete_step, list_steps, update_step},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let admin = Router::new()
        // Dashboard
        .route("/admin/stats", get(dashboard_stats))
        // Flavors
        .route("/admin/flavors", get(list_flavors))
        .route("/admin/flavors", post(create_flavor))
        .route("/admin/flavors/{id}", patch(update_flavor))
        .route("/admin/flavors/{id}", delete(delete_flavor))
        // Steps
        .route("/admin/flavors/{id}/steps", get(list_steps))
        .route("/admin/flavors/{id}/steps", post(create_step))
        .route("/admin/steps/{id}", patch(update_step))
        .route("/admin/steps/{id}", delete(delete_step))
        // Session
        .route("/admin/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_superadmin,
        ));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(admin)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}

//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{MethodRouter, any, get};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// Routes are tried in this order: the navigation API, portfolio photos,
/// files in the static directory, then the front controller.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new().route(
        "/_smak/navigation",
        get(handlers::navigation::get_navigation).post(handlers::navigation::reload_navigation),
    );

    if let Some(photos) = &state.photos {
        router = router.nest_service(&photos.url, ServeDir::new(&photos.dir));
    }

    router = if let Some(static_dir) = &state.static_dir {
        let front: MethodRouter =
            any(handlers::pages::front_controller).with_state(Arc::clone(&state));
        router.fallback_service(
            ServeDir::new(static_dir)
                .call_fallback_on_method_not_allowed(true)
                .fallback(front),
        )
    } else {
        router.fallback(handlers::pages::front_controller)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(security::referrer_policy_layer()),
        )
        .with_state(state)
}

//! Navigation API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use smak_site::NavigationTree;

use crate::error::ServerError;
use crate::state::AppState;

/// Current navigation tree as JSON.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationTree>, ServerError> {
    let tree = state.site.navigation()?;
    Ok(Json(NavigationTree::clone(&tree)))
}

/// Re-read the navigation file and return the new tree.
///
/// A file that fails to load leaves the current tree in place.
pub(crate) async fn reload_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationTree>, ServerError> {
    let tree = state.site.load_navigation(&state.navigation_file)?;
    Ok(Json(NavigationTree::clone(&tree)))
}

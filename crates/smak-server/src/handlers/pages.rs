//! Front controller handler.
//!
//! Every request that is not a static file or an API route ends up here.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};
use smak_site::{RequestContext, Resolution, RoutingSettings};

use crate::error::ServerError;
use crate::state::AppState;

/// Build the request context for `path` and the template parameter.
///
/// With rewriting enabled, a request without the template parameter for any
/// path other than `/` and the entry path is treated as if the path (without
/// surrounding slashes) had been passed as the parameter.
#[must_use]
pub fn request_context(
    routing: &RoutingSettings,
    rewrite: bool,
    path: &str,
    param: Option<String>,
) -> RequestContext {
    let param = match param {
        None if rewrite && path != "/" && path != routing.entry_path => {
            Some(path.trim_matches('/').to_owned())
        }
        param => param,
    };
    RequestContext::new(path, param)
}

/// Handle a page request.
///
/// # Errors
///
/// Returns [`ServerError::Site`] if the request cannot be routed or the page
/// cannot be rendered.
pub(crate) async fn front_controller(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let site = &state.site;
    let path = uri.path();
    let param = query.get(&site.config().routing.param).cloned();

    let ctx = request_context(&site.config().routing, state.rewrite, path, param);
    let requested = match site.resolve(&ctx)? {
        Resolution::NotFound => {
            tracing::debug!(path = %path, "Template not found");
            return Ok(StatusCode::NOT_FOUND.into_response());
        }
        Resolution::Redirect { location } => {
            return Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response());
        }
        Resolution::Page(requested) => requested,
    };

    let page = site.render(&requested)?;
    let etag = compute_etag(&state.version, &page.html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_owned()),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        page.html,
    )
        .into_response())
}

/// Compute `ETag` from version and rendered content.
fn compute_etag(version: &str, content: &str) -> String {
    let input = format!("{version}:{content}");
    let hash = Md5::digest(input.as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use smak_portfolio::PortfolioError;
use smak_site::SiteError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Site misconfiguration, at startup or while handling a request.
    #[error("{0}")]
    Site(#[from] SiteError),

    /// Portfolio directory could not be opened.
    #[error("Portfolio error: {0}")]
    Portfolio(#[from] PortfolioError),

    /// Invalid listen address.
    #[error("Invalid address: {0}")]
    Address(#[from] std::net::AddrParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = json!({"error": self.to_string()});
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

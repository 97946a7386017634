//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}/edit', use
//! [format_endpoint].

use axum::http::Uri;

/// The overview page with the transaction form, filters, list and dashboard.
pub const ROOT: &str = "/";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/edit";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`, percent-encoded as a path segment.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}', '{transaction_id}' is the
/// parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        urlencoding::encode(id),
        &endpoint_path[param_end..]
    )
}

/// Append `redirect_url` to `endpoint_path` as the query parameter `redirect_url`.
///
/// Handlers use it to send the client back to the page, filters included,
/// that the request came from.
pub fn with_redirect_url(endpoint_path: &str, redirect_url: &str) -> String {
    match serde_urlencoded::to_string([("redirect_url", redirect_url)]) {
        Ok(query) => format!("{endpoint_path}?{query}"),
        Err(error) => {
            tracing::warn!("could not encode redirect URL {redirect_url:?}: {error}");
            endpoint_path.to_owned()
        }
    }
}

/// Get the local URL to redirect to, falling back to [ROOT].
///
/// Only paths on this server are accepted, anything else (e.g. "https://...",
/// "//evil.example" or `/\evil.example`) is replaced with [ROOT].
pub fn local_redirect_url(redirect_url: Option<String>) -> String {
    match redirect_url {
        Some(url) if is_local_path(&url) => url,
        _ => ROOT.to_owned(),
    }
}

fn is_local_path(url: &str) -> bool {
    // Browsers read a backslash as '/', making `/\host` protocol-relative.
    if url.contains('\\') || url.chars().any(char::is_control) {
        return false;
    }

    match url.parse::<Uri>() {
        Ok(uri) => {
            uri.scheme().is_none()
                && uri.authority().is_none()
                && uri.path().starts_with('/')
                && !uri.path().starts_with("//")
        }
        Err(_) => false,
    }
}

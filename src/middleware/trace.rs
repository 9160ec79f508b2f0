//! Request span maker for `TraceLayer`.
//!
//! Session handshakes put bearer material in the query string
//! (`__session`, `__clerk_db_jwt`, ...). Those values are replaced before the
//! URI is recorded on the span.

use axum::http::{Request, Uri};
use tower_http::trace::MakeSpan;
use tracing::Span;

/// Query parameter names whose values never reach the logs.
const REDACTED_PARAMS: &[&str] = &[
    "__session",
    "__clerk_db_jwt",
    "__dev_session",
    "session_token",
    "token",
    "access_token",
    "code",
    "secret",
];

const REDACTED: &str = "[REDACTED]";

/// `MakeSpan` that records method and a redacted URI.
#[derive(Clone, Debug, Default)]
pub struct SanitizedMakeSpan;

impl<B> MakeSpan<B> for SanitizedMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %redact_uri(request.uri()),
            version = ?request.version(),
        )
    }
}

fn is_redacted(key: &str) -> bool {
    REDACTED_PARAMS
        .iter()
        .any(|param| key.eq_ignore_ascii_case(param))
}

fn redact_uri(uri: &Uri) -> String {
    let Some(query) = uri.query() else {
        return uri.path().to_string();
    };

    let pairs: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if is_redacted(key) => format!("{key}={REDACTED}"),
            _ => pair.to_string(),
        })
        .collect();

    format!("{}?{}", uri.path(), pairs.join("&"))
}

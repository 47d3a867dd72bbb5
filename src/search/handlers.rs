use super::completer::complete;
use super::index::FrequencyIndex;
use super::types::{AutocompleteParams, MatchesResponse, MessageResponse};
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use serde::Serialize;
use std::sync::Arc;

/// The only endpoint served.
pub const ENDPOINT_AUTOCOMPLETE: &str = "/autocomplete";
/// Number of matches returned per query unless configured otherwise.
pub const DEFAULT_MAX_MATCHES: usize = 25;

const UNSUPPORTED_REQUEST: &str = "Unsupported request";
const INTERNAL_ERROR_BODY: &str = r#"{"message":"Internal service error"}"#;

/// Read-only state shared by every request handler.
#[derive(Debug, Clone)]
pub struct AutocompleteService {
    pub index: Arc<FrequencyIndex>,
    pub max_matches: usize,
}

impl AutocompleteService {
    pub fn new(index: Arc<FrequencyIndex>, max_matches: usize) -> Self {
        Self { index, max_matches }
    }
}

/// Builds the HTTP router. Anything other than `GET /autocomplete` is answered
/// with the unsupported-request body.
pub fn router(service: AutocompleteService) -> Router {
    Router::new()
        .route(
            ENDPOINT_AUTOCOMPLETE,
            get(handle_autocomplete).fallback(handle_unsupported),
        )
        .fallback(handle_unsupported)
        .layer(Extension(service))
}

pub async fn handle_autocomplete(
    method: Method,
    Extension(service): Extension<AutocompleteService>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    // `get` also routes HEAD here.
    if method != Method::GET {
        return unsupported();
    }

    let params = query.map(|Query(pairs)| AutocompleteParams::from_pairs(pairs));
    let term = match params {
        Ok(AutocompleteParams { term: Some(term) }) if !term.is_empty() => term,
        Ok(_) => {
            tracing::debug!("Rejected autocomplete request without term");
            return unsupported();
        }
        Err(e) => {
            tracing::debug!("Rejected autocomplete request: {}", e);
            return unsupported();
        }
    };

    let matches = complete(&service.index, &term, service.max_matches);
    tracing::info!("Prefix: {} Matches: {}", term, matches.len());

    json_response(StatusCode::OK, &MatchesResponse { matches })
}

pub async fn handle_unsupported(method: Method, uri: Uri) -> Response {
    tracing::debug!("Unsupported request: {} {}", method, uri);
    unsupported()
}

fn unsupported() -> Response {
    json_response(
        StatusCode::BAD_REQUEST,
        &MessageResponse {
            message: UNSUPPORTED_REQUEST.to_string(),
        },
    )
}

/// Serializes `body` as the JSON response, falling back to a 500 with the
/// internal-error body if serialization fails.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                INTERNAL_ERROR_BODY,
            )
                .into_response()
        }
    }
}

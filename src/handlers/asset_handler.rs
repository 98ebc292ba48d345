//! Static Assets
//!
//! Serves files from the configured static directory under `/static`.

use std::path::{Component, Path, PathBuf};

use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::AppState;

/// Map a request path onto the static root.
///
/// Only plain file-name segments are accepted, so `..`, absolute paths and
/// drive prefixes never resolve outside `root`.
pub fn resolve_asset(root: &Path, requested: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    let mut segments = 0;

    for component in Path::new(requested).components() {
        match component {
            Component::Normal(segment) => {
                resolved.push(segment);
                segments += 1;
            }
            Component::CurDir => {}
            _ => return None,
        }
    }

    (segments > 0).then_some(resolved)
}

pub async fn static_asset_handler(
    State(state): State<AppState>,
    UrlPath(requested): UrlPath<String>,
) -> Response {
    let Some(path) = resolve_asset(&state.static_dir, &requested) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => return StatusCode::NOT_FOUND.into_response(),
    }

    match tokio::fs::read(&path).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime_type.as_ref().to_string())],
                content,
            )
                .into_response()
        }
        Err(e) => {
            warn!(path = %path.display(), "Failed to read asset: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

//! Serving of stored assets at `/uploads/{name}`.
//!
//! The path maps directly onto the asset store root. Name validation and
//! traversal protection happen inside the store; an unknown name surfaces
//! as a 404.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /uploads/{name}
pub async fn serve(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let bytes = state.assets.resolve(&name).await?;
    let content_type = content_type_for(&name);
    Ok(([(CONTENT_TYPE, content_type)], bytes).into_response())
}

/// Map a stored name's extension to a content type for serving.
///
/// Unknown extensions fall back to `application/octet-stream`.
fn content_type_for(name: &str) -> &'static str {
    match name.rsplit('.').next().unwrap_or("") {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_extensions() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.webp"), "image/webp");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(content_type_for("a.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}

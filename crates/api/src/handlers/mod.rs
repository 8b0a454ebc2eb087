//! HTTP handlers, grouped by resource.

pub mod category;
pub mod product;
pub mod uploads;

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::{AppError, AppResult};
use crate::services::Upload;

/// Collected fields of a multipart form: text values by field name, plus
/// at most one uploaded file taken from `file_field`.
///
/// Empty file parts (a form submitted with no file chosen) are treated as
/// no upload. Unknown fields are ignored.
pub(crate) async fn read_multipart_form(
    mut multipart: Multipart,
    file_field: &str,
) -> AppResult<(HashMap<String, String>, Option<Upload>)> {
    let mut fields = HashMap::new();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == file_field {
            let original_name = field.file_name().unwrap_or("").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if !bytes.is_empty() {
                upload = Some(Upload {
                    original_name,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            fields.insert(name, text);
        }
    }

    Ok((fields, upload))
}

/// Fetch a required text field from a parsed multipart form.
pub(crate) fn require_field(fields: &HashMap<String, String>, name: &str) -> AppResult<String> {
    fields
        .get(name)
        .cloned()
        .ok_or_else(|| AppError::BadRequest(format!("Missing required '{name}' field")))
}

/// Parse an optional text field into `T`, with a 400 on malformed input.
pub(crate) fn parse_field<T: std::str::FromStr>(
    fields: &HashMap<String, String>,
    name: &str,
) -> AppResult<Option<T>> {
    match fields.get(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid value for '{name}': '{raw}'"))),
        _ => Ok(None),
    }
}

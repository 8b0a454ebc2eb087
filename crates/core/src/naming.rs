//! Stored-asset naming convention.
//!
//! Uploaded icon/image files are persisted under a generated name derived
//! from a caller-supplied random token plus the original file's extension.
//! The name depends only on its inputs, never on file content.

use uuid::Uuid;

/// Generate the stored name for an uploaded asset.
///
/// Convention: `{token}.{ext}` where `ext` is the lowercased alphanumeric
/// extension of `original_filename`. Files without a usable extension get
/// the bare token. The token carries 128 bits of entropy, which makes
/// collisions between independently stored assets practically impossible.
///
/// # Examples
///
/// ```
/// use stockroom_core::naming::stored_asset_name;
/// use uuid::Uuid;
///
/// let token = Uuid::nil();
/// assert_eq!(
///     stored_asset_name("photo.PNG", token),
///     "00000000-0000-0000-0000-000000000000.png"
/// );
/// assert_eq!(
///     stored_asset_name("README", token),
///     "00000000-0000-0000-0000-000000000000"
/// );
/// ```
pub fn stored_asset_name(original_filename: &str, token: Uuid) -> String {
    match extension_of(original_filename) {
        Some(ext) => format!("{token}.{ext}"),
        None => token.to_string(),
    }
}

/// Extract a safe, lowercased extension from a filename.
///
/// Returns `None` when there is no dot, the extension is empty, or it
/// contains anything other than ASCII alphanumerics.
fn extension_of(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Directory-traversal guard for stored names.
///
/// A stored name may only contain ASCII alphanumerics, `.`, `_`, and `-`,
/// and must never be empty, be pure dots, or contain a `..` sequence.
/// Everything the asset store reads or writes passes this check first, so
/// no operation can escape the storage root.
pub fn is_safe_stored_name(name: &str) -> bool {
    if name.is_empty() || name.contains("..") {
        return false;
    }
    if name.chars().all(|c| c == '.') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
}

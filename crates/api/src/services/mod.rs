//! Service layer composing the asset store and the catalog repositories.
//!
//! Create and update interleave two writes: the uploaded asset is stored
//! first, then the record is persisted. There is no rollback of the stored
//! asset if the record write fails; a failure in between leaves an orphaned
//! file, never a record referencing a missing asset. The database unique
//! index is the authoritative duplicate guard; the name pre-checks here only
//! produce a friendlier conflict message.

pub mod category;
pub mod product;

use stockroom_core::naming::stored_asset_name;
use stockroom_storage::AssetStore;
use uuid::Uuid;

use crate::error::AppResult;

/// An uploaded file extracted from a multipart request.
#[derive(Debug, Clone)]
pub struct Upload {
    /// The client-supplied filename; only its extension survives storage.
    pub original_name: String,
    pub bytes: Vec<u8>,
}

/// Store an upload under a freshly generated name and return that name.
///
/// The name is derived from a random 128-bit token plus the original file's
/// extension, so independently stored assets never collide.
async fn store_upload(assets: &AssetStore, upload: &Upload) -> AppResult<String> {
    let token = Uuid::new_v4();
    let stored_name = stored_asset_name(&upload.original_name, token);
    assets.store(&stored_name, &upload.bytes).await?;
    Ok(stored_name)
}

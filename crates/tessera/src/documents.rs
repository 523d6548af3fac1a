//! Saved JSON documents: raw payloads and user profiles.

use serde::de::DeserializeOwned;
use std::path::Path;
use tessera_core::{RawPlatformPayload, UserProfile};
use tessera_error::{DocumentError, DocumentErrorKind, TesseraResult};

/// Read a raw platform payload saved from an upstream response.
///
/// # Errors
///
/// Returns a document error if the file cannot be read or parsed.
pub fn read_payload(path: impl AsRef<Path>) -> TesseraResult<RawPlatformPayload> {
    read_json(path.as_ref())
}

/// Read an upstream user-profile document.
///
/// Fields other than the connected accounts are ignored.
///
/// # Errors
///
/// Returns a document error if the file cannot be read or parsed.
pub fn read_profile(path: impl AsRef<Path>) -> TesseraResult<UserProfile> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> TesseraResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        DocumentError::new(DocumentErrorKind::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;
    let value = serde_json::from_str(&contents).map_err(|e| {
        DocumentError::new(DocumentErrorKind::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;
    Ok(value)
}

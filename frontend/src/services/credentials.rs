//! Credential lookup for the destination request.

use crate::config::AUTH_TOKEN_STORAGE_KEY;
use crate::types::{UploadError, UploadResult};

/// Something that can hand out the current auth token.
///
/// Read once per upload attempt. Any `Fn() -> Option<String>` works, which
/// keeps tests free of browser storage.
pub trait CredentialProvider {
    fn token(&self) -> Option<String>;
}

impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String>,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Token stored in `window.localStorage`.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageCredentials {
    key: &'static str,
}

impl Default for LocalStorageCredentials {
    fn default() -> Self {
        Self {
            key: AUTH_TOKEN_STORAGE_KEY,
        }
    }
}

impl LocalStorageCredentials {
    fn storage() -> UploadResult<web_sys::Storage> {
        gloo_utils::window()
            .local_storage()
            .map_err(|e| UploadError::Browser(format!("Local storage unavailable: {:?}", e)))?
            .ok_or_else(|| UploadError::Browser("Local storage unavailable".to_string()))
    }

    /// Persist a token for later uploads.
    pub fn store(&self, token: &str) -> UploadResult<()> {
        Self::storage()?
            .set_item(self.key, token)
            .map_err(|e| UploadError::Browser(format!("Failed to store token: {:?}", e)))
    }

    /// Store `base64(login:password)` as the Basic token.
    pub fn store_login(&self, login: &str, password: &str) -> UploadResult<()> {
        let token = gloo_utils::window()
            .btoa(&format!("{}:{}", login, password))
            .map_err(|e| UploadError::Browser(format!("Failed to encode credentials: {:?}", e)))?;
        self.store(&token)
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn token(&self) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(self.key).ok().flatten(),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }
}

/// `Authorization` header value for the destination request.
///
/// A missing or empty token is sent as the literal `false` rather than
/// omitted; the import service expects the header to be present.
pub fn authorization_header(token: Option<&str>) -> String {
    match token {
        Some(token) if !token.is_empty() => format!("Basic {}", token),
        _ => "false".to_string(),
    }
}

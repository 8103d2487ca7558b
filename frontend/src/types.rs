//! Common types used across the frontend application.
//!
//! This module centralizes type definitions shared by the upload
//! state machine, the services and the components.
//!
//! # Categories
//!
//! - **File Types** - what the widget can upload
//! - **API Types** - destination-request wire structures
//! - **Notification Types** - banner state and styling
//! - **Error Types** - upload error handling

use serde::Deserialize;
use thiserror::Error;

use crate::config::{ERR_ON_UPLOAD, UPLOADED_MESSAGE};

// =============================================================================
// File Types
// =============================================================================

/// A user-selected file the widget can hand to a transport.
///
/// Implemented for the browser [`web_sys::File`]; tests provide
/// in-memory files.
pub trait UploadFile: Clone {
    /// File name as reported by the picker.
    fn file_name(&self) -> String;
}

impl UploadFile for web_sys::File {
    fn file_name(&self) -> String {
        web_sys::File::name(self)
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Response body of the destination-request endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UploadDestination {
    /// Pre-signed URL, valid for a single PUT.
    #[serde(rename = "signedURL")]
    pub signed_url: String,
}

/// A fully prepared `GET` against the destination-request endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct DestinationRequest {
    /// Caller-supplied endpoint URL.
    pub url: String,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
    /// Request headers, in order.
    pub headers: Vec<(String, String)>,
}

impl DestinationRequest {
    /// Look up a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a query parameter by exact name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Outcome shown by the notification banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Upload completed
    Success,
    /// Destination request failed
    Error,
}

impl Severity {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Error => "alert-error",
        }
    }

    /// User-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Severity::Success => UPLOADED_MESSAGE,
            Severity::Error => ERR_ON_UPLOAD,
        }
    }
}

/// Transient banner state.
///
/// `severity` stays `None` until the first upload finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub open: bool,
    pub severity: Option<Severity>,
}

impl NotificationState {
    /// Severity used for rendering; an unset severity renders as an error.
    pub fn display_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Error)
    }

    pub fn message(&self) -> &'static str {
        self.display_severity().message()
    }

    pub fn is_success(&self) -> bool {
        self.severity == Some(Severity::Success)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while talking to the destination endpoint or the storage
/// destination.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum UploadError {
    /// Destination request did not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// Destination endpoint answered with a non-success status.
    #[error("Destination request rejected with status {0}")]
    Status(u16),

    /// Destination endpoint answered with an unexpected body.
    #[error("Invalid destination response: {0}")]
    InvalidResponse(String),

    /// PUT to the pre-signed URL did not complete.
    #[error("File transfer failed: {0}")]
    Transfer(String),

    /// Browser API unavailable or refused the call.
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

//! Application configuration.
//!
//! Centralized configuration for the CSV import admin frontend.
//! Values are compiled in; the import endpoint can be overridden at build
//! time with the `IMPORT_API_URL` environment variable.

/// Destination-request endpoint used by the product import page.
///
/// Answers `GET ?name=<file>` with `{ "signedURL": "..." }`.
pub const IMPORT_API_URL: &str = match option_env!("IMPORT_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000/import",
};

/// Local storage key holding the Basic auth token.
pub const AUTH_TOKEN_STORAGE_KEY: &str = "authorization_token";

/// Banner text after a completed upload.
pub const UPLOADED_MESSAGE: &str = "File uploaded successfully";

/// Banner text after a failed destination request.
pub const ERR_ON_UPLOAD: &str = "File upload failed";

/// How long the notification banner stays open (milliseconds).
pub const NOTIFICATION_HIDE_MS: u32 = 2000;

/// `accept` attribute of the file picker.
pub const ACCEPTED_FILE_TYPES: &str = ".csv";

//! UI Components for the CSV import admin page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Page Components
//! - [`ProductImportPage`] - Admin page hosting the product import widget
//!
//! # Feature Components
//! - [`CsvFileImport`] - Single-file picker with pre-signed upload
//! - [`NotificationBanner`] - Upload outcome snackbar
//! - [`LoginModal`] - Credentials prompt that re-triggers the upload

mod csv_import;
mod login_modal;
mod notification;
mod product_import;

pub use csv_import::*;
pub use login_modal::*;
pub use notification::*;
pub use product_import::*;

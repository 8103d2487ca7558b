//! CSV Import - Admin Frontend (Rust/Leptos)
//!
//! A WebAssembly admin page for importing product catalogues: the admin
//! picks a CSV file, the page asks the import service for a pre-signed URL
//! and uploads the file straight to storage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProductImportPage                                           │
//! │  └── CsvFileImport                                           │
//! │      ├── file picker / Remove + Upload actions               │
//! │      ├── NotificationBanner (upload outcome)                 │
//! │      └── LoginModal (re-triggers upload after login)         │
//! └─────────────────────────────────────────────────────────────┘
//!
//!   upload:  GET  <url>?name=<file>   ──▶  { "signedURL": ... }
//!            PUT  <signedURL>  (file bytes)
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadDestination, NotificationState, UploadError)
//! - [`state`] - Upload state machine driving the widget
//! - [`components`] - UI components (CsvFileImport, NotificationBanner, LoginModal)
//! - [`services`] - Import service communication and credentials

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    UploadFile,
    // API
    DestinationRequest, UploadDestination,
    // Notifications
    NotificationState, Severity,
    // Errors
    UploadError, UploadResult,
};

// State
pub use state::{UploadPhase, WidgetState, WidgetStore};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount [`App`] on `<body>`.
///
/// Called from the trunk binary.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 CSV Import - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=ProductImportPage/>
                    <Route path="/admin/products" view=ProductImportPage/>
                </Routes>
            </main>
        </Router>
    }
}

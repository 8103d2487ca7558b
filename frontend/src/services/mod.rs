//! Backend and browser services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`credentials`] - Auth token lookup in browser local storage
//! - [`upload`] - Destination request and direct PUT to the pre-signed URL

pub mod credentials;
pub mod upload;

pub use credentials::*;
pub use upload::*;

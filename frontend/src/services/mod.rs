//! Browser and backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`gallery`] - remote gallery service (list / create artworks)
//! - [`files`] - file type checks, data-URL previews, object URLs
//! - [`storage`] - persisted submission gate in `localStorage`

pub mod gallery;
pub mod files;
pub mod storage;

pub use gallery::*;
pub use files::*;
pub use storage::*;

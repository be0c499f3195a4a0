//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Gallery Types** - artwork records and image references
//! - **Notification Types** - user-facing feedback
//! - **API Types** - gallery service response schemas
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use crate::config::INSTAGRAM_URL;

// =============================================================================
// Gallery Types
// =============================================================================

/// Artwork identifier.
///
/// The gallery service hands out numeric ids, but string ids are accepted too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtworkId {
    Number(u64),
    Text(String),
}

/// A browser object URL (`blob:...`) that is revoked when dropped.
pub struct ObjectUrl {
    url: String,
    release: Option<fn(&str)>,
}

impl ObjectUrl {
    /// Wrap `url`; `release` runs once when the value is dropped.
    pub fn new(url: impl Into<String>, release: Option<fn(&str)>) -> Self {
        Self {
            url: url.into(),
            release,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            log::debug!("🧹 Revoking object URL {}", self.url);
            release(&self.url);
        }
    }
}

impl PartialEq for ObjectUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}

/// Where an artwork image comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageRef {
    /// URL or base64 data URL served by the gallery service
    Remote(String),
    /// Object URL of a file picked in this session
    Local(Rc<ObjectUrl>),
}

impl ImageRef {
    /// Value for an `<img src>` attribute.
    pub fn src(&self) -> String {
        match self {
            ImageRef::Remote(src) => src.clone(),
            ImageRef::Local(url) => url.as_str().to_string(),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ImageRef::Local(_))
    }
}

/// One gallery item's display data.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: String,
    /// Author display name
    pub author_name: String,
    /// Instagram handle of the author
    pub author_handle: String,
    pub description: String,
    pub image: ImageRef,
}

impl ArtworkRecord {
    /// Handle without a leading `@`.
    pub fn handle(&self) -> &str {
        self.author_handle.trim().trim_start_matches('@')
    }

    /// External profile link built from the author handle.
    pub fn profile_url(&self) -> String {
        format!("{}{}", INSTAGRAM_URL, self.handle())
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast-success",
            NotificationLevel::Error => "toast-error",
        }
    }
}

/// A user-facing message produced by the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Artwork as returned by `GET /gallery/g/images`.
///
/// Text fields may be missing or `null`; both read as empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteArtwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name_user: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL or base64 data URL
    #[serde(default, alias = "image_url")]
    pub image_base64: Option<String>,
}

impl From<RemoteArtwork> for ArtworkRecord {
    fn from(remote: RemoteArtwork) -> Self {
        Self {
            id: remote.id,
            title: remote.title.unwrap_or_default(),
            author_name: remote.name_user.unwrap_or_default(),
            author_handle: remote.username.unwrap_or_default(),
            description: remote.description.unwrap_or_default(),
            // Empty source renders the placeholder
            image: ImageRef::Remote(remote.image_base64.unwrap_or_default()),
        }
    }
}

/// Body of the listing endpoint.
///
/// The service reports its own status code inside the body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListImagesResponse {
    pub status: u16,
    #[serde(default)]
    pub data: Option<Vec<RemoteArtwork>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Listing response validated at the boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    Ready(Vec<ArtworkRecord>),
    Unavailable { status: u16, message: Option<String> },
}

impl ListImagesResponse {
    /// Success means status `200` with a `data` payload.
    pub fn into_listing(self) -> Listing {
        match (self.status, self.data) {
            (200, Some(data)) => Listing::Ready(data.into_iter().map(ArtworkRecord::from).collect()),
            (status, _) => Listing::Unavailable {
                status,
                message: self.message,
            },
        }
    }
}

/// Body of the create endpoint. Only `message` is read.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateImageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `POST /gallery/p/image`.
#[derive(Clone, Debug)]
pub struct CreateImageResponse {
    /// HTTP status code
    pub status: u16,
    pub body: CreateImageBody,
}

impl CreateImageResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Rejected before reaching the service.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service answered with a non-success status.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Local storage access failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Browser file API failed.
    #[error("File error: {0}")]
    File(String),
}

impl AppError {
    /// Text suitable for a notification.
    ///
    /// Validation messages are already written for the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserialization() {
        let json = r#"{
            "status": 200,
            "data": [
                {
                    "id": 7,
                    "title": "Comuna 13",
                    "name_user": "Laura",
                    "username": "laura.pinta",
                    "description": "Grafiti en las escaleras",
                    "image_base64": "data:image/png;base64,iVBORw0KGgo="
                },
                {
                    "id": "b2",
                    "title": "Metro Lines",
                    "name_user": "Juan",
                    "username": "@juan",
                    "description": "",
                    "image_url": "https://cdn.example.com/metro.jpg"
                }
            ]
        }"#;

        let response: ListImagesResponse = serde_json::from_str(json).unwrap();
        let Listing::Ready(records) = response.into_listing() else {
            panic!("expected a ready listing");
        };

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, ArtworkId::Number(7));
        assert_eq!(records[0].title, "Comuna 13");
        assert_eq!(records[0].author_name, "Laura");
        assert_eq!(records[0].author_handle, "laura.pinta");
        assert_eq!(records[0].description, "Grafiti en las escaleras");
        assert_eq!(
            records[0].image,
            ImageRef::Remote("data:image/png;base64,iVBORw0KGgo=".to_string())
        );
        assert_eq!(records[1].id, ArtworkId::Text("b2".to_string()));
        assert_eq!(records[1].image.src(), "https://cdn.example.com/metro.jpg");
    }

    #[test]
    fn test_listing_with_null_fields_keeps_every_record() {
        let json = r#"{
            "status": 200,
            "data": [
                {"id": 1, "title": "Parque Arví", "name_user": "Sara", "username": "sara",
                 "description": "Bosque", "image_base64": "https://cdn.example.com/arvi.jpg"},
                {"id": 2, "title": null, "name_user": "Pablo", "username": null,
                 "description": null}
            ]
        }"#;

        let response: ListImagesResponse = serde_json::from_str(json).unwrap();
        let Listing::Ready(records) = response.into_listing() else {
            panic!("expected a ready listing");
        };

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Parque Arví");
        assert_eq!(records[1].title, "");
        assert_eq!(records[1].author_name, "Pablo");
        assert_eq!(records[1].author_handle, "");
        assert_eq!(records[1].description, "");
        assert_eq!(records[1].image, ImageRef::Remote(String::new()));
    }

    #[test]
    fn test_listing_failure_status() {
        let response: ListImagesResponse =
            serde_json::from_str(r#"{"status": 404, "message": "not found"}"#).unwrap();

        assert_eq!(
            response.into_listing(),
            Listing::Unavailable {
                status: 404,
                message: Some("not found".to_string())
            }
        );
    }

    #[test]
    fn test_listing_success_without_data_is_unavailable() {
        let response: ListImagesResponse = serde_json::from_str(r#"{"status": 200}"#).unwrap();
        assert!(matches!(response.into_listing(), Listing::Unavailable { status: 200, .. }));
    }

    #[test]
    fn test_profile_url_strips_at_sign() {
        let record = ArtworkRecord {
            id: ArtworkId::Number(1),
            title: "Flor".to_string(),
            author_name: "Ana".to_string(),
            author_handle: "@ana_art".to_string(),
            description: String::new(),
            image: ImageRef::Remote(String::new()),
        };

        assert_eq!(record.handle(), "ana_art");
        assert_eq!(record.profile_url(), "https://www.instagram.com/ana_art");
    }

    #[test]
    fn test_create_response_status() {
        let ok = CreateImageResponse { status: 201, body: CreateImageBody::default() };
        let bad = CreateImageResponse { status: 413, body: CreateImageBody::default() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }

    #[test]
    fn test_server_error_display() {
        let err = AppError::Server { status: 500, message: Some("boom".to_string()) };
        assert_eq!(err.to_string(), "Server error (500): boom");
    }
}

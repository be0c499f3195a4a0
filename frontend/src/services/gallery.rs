//! HTTP client for the remote gallery service.
//!
//! Two operations:
//!
//! - `GET  {base}/gallery/g/images` - list artworks
//! - `POST {base}/gallery/p/image`  - create an artwork (multipart)

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::services::files::ImageFile;
use crate::state::DraftSubmission;
use crate::{AppError, AppResult, CreateImageBody, CreateImageResponse, ListImagesResponse};

/// The two operations the page needs from the gallery service.
#[allow(async_fn_in_trait)]
pub trait GalleryApi {
    type File: ImageFile;

    async fn list_images(&self) -> AppResult<ListImagesResponse>;

    /// Send the draft as a multipart form. Non-success statuses are
    /// returned as a response, not an error.
    async fn create_image(&self, draft: &DraftSubmission<Self::File>) -> AppResult<CreateImageResponse>;
}

/// Parse a create response body. An empty body is treated as no message.
pub fn parse_create_body(text: &str) -> AppResult<CreateImageBody> {
    if text.trim().is_empty() {
        return Ok(CreateImageBody::default());
    }
    serde_json::from_str(text).map_err(|e| AppError::Decode(format!("Failed to parse response: {}", e)))
}

/// [`GalleryApi`] over `fetch`, via gloo-net.
#[derive(Clone, Debug)]
pub struct HttpGalleryApi {
    base_url: String,
}

impl HttpGalleryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the endpoint matching the page's hostname.
    pub fn for_current_host() -> Self {
        let hostname = gloo_utils::window()
            .location()
            .hostname()
            .unwrap_or_default();
        let base_url = crate::config::api_base_url(&hostname);
        log::info!("🌐 Gallery service: {}", base_url);
        Self::new(base_url)
    }

    fn build_form(draft: &DraftSubmission<File>) -> AppResult<FormData> {
        let image = draft
            .image
            .as_ref()
            .ok_or_else(|| AppError::Validation("Selecciona una imagen".to_string()))?;

        let form_data = FormData::new().map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

        for (name, value) in draft.multipart_fields() {
            form_data
                .append_with_str(name, value)
                .map_err(|e| AppError::Network(format!("Failed to append {}: {:?}", name, e)))?;
        }

        form_data
            .append_with_blob_and_filename("image", &image.file, &image.file.name())
            .map_err(|e| AppError::Network(format!("Failed to append image: {:?}", e)))?;

        Ok(form_data)
    }
}

impl GalleryApi for HttpGalleryApi {
    type File = File;

    async fn list_images(&self) -> AppResult<ListImagesResponse> {
        let url = format!("{}/gallery/g/images", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        response
            .json::<ListImagesResponse>()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to parse gallery: {}", e)))
    }

    async fn create_image(&self, draft: &DraftSubmission<File>) -> AppResult<CreateImageResponse> {
        let form_data = Self::build_form(draft)?;

        let url = format!("{}/gallery/p/image", self.base_url);
        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        Ok(CreateImageResponse {
            status,
            body: parse_create_body(&text)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_body_with_message() {
        let body = parse_create_body(r#"{"status": 400, "message": "Imagen demasiado grande"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Imagen demasiado grande"));
    }

    #[test]
    fn test_parse_create_body_empty() {
        assert!(parse_create_body("  ").unwrap().message.is_none());
    }

    #[test]
    fn test_parse_create_body_html_is_decode_error() {
        let err = parse_create_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}

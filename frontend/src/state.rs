//! In-memory page state.
//!
//! Plain values with pure update functions. Components keep them inside
//! Leptos signals; nothing here touches the DOM, so it is tested natively.

use crate::{ArtworkId, ArtworkRecord};

// =============================================================================
// Gallery
// =============================================================================

/// Artwork list shown in the gallery section.
///
/// Starts empty and loading. Within a session the list only grows
/// ([`GalleryState::with_appended`]) or is replaced wholesale by a fresh
/// fetch ([`GalleryState::replaced_from`]).
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    artworks: Vec<ArtworkRecord>,
    loading: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            artworks: Vec::new(),
            loading: true,
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artworks(&self) -> &[ArtworkRecord] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Id for a record added locally: one past the current length.
    pub fn next_local_id(&self) -> ArtworkId {
        ArtworkId::Number(self.artworks.len() as u64 + 1)
    }

    /// Same state with `record` at the end of the list.
    pub fn with_appended(&self, record: ArtworkRecord) -> Self {
        let mut artworks = self.artworks.clone();
        artworks.push(record);
        Self {
            artworks,
            loading: self.loading,
        }
    }

    /// State holding exactly `records`, no longer loading.
    pub fn replaced_from(&self, records: Vec<ArtworkRecord>) -> Self {
        Self {
            artworks: records,
            loading: false,
        }
    }

    /// In-place [`GalleryState::with_appended`].
    pub fn append(&mut self, record: ArtworkRecord) {
        self.artworks.push(record);
    }
}

// =============================================================================
// Draft submission
// =============================================================================

/// Text fields of the upload form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    AuthorName,
    Title,
    AuthorHandle,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::AuthorName,
        DraftField::Title,
        DraftField::AuthorHandle,
        DraftField::Description,
    ];

    /// Multipart field name expected by the gallery service.
    pub fn form_name(&self) -> &'static str {
        match self {
            DraftField::AuthorName => "name_user",
            DraftField::Title => "title",
            DraftField::AuthorHandle => "username",
            DraftField::Description => "description",
        }
    }

    /// Label shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::AuthorName => "Nombre",
            DraftField::Title => "Título",
            DraftField::AuthorHandle => "Usuario de instagram",
            DraftField::Description => "Descripción",
        }
    }
}

/// A file accepted by the form together with its data-URL preview.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage<F> {
    pub file: F,
    /// `data:` URL, display only
    pub preview: String,
}

/// In-progress upload form state.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftSubmission<F> {
    pub author_name: String,
    pub title: String,
    pub author_handle: String,
    pub description: String,
    pub image: Option<SelectedImage<F>>,
}

impl<F> Default for DraftSubmission<F> {
    fn default() -> Self {
        Self {
            author_name: String::new(),
            title: String::new(),
            author_handle: String::new(),
            description: String::new(),
            image: None,
        }
    }
}

impl<F> DraftSubmission<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::AuthorName => &self.author_name,
            DraftField::Title => &self.title,
            DraftField::AuthorHandle => &self.author_handle,
            DraftField::Description => &self.description,
        }
    }

    /// Overwrite one text field. No cross-field validation.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::AuthorName => self.author_name = value,
            DraftField::Title => self.title = value,
            DraftField::AuthorHandle => self.author_handle = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Replace the selected image, dropping the previous one.
    pub fn attach_image(&mut self, image: SelectedImage<F>) {
        self.image = Some(image);
    }

    /// Remove both the file and its preview.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn preview(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.preview.as_str())
    }

    /// Text fields that are still blank.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    /// Text parts of the multipart payload, in form order.
    pub fn multipart_fields(&self) -> Vec<(&'static str, &str)> {
        DraftField::ALL
            .into_iter()
            .map(|field| (field.form_name(), self.field(field)))
            .collect()
    }

    /// Back to the empty initial draft.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Submission phase
// =============================================================================

/// `Idle → Submitting → Idle`; the outcome is reported as a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageRef;

    fn record(id: u64, title: &str) -> ArtworkRecord {
        ArtworkRecord {
            id: ArtworkId::Number(id),
            title: title.to_string(),
            author_name: "Ana".to_string(),
            author_handle: "ana_art".to_string(),
            description: "x".to_string(),
            image: ImageRef::Remote(format!("https://cdn.example.com/{}.jpg", id)),
        }
    }

    #[test]
    fn test_gallery_starts_loading_and_empty() {
        let gallery = GalleryState::new();
        assert!(gallery.is_loading());
        assert!(gallery.is_empty());
        assert_eq!(gallery.next_local_id(), ArtworkId::Number(1));
    }

    #[test]
    fn test_with_appended_keeps_original() {
        let gallery = GalleryState::new().replaced_from(vec![record(1, "Uno")]);
        let grown = gallery.with_appended(record(2, "Dos"));

        assert_eq!(gallery.len(), 1);
        assert_eq!(grown.len(), 2);
        assert_eq!(grown.artworks()[1].title, "Dos");
        assert!(!grown.is_loading());
    }

    #[test]
    fn test_replaced_from_discards_previous_records() {
        let gallery = GalleryState::new()
            .with_appended(record(1, "Local"))
            .replaced_from(vec![record(10, "Remota"), record(11, "Otra")]);

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.artworks()[0].title, "Remota");
        assert!(!gallery.is_loading());
    }

    #[test]
    fn test_append_while_loading_keeps_loading_flag() {
        let mut gallery = GalleryState::new();
        gallery.append(record(1, "Flor"));
        assert!(gallery.is_loading());
        assert_eq!(gallery.next_local_id(), ArtworkId::Number(2));
    }

    #[test]
    fn test_update_field_and_missing_fields() {
        let mut draft = DraftSubmission::<()>::new();
        assert_eq!(draft.missing_fields(), DraftField::ALL.to_vec());

        draft.update_field(DraftField::AuthorName, "Ana");
        draft.update_field(DraftField::Title, "Flor");
        draft.update_field(DraftField::Description, "   ");

        assert_eq!(draft.author_name, "Ana");
        assert_eq!(draft.title, "Flor");
        assert_eq!(
            draft.missing_fields(),
            vec![DraftField::AuthorHandle, DraftField::Description]
        );
    }

    #[test]
    fn test_multipart_fields_use_service_names() {
        let mut draft = DraftSubmission::<()>::new();
        draft.update_field(DraftField::AuthorName, "Ana");
        draft.update_field(DraftField::Title, "Flor");
        draft.update_field(DraftField::AuthorHandle, "ana_art");
        draft.update_field(DraftField::Description, "x");

        assert_eq!(
            draft.multipart_fields(),
            vec![
                ("name_user", "Ana"),
                ("title", "Flor"),
                ("username", "ana_art"),
                ("description", "x"),
            ]
        );
    }

    #[test]
    fn test_clear_image_and_clear() {
        let mut draft = DraftSubmission::new();
        draft.update_field(DraftField::Title, "Flor");
        draft.attach_image(SelectedImage {
            file: "flor.png",
            preview: "data:image/png;base64,AA==".to_string(),
        });
        assert_eq!(draft.preview(), Some("data:image/png;base64,AA=="));

        draft.clear_image();
        assert!(draft.image.is_none());
        assert_eq!(draft.title, "Flor");

        draft.clear();
        assert_eq!(draft, DraftSubmission::default());
    }
}

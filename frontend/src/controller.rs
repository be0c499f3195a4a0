//! Gallery loading and the upload form's submission flow.
//!
//! Async operations take snapshots and return outcomes; applying an outcome
//! to the live state is a separate synchronous step. Components await the
//! service outside of any signal borrow and then call [`SubmissionController::settle`]
//! or [`GalleryState::replaced_from`] on the current values.

use std::rc::Rc;

use crate::services::files::{validate_image, ImageFile};
use crate::services::gallery::GalleryApi;
use crate::services::storage::GateStore;
use crate::state::{DraftSubmission, GalleryState, SelectedImage};
use crate::{AppError, AppResult, ArtworkRecord, ImageRef, Listing, Notification};

const SUCCESS_MESSAGE: &str = "Obra subida correctamente";
const FAILURE_MESSAGE: &str = "Error al subir la obra";

/// What happened to a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The service stored the artwork.
    Accepted,
    /// The draft was incomplete; nothing was sent.
    Incomplete(AppError),
    /// The service answered with a non-success status.
    Rejected { status: u16, message: Option<String> },
    /// Transport or decoding failure.
    Failed(AppError),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }

    /// Notification shown for this outcome.
    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Accepted => Notification::success(SUCCESS_MESSAGE),
            SubmitOutcome::Incomplete(err) => Notification::error(err.user_message()),
            SubmitOutcome::Rejected {
                message: Some(message),
                ..
            } => Notification::error(format!("{}: {}", FAILURE_MESSAGE, message)),
            SubmitOutcome::Rejected { message: None, .. } | SubmitOutcome::Failed(_) => {
                Notification::error(FAILURE_MESSAGE)
            }
        }
    }
}

/// Owns the gallery service client and the submission gate.
pub struct SubmissionController<A, S> {
    api: A,
    gate: S,
}

impl<A, S> SubmissionController<A, S>
where
    A: GalleryApi,
    S: GateStore,
{
    pub fn new(api: A, gate: S) -> Self {
        Self { api, gate }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Whether this browser already submitted an artwork.
    pub fn already_submitted(&self) -> bool {
        self.gate.is_set()
    }

    /// Clear the gate so the form is shown again.
    pub fn allow_new_upload(&self) -> AppResult<()> {
        log::info!("🔓 Submission gate cleared");
        self.gate.clear()
    }

    /// Fetch the listing. `None` leaves the gallery as it is.
    pub async fn load(&self) -> Option<Vec<ArtworkRecord>> {
        let response = match self.api.list_images().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Error fetching gallery data: {}", e);
                return None;
            }
        };

        match response.into_listing() {
            Listing::Ready(records) => {
                log::info!("🖼️ Gallery loaded: {} artworks", records.len());
                Some(records)
            }
            Listing::Unavailable { status, message } => {
                log::warn!("⚠️ Gallery unavailable: {}", AppError::Server { status, message });
                None
            }
        }
    }

    /// Validate `file` and derive its preview.
    ///
    /// Nothing is stored here; on success the caller attaches the returned
    /// image to the draft.
    pub async fn select_file(&self, file: A::File) -> AppResult<SelectedImage<A::File>> {
        validate_image(&file)?;
        let preview = file.data_url().await?;
        log::debug!("📎 Selected {} ({})", file.name(), file.mime_type());
        Ok(SelectedImage { file, preview })
    }

    /// Send `draft` to the gallery service.
    pub async fn submit(&self, draft: &DraftSubmission<A::File>) -> SubmitOutcome {
        if let Some(field) = draft.missing_fields().first() {
            return SubmitOutcome::Incomplete(AppError::Validation(format!(
                "El campo \"{}\" es obligatorio",
                field.label()
            )));
        }
        if draft.image.is_none() {
            return SubmitOutcome::Incomplete(AppError::Validation("Selecciona una imagen".to_string()));
        }

        log::info!("📤 Uploading \"{}\" by {}", draft.title, draft.author_name);

        match self.api.create_image(draft).await {
            Ok(response) if response.is_success() => SubmitOutcome::Accepted,
            Ok(response) => {
                log::warn!("⚠️ Upload rejected with status {}", response.status);
                SubmitOutcome::Rejected {
                    status: response.status,
                    message: response.body.message,
                }
            }
            Err(e) => {
                log::error!("❌ Error al subir la obra: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Apply `outcome` to the live draft and gallery.
    ///
    /// On acceptance the gate is set, the draft's content is appended to the
    /// gallery with a local image reference, and the draft is cleared. Any
    /// other outcome leaves both untouched.
    pub fn settle(
        &self,
        outcome: &SubmitOutcome,
        draft: &mut DraftSubmission<A::File>,
        gallery: &mut GalleryState,
    ) -> Notification {
        if !outcome.is_accepted() {
            return outcome.notification();
        }

        if let Err(e) = self.gate.set() {
            log::warn!("⚠️ {}", e);
        }

        if let Some(record) = local_record(draft, gallery) {
            gallery.append(record);
        }
        draft.clear();

        outcome.notification()
    }
}

/// Record for a just-submitted draft, shown before the next fetch.
fn local_record<F: ImageFile>(draft: &DraftSubmission<F>, gallery: &GalleryState) -> Option<ArtworkRecord> {
    let selected = draft.image.as_ref()?;

    let image = match selected.file.object_url() {
        Ok(url) => ImageRef::Local(Rc::new(url)),
        Err(e) => {
            log::warn!("⚠️ {}, using preview instead", e);
            ImageRef::Remote(selected.preview.clone())
        }
    };

    Some(ArtworkRecord {
        id: gallery.next_local_id(),
        title: draft.title.clone(),
        author_name: draft.author_name.clone(),
        author_handle: draft.author_handle.clone(),
        description: draft.description.clone(),
        image,
    })
}

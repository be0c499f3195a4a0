//! Artflow Medellín - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page site for the virtual youth art gallery of
//! Medellín: browse the gallery and share one artwork per browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (in-page navigation)                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (showcase, headline)                              │
//! │  ├── GallerySection (loading spinner or artwork grid)       │
//! │  ├── UploadSection or ThankYou (submission gate)            │
//! │  └── About                                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ArtworkRecord, Notification, API schemas, errors)
//! - [`state`] - Gallery and draft state with pure update functions
//! - [`controller`] - Gallery loading and the submission flow
//! - [`components`] - UI components (Header, Gallery, Upload, etc.)
//! - [`services`] - Gallery service client, file handling, local storage

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Gallery
    ArtworkId, ArtworkRecord, ImageRef, ObjectUrl,
    // Notifications
    Notification, NotificationLevel,
    // API
    CreateImageBody, CreateImageResponse, ListImagesResponse, Listing, RemoteArtwork,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

pub use controller::{SubmissionController, SubmitOutcome};

/// Controller wired to the browser: HTTP gallery service and `localStorage`.
pub type AppController = SubmissionController<HttpGalleryApi, LocalStorageGate>;

// =============================================================================
// Application
// =============================================================================

/// Root component, mounted by `main.rs`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Artflow Medellín"/>
        <Meta
            name="description"
            content="Galería de arte virtual de Medellín: descubre y comparte arte y cultura de la ciudad."
        />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let controller = Rc::new(AppController::new(
        HttpGalleryApi::for_current_host(),
        LocalStorageGate::open(),
    ));

    // Page state
    let gallery = create_rw_signal(state::GalleryState::new());
    let (has_uploaded, set_has_uploaded) = create_signal(controller.already_submitted());
    let (selected, set_selected) = create_signal(None::<ArtworkRecord>);
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());

    // Fetch the listing ONCE on mount
    {
        let controller = controller.clone();
        spawn_local(async move {
            if let Some(records) = controller.load().await {
                gallery.update(|g| *g = g.replaced_from(records));
            }
        });
    }

    let upload_controller = controller.clone();

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <GallerySection gallery=gallery set_selected=set_selected/>

            // Upload form until this browser has submitted once
            <Show
                when=move || has_uploaded.get()
                fallback=move || view! {
                    <UploadSection
                        controller=upload_controller.clone()
                        gallery=gallery
                        set_has_uploaded=set_has_uploaded
                        set_toasts=set_toasts
                    />
                }
            >
                <ThankYou
                    controller=controller.clone()
                    set_has_uploaded=set_has_uploaded
                    set_toasts=set_toasts
                />
            </Show>

            <About/>
        </div>

        <Footer/>

        <ArtworkDialog selected=selected set_selected=set_selected/>
        <Toaster toasts=toasts set_toasts=set_toasts/>
    }
}

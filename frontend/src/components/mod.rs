//! UI Components for the Artflow application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with in-page anchors
//! - [`Hero`] - Animated showcase and headline
//! - [`About`] - Project description
//! - [`Footer`] - Page footer and social links
//!
//! # Feature Components
//! - [`GallerySection`] - Artwork grid with loading state
//! - [`ArtworkDialog`] - Detail view of a single artwork
//! - [`UploadSection`] - Artwork upload form
//! - [`ThankYou`] - Shown instead of the form once this browser submitted
//! - [`Toaster`] - Stacked notifications

mod header;
mod hero;
mod gallery;
mod upload;
mod about;
mod footer;
mod toaster;

pub use header::*;
pub use hero::*;
pub use gallery::*;
pub use upload::*;
pub use about::*;
pub use footer::*;
pub use toaster::*;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll the element with `id` into view, if present.
pub fn scroll_to_section(id: &str) {
    match gloo_utils::document().get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("No #{} section to scroll to", id),
    }
}

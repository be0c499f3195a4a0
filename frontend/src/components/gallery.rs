//! Artwork grid and detail dialog.

use leptos::*;

use crate::state::GalleryState;
use crate::ArtworkRecord;

/// Shown when a record has no usable image.
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn image_src(artwork: &ArtworkRecord) -> String {
    let src = artwork.image.src();
    if src.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        src
    }
}

#[component]
pub fn GallerySection(
    gallery: RwSignal<GalleryState>,
    /// Opens the detail dialog
    set_selected: WriteSignal<Option<ArtworkRecord>>,
) -> impl IntoView {
    view! {
        <section id="gallery" class="gallery">
            <h3>"Obras de arte destacadas"</h3>
            <p class="section-subtitle">
                "Descubre la creatividad, el arte y la cultura del talento artistico de Medellín."
            </p>

            <Show
                when=move || !gallery.with(GalleryState::is_loading)
                fallback=|| view! {
                    <div class="gallery-loading">
                        <div class="spinner" aria-label="Cargando galería"></div>
                    </div>
                }
            >
                <div class="gallery-grid">
                    <For
                        each=move || gallery.with(|g| g.artworks().to_vec()).into_iter().enumerate()
                        key=|(idx, artwork)| (*idx, artwork.id.clone())
                        children=move |(idx, artwork)| view! {
                            <ArtworkCard artwork=artwork index=idx set_selected=set_selected/>
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn ArtworkCard(
    artwork: ArtworkRecord,
    /// Position in the grid, staggers the entry animation
    index: usize,
    set_selected: WriteSignal<Option<ArtworkRecord>>,
) -> impl IntoView {
    let src = image_src(&artwork);
    let title = artwork.title.clone();
    let author = format!("by {}", artwork.author_name);
    let handle = format!("@{}", artwork.handle());
    let profile = artwork.profile_url();

    view! {
        <div
            class="artwork-card"
            style=format!("animation-delay: {}ms", index * 100)
            on:click=move |_| set_selected.set(Some(artwork.clone()))
        >
            <div class="artwork-image">
                <img src=src alt=title.clone()/>
            </div>
            <div class="artwork-body">
                <h4 class="artwork-title">{title}</h4>
                <p class="artwork-author">{author}</p>
                <a
                    href=profile
                    target="_blank"
                    class="artwork-handle"
                    on:click=|ev| ev.stop_propagation()
                >
                    {handle}
                </a>
            </div>
        </div>
    }
}

/// Detail view of the selected artwork.
///
/// Closes on the close button, a click on the backdrop or Escape.
#[component]
pub fn ArtworkDialog(
    selected: ReadSignal<Option<ArtworkRecord>>,
    set_selected: WriteSignal<Option<ArtworkRecord>>,
) -> impl IntoView {
    let close = move || set_selected.set(None);

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        {move || selected.get().map(|artwork| {
            let src = image_src(&artwork);
            view! {
                <div class="dialog-backdrop" on:click=move |_| close()>
                    <div
                        class="dialog"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="dialog-header">
                            <h3 class="dialog-title">{artwork.title.clone()}</h3>
                            <button class="dialog-close" title="Cerrar" on:click=move |_| close()>
                                "✕"
                            </button>
                        </div>
                        <div class="dialog-image">
                            <img src=src alt=artwork.title.clone()/>
                        </div>
                        <p class="artwork-author">"by " {artwork.author_name.clone()}</p>
                        <p class="dialog-description">{artwork.description.clone()}</p>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArtworkId, ImageRef};

    #[test]
    fn test_empty_image_uses_placeholder() {
        let mut artwork = ArtworkRecord {
            id: ArtworkId::Number(1),
            title: "Sin imagen".to_string(),
            author_name: "Ana".to_string(),
            author_handle: "ana_art".to_string(),
            description: String::new(),
            image: ImageRef::Remote(String::new()),
        };
        assert_eq!(image_src(&artwork), PLACEHOLDER_IMAGE);

        artwork.image = ImageRef::Remote("https://cdn.example.com/1.jpg".to_string());
        assert_eq!(image_src(&artwork), "https://cdn.example.com/1.jpg");
    }
}

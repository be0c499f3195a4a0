//! Hero section component

use leptos::*;

use super::scroll_to_section;

/// Images of the scrolling background grid.
const SHOWCASE_IMAGES: &[&str] = &[
    "/colorful-abstract-painting-medellin-streets.jpg",
    "/mountain-landscape-sunrise-painting.jpg",
    "/urban-abstract-art-colorful.jpg",
    "/watercolor-flowers-tropical.jpg",
    "/geometric-metro-train-modern-art.jpg",
    "/cultural-mosaic-colorful-art.jpg",
];

/// Copies of the grid laid side by side so the scroll loops seamlessly.
const SHOWCASE_REPEATS: usize = 4;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop">
                <div class="hero-track">
                    {(0..SHOWCASE_REPEATS)
                        .map(|_| view! {
                            <div class="hero-grid">
                                {SHOWCASE_IMAGES
                                    .iter()
                                    .map(|&src| view! {
                                        <div class="hero-tile">
                                            <img src=src alt=""/>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="hero-shade"></div>
            </div>

            <div class="hero-content">
                <h2>
                    "Galería de Arte Virtual"
                    <br/>
                    <span class="hero-accent">"de Medellín"</span>
                </h2>
                <p class="subtitle">
                    "Un espacio donde el arte y la cultura cobra vida digitalmente."
                </p>
                <button class="btn btn-primary" on:click=move |_| scroll_to_section("gallery")>
                    "Explorar Galería"
                </button>
            </div>
        </section>
    }
}

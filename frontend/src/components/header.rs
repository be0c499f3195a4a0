use leptos::*;

/// In-page navigation targets, as `(anchor, label)`.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Inicio"),
    ("#gallery", "Galleria"),
    ("#upload", "Subir Arte"),
    ("#about", "Acerca de"),
    ("#contact", "Contacto"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <nav class="header-nav">
                <a href="#home" class="logo">
                    <h1>
                        "Artflow "
                        <img class="logo-mark" src="/favicon.png" alt=""/>
                        <span class="logo-tail">"edellín"</span>
                    </h1>
                </a>
                <div class="header-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| view! { <a href=href class="header-link">{label}</a> })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}

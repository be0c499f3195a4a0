//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact">
            <h4 class="footer-title">"Artflow Medellín"</h4>
            <div class="footer-note">"From Medellín • All rights reserved"</div>
            <div class="footer-note">
                "Created for "
                <a href="https://my-portfolio-pink-beta-50.vercel.app" class="footer-link" target="_blank">
                    "Daniel Muñoz"
                </a>
            </div>
            <div class="footer-links">
                <a href="https://www.instagram.com/dhmunoz05" class="footer-link" target="_blank">
                    "Instagram"
                </a>
                <a href="https://www.facebook.com/dahnidev" class="footer-link" target="_blank">
                    "Facebook"
                </a>
            </div>
        </footer>
    }
}

use leptos::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h3>"Acerca de nuestra galería"</h3>
            <p>
                "La Galería Virtual de Arte Juvenil de Medellín es una plataforma digital dedicada a promover "
                "la creatividad, la inclusión y la comunidad a través del arte local. Creemos que todo joven "
                "artista merece un espacio para compartir su visión con el mundo."
            </p>
            <p>
                "Desde niños hasta adultos, todos son bienvenidos a subir y compartir obras de arte y cultura "
                "de la ciudad. ¡Únete a nosotros para celebrar el vibrante espíritu artístico de Medellín!"
            </p>
        </section>
    }
}

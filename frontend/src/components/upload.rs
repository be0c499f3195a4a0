//! Artwork upload form.
//!
//! Handles field input, image selection with preview, and submission to the
//! gallery service. Once this browser has submitted, [`ThankYou`] is shown
//! instead.

use std::rc::Rc;

use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use super::{push_toast, scroll_to_section, Toast};
use crate::state::{DraftField, DraftSubmission, GalleryState, SubmissionPhase};
use crate::{AppController, Notification};

type Draft = RwSignal<DraftSubmission<File>>;

#[component]
pub fn UploadSection(
    controller: Rc<AppController>,
    gallery: RwSignal<GalleryState>,
    set_has_uploaded: WriteSignal<bool>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let draft: Draft = create_rw_signal(DraftSubmission::new());
    let (phase, set_phase) = create_signal(SubmissionPhase::Idle);

    // File picked: validate, then attach with its preview
    let on_file_change = {
        let controller = controller.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Let the same file be picked again after a rejection
            input.set_value("");

            let controller = controller.clone();
            spawn_local(async move {
                match controller.select_file(file).await {
                    Ok(image) => draft.update(|d| d.attach_image(image)),
                    Err(e) => push_toast(set_toasts, Notification::error(e.user_message())),
                }
            });
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }

        let mut submitted = draft.get_untracked();
        set_phase.set(SubmissionPhase::Submitting);

        let controller = controller.clone();
        spawn_local(async move {
            let outcome = controller.submit(&submitted).await;

            let mut notification = None;
            gallery.update(|g| notification = Some(controller.settle(&outcome, &mut submitted, g)));
            set_phase.set(SubmissionPhase::Idle);

            if let Some(notification) = notification {
                push_toast(set_toasts, notification);
            }

            if outcome.is_accepted() {
                draft.update(DraftSubmission::clear);
                set_has_uploaded.set(true);
                scroll_to_section("gallery");
            }
        });
    };

    view! {
        <section id="upload" class="upload-section">
            <h3>"Comparte arte y cultura"</h3>
            <p class="section-subtitle">
                "Sube tus obras de arte de tu comuna y forma parte de nuestra red creativa."
            </p>

            <form class="upload-form" on:submit=on_submit>
                <DraftInput draft=draft field=DraftField::AuthorName placeholder="Pon tu nombre"/>
                <DraftInput draft=draft field=DraftField::Title placeholder="Pon un titulo a la fotografía"/>
                <DraftInput
                    draft=draft
                    field=DraftField::AuthorHandle
                    placeholder="Pon tu usuario de instagram"
                />
                <DraftInput
                    draft=draft
                    field=DraftField::Description
                    placeholder="Escribe información sobre tu fotografía"
                    multiline=true
                />

                <div class="form-field">
                    <label for="image">"Imagen"</label>
                    <Show
                        when=move || draft.with(|d| d.preview().is_some())
                        fallback=move || view! {
                            <div class="upload-drop">
                                <div class="upload-icon">"📤"</div>
                                <input
                                    type="file"
                                    id="image"
                                    accept="image/png, image/jpg, image/jpeg, image/webp"
                                    style="display:none"
                                    on:change=on_file_change.clone()
                                />
                                <label for="image" class="upload-button">
                                    "Click para subir o arrastrar"
                                </label>
                                <div class="upload-hint">"Formatos: PNG, JPG, JPEG, WEBP (máx. 10MB)"</div>
                            </div>
                        }
                    >
                        <div class="upload-preview">
                            <img
                                src=move || draft.with(|d| d.preview().unwrap_or_default().to_string())
                                alt="Vista previa"
                            />
                            <button
                                type="button"
                                class="upload-preview-remove"
                                title="Eliminar imagen"
                                on:click=move |_| draft.update(DraftSubmission::clear_image)
                            >
                                "✕"
                            </button>
                        </div>
                    </Show>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary upload-submit"
                    disabled=move || phase.get().is_submitting()
                >
                    {move || if phase.get().is_submitting() { "⏳ Subiendo..." } else { "Subir Obra" }}
                </button>
            </form>
        </section>
    }
}

/// One required text field bound to the draft.
#[component]
fn DraftInput(
    draft: Draft,
    field: DraftField,
    placeholder: &'static str,
    /// Render a textarea instead of a single-line input
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let id = field.form_name();
    let value = move || draft.with(|d| d.field(field).to_string());
    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        draft.update(|d| d.update_field(field, text));
    };

    view! {
        <div class="form-field">
            <label for=id>{field.label()}</label>
            {if multiline {
                view! {
                    <textarea id=id placeholder=placeholder required prop:value=value on:input=on_input></textarea>
                }
                .into_view()
            } else {
                view! {
                    <input id=id type="text" placeholder=placeholder required prop:value=value on:input=on_input/>
                }
                .into_view()
            }}
        </div>
    }
}

/// Replaces the form once an artwork was submitted from this browser.
#[component]
pub fn ThankYou(
    controller: Rc<AppController>,
    set_has_uploaded: WriteSignal<bool>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let on_allow = move |_| match controller.allow_new_upload() {
        Ok(()) => set_has_uploaded.set(false),
        Err(e) => push_toast(set_toasts, Notification::error(e.user_message())),
    };

    view! {
        <section id="upload" class="thank-you">
            <h2>"🎨 ¡Gracias por compartir!"</h2>
            <p>
                "Solo puedes subir una obra por usuario, pero puedes explorar la galería "
                "y disfrutar del arte de otros."
            </p>
            <button class="btn btn-secondary" on:click=on_allow>
                "Permitir nueva subida"
            </button>
        </section>
    }
}

//! Stacked notifications.
//!
//! Toasts expire after [`TOAST_DURATION_MS`] and can be dismissed by click.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};
use crate::{Notification, NotificationLevel};

/// A notification on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

/// Show `notification` and schedule its removal.
pub fn push_toast(set_toasts: WriteSignal<Vec<Toast>>, notification: Notification) {
    match notification.level {
        NotificationLevel::Error => log::warn!("{}", notification.message),
        NotificationLevel::Success => log::info!("{}", notification.message),
    }

    let id = rand::random::<u32>();
    let toast = Toast {
        id,
        notification,
        timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
    };

    set_toasts.update(|toasts| {
        toasts.push(toast);
        if toasts.len() > MAX_TOASTS {
            toasts.remove(0);
        }
    });

    Timeout::new(TOAST_DURATION_MS, move || dismiss_toast(set_toasts, id)).forget();
}

fn dismiss_toast(set_toasts: WriteSignal<Vec<Toast>>, id: u32) {
    set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
}

#[component]
pub fn Toaster(
    /// Signal for toasts on screen
    toasts: ReadSignal<Vec<Toast>>,
    /// Set toasts signal (for dismissing)
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.notification.level.css_class())
                            on:click=move |_| dismiss_toast(set_toasts, id)
                        >
                            <span class="toast-time">{toast.timestamp}</span>
                            <span class="toast-message">{toast.notification.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

// =============================================================================
// Portfolio Web - Toaster
// =============================================================================
// Renders the toast queue provided by `App`
// =============================================================================

use leptos::prelude::*;

use crate::services::notifications::ToastQueue;

/// Fixed viewport that shows queued toasts, newest last.
#[component]
pub fn Toaster() -> impl IntoView {
    let queue = expect_context::<ToastQueue>();

    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For
                each=move || queue.entries()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=entry.toast.variant.class()>
                            <div class="toast-content">
                                <p class="toast-title">{entry.toast.title}</p>
                                <p class="toast-description">{entry.toast.description}</p>
                            </div>
                            <button
                                type="button"
                                class="toast-close"
                                on:click=move |_| queue.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

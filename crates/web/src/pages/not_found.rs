// =============================================================================
// Portfolio Web - Not Found Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

/// Fallback for unknown routes; points back at the contact section.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <Title text="Not Found | Rahul Singh Rawat" />
        <div class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <p class="contact-subtitle">
                    {">"} " cd " {move || location.pathname.get()} ": no such page"
                </p>
                <a href="/#contact" class="btn btn-primary">
                    "RETURN_TO_CONTACT"
                </a>
            </div>
        </div>
    }
}

// =============================================================================
// Portfolio Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Toaster;
use crate::config::SiteConfig;
use crate::pages::{ContactPage, NotFoundPage};
use crate::services::notifications::ToastQueue;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide site config and the toast queue to every page
    let config = SiteConfig::new();
    log::debug!("Form endpoint: {}", config.form_endpoint);
    provide_context(config);
    provide_context(ToastQueue::new());

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=ContactPage />
                <Route path=path!("/contact") view=ContactPage />
            </Routes>
            <Toaster />
        </Router>
    }
}

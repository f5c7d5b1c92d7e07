// =============================================================================
// Portfolio Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use portfolio_web::App;

fn main() {
    portfolio_web::init_logging();

    log::info!("Starting portfolio web...");

    // Mount the Leptos app to the body
    leptos::mount::mount_to_body(App);
}

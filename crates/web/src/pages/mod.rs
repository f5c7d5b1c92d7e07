// =============================================================================
// Portfolio Web - Page Components
// =============================================================================

pub mod contact;
pub mod not_found;

pub use contact::{ContactPage, ContactSection};
pub use not_found::NotFoundPage;

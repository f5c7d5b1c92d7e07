// =============================================================================
// Portfolio Web - Browser Services
// =============================================================================

pub mod download;
pub mod notifications;

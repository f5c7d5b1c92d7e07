// =============================================================================
// Portfolio Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Error Types
// =============================================================================

pub mod contact;

pub use contact::*;

use thiserror::Error;

// -----------------------------------------------------------------------------
// 3. Error Types
// -----------------------------------------------------------------------------

/// Failures that happen before a response status is known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request build error: {0}")]
    Request(String),

    #[error("Serialization error: {0}")]
    Encode(String),
}

// =============================================================================
// Portfolio Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Common Components
// 2. Form Components
// 3. Toasts
// =============================================================================

pub mod common;
pub mod forms;
pub mod toast;

pub use common::{Button, ButtonVariant, Card, IconImage};
pub use forms::{TextArea, TextInput};
pub use toast::Toaster;

// =============================================================================
// Portfolio Web - Contact Form State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Form Fields
// 3. Form State
// 4. Submission Latch
// 5. Tests
// =============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::api::SubmissionOutcome;

// -----------------------------------------------------------------------------
// 2. Form Fields
// -----------------------------------------------------------------------------

/// One of the three editable contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// The input element `name` attribute for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Form State
// -----------------------------------------------------------------------------

/// Draft of the contact message. Serializes to the form service payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    /// Current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Update the draft after a submission attempt.
    ///
    /// Only a confirmed success clears the draft; on failure the user keeps
    /// what they typed so they can retry.
    pub fn settle(&mut self, outcome: SubmissionOutcome) {
        if outcome.is_success() {
            self.clear();
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Submission Latch
// -----------------------------------------------------------------------------

/// Allows at most one contact submission in flight at a time.
#[derive(Clone, Debug, Default)]
pub struct SubmissionLatch {
    in_flight: Arc<AtomicBool>,
}

impl SubmissionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the latch. Returns `None` if a submission is already running.
    pub fn try_acquire(&self) -> Option<LatchGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LatchGuard {
                in_flight: Arc::clone(&self.in_flight),
            })
    }
}

/// Releases the latch on drop.
#[derive(Debug)]
pub struct LatchGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for LatchGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

// -----------------------------------------------------------------------------
// 5. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let mut form = FormState::default();

        for (field, value) in [
            (FormField::Name, "R"),
            (FormField::Email, "r@"),
            (FormField::Name, "Ra"),
            (FormField::Message, "Hello"),
            (FormField::Email, "r@x.io"),
            (FormField::Name, "Rahul"),
        ] {
            form.set(field, value);
        }

        assert_eq!(form.get(FormField::Name), "Rahul");
        assert_eq!(form.get(FormField::Email), "r@x.io");
        assert_eq!(form.get(FormField::Message), "Hello");
    }

    #[test]
    fn test_settle() {
        let mut form = filled();
        form.settle(SubmissionOutcome::ServerRejected);
        assert_eq!(form, filled());

        form.settle(SubmissionOutcome::TransportError);
        assert_eq!(form, filled());

        form.settle(SubmissionOutcome::Success);
        assert!(form.is_empty());
    }

    #[test]
    fn test_payload_keys() {
        let json = serde_json::to_value(filled()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["name"], "A");
        assert_eq!(object["email"], "a@b.com");
        assert_eq!(object["message"], "hi");
    }

    #[test]
    fn test_latch() {
        let latch = SubmissionLatch::new();

        let guard = latch.try_acquire().expect("first acquire");
        assert!(latch.try_acquire().is_none());

        // Clones share the same flag
        assert!(latch.clone().try_acquire().is_none());

        drop(guard);
        assert!(latch.try_acquire().is_some());
    }
}

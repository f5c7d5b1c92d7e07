// =============================================================================
// Portfolio Web - Toast Notifications Service
// =============================================================================
// Handles the in-page toast queue used to report contact outcomes
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

/// Maximum number of toasts on screen at once.
pub const TOAST_LIMIT: usize = 3;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

/// A single user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Anything that can surface a toast to the user. Fire-and-forget.
pub trait NotificationSink {
    fn notify(&self, toast: Toast);
}

/// A toast with the id used to dismiss it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: Uuid,
    pub toast: Toast,
}

/// Push an entry, dropping the oldest ones past `limit`.
pub fn push_bounded(entries: &mut Vec<ToastEntry>, entry: ToastEntry, limit: usize) {
    entries.push(entry);
    if entries.len() > limit {
        let excess = entries.len() - limit;
        entries.drain(..excess);
    }
}

/// Toast queue provided via Leptos context.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    entries: RwSignal<Vec<ToastEntry>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
        }
    }

    /// Reactive view of the visible toasts.
    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.get()
    }

    /// Remove a toast by id.
    pub fn dismiss(&self, id: Uuid) {
        self.entries.update(|entries| entries.retain(|e| e.id != id));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, toast: Toast) {
        let entry = ToastEntry {
            id: Uuid::new_v4(),
            toast,
        };
        let id = entry.id;

        self.entries
            .update(|entries| push_bounded(entries, entry, TOAST_LIMIT));

        let queue = *self;
        Timeout::new(TOAST_DURATION_MS, move || queue.dismiss(id)).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> ToastEntry {
        ToastEntry {
            id: Uuid::new_v4(),
            toast: Toast::new(title, ""),
        }
    }

    #[test]
    fn test_variants() {
        assert_eq!(Toast::new("t", "d").variant, ToastVariant::Default);
        assert_eq!(Toast::destructive("t", "d").variant, ToastVariant::Destructive);
        assert!(ToastVariant::Destructive.class().contains("toast-destructive"));
    }

    #[test]
    fn test_push_bounded_drops_oldest() {
        let mut entries = Vec::new();
        for title in ["a", "b", "c", "d", "e"] {
            push_bounded(&mut entries, entry(title), TOAST_LIMIT);
        }

        let titles: Vec<_> = entries.iter().map(|e| e.toast.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "d", "e"]);
    }

    #[test]
    fn test_push_bounded_under_limit() {
        let mut entries = Vec::new();
        push_bounded(&mut entries, entry("a"), TOAST_LIMIT);
        push_bounded(&mut entries, entry("b"), TOAST_LIMIT);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].toast.title, "a");
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let queue = ToastQueue::new();
        let (a, b) = (entry("a"), entry("b"));
        let a_id = a.id;

        queue.entries.update(|entries| {
            push_bounded(entries, a, TOAST_LIMIT);
            push_bounded(entries, b, TOAST_LIMIT);
        });
        queue.dismiss(a_id);

        let titles: Vec<_> = queue.entries().into_iter().map(|e| e.toast.title).collect();
        assert_eq!(titles, vec!["b".to_string()]);

        // Dismissing an id that is already gone is a no-op
        queue.dismiss(a_id);
        assert_eq!(queue.entries().len(), 1);
    }
}

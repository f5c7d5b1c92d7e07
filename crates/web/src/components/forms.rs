// =============================================================================
// Portfolio Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// =============================================================================

use leptos::prelude::*;

use crate::state::{FormField, FormState};

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Single-line input bound to one field of the contact draft.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    field: FormField,
    form: RwSignal<FormState>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <input
                type=input_type
                name=field.as_str()
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |e| {
                    form.update(|f| f.set(field, event_target_value(&e)));
                }
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area bound to one field of the contact draft.
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    field: FormField,
    form: RwSignal<FormState>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };

    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <textarea
                name=field.as_str()
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |e| {
                    form.update(|f| f.set(field, event_target_value(&e)));
                }
            />
        </div>
    }
}

// =============================================================================
// Portfolio Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Icon
// 2. Button
// 3. Card
// =============================================================================

use leptos::prelude::*;

use crate::content::Icon;

// -----------------------------------------------------------------------------
// 1. Icon
// -----------------------------------------------------------------------------

/// Inline SVG icon from the asset folder.
#[component]
pub fn IconImage(
    icon: Icon,
    #[prop(optional, into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <img src=icon.src() alt=alt class=format!("icon {}", class) />
    }
}

// -----------------------------------------------------------------------------
// 2. Button
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Accent,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Accent => "btn btn-accent",
        }
    }
}

/// Reusable button component.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };
    let handle_click = move |_| {
        if let Some(callback) = &on_click {
            callback.run(());
        }
    };

    view! {
        <button
            type=button_type
            class=variant.class()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=handle_click
        >
            {children()}
        </button>
    }
}

// -----------------------------------------------------------------------------
// 3. Card
// -----------------------------------------------------------------------------

/// Card container with an icon title and a prompt-style subtitle.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    icon: Icon,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            <div class="card-header">
                <h3 class="card-title">
                    <IconImage icon=icon alt=title.clone() class="card-title-icon" />
                    {title.clone()}
                </h3>
                {subtitle.map(|s| view! { <p class="card-subtitle">{">"} " " {s}</p> })}
            </div>
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}

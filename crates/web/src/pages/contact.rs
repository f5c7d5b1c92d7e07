// =============================================================================
// Portfolio Web - Contact Page
// =============================================================================
// Table of Contents:
// 1. Page
// 2. Contact Section
// 3. Contact Details
// 4. Social Links
// =============================================================================

use futures::future::AbortHandle;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::{run_submission, GlooTransport, SubmissionTicket};
use crate::components::{Button, ButtonVariant, Card, IconImage, TextArea, TextInput};
use crate::config::SiteConfig;
use crate::content::{ContactAction, ContactInfoEntry, Icon, SocialLinkEntry, CONTACT_INFO, SOCIAL_LINKS};
use crate::services::download::{start_resume_download, DomAnchorDownloader};
use crate::services::notifications::ToastQueue;
use crate::state::{FormField, FormState, SubmissionLatch};
use crate::utils::open_in_new_tab;

// -----------------------------------------------------------------------------
// 1. Page
// -----------------------------------------------------------------------------

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact | Rahul Singh Rawat" />
        <div class="page page-contact">
            <ContactSection />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Contact Section
// -----------------------------------------------------------------------------

/// Contact form, resume download, and static contact details.
#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<ToastQueue>();

    // Draft lives as long as this section
    let form = RwSignal::new(FormState::default());
    let latch = SubmissionLatch::new();
    let pending = RwSignal::new(None::<AbortHandle>);
    let submitting = Signal::derive(move || pending.with(Option::is_some));

    // A submission still in flight when the section unmounts is dropped
    // without a toast or a draft update.
    on_cleanup(move || {
        if let Some(handle) = pending.try_get_untracked().flatten() {
            handle.abort();
        }
    });

    let endpoint = config.form_endpoint.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some((ticket, handle)) = SubmissionTicket::claim(&latch) else {
            log::debug!("Contact submission already in flight, ignoring submit");
            return;
        };

        let snapshot = form.get_untracked();
        let endpoint = endpoint.clone();
        pending.set(Some(handle));

        spawn_local(async move {
            run_submission(ticket, &GlooTransport, &toasts, &endpoint, &snapshot, |outcome| {
                form.try_update(|f| f.settle(outcome));
            })
            .await;
            pending.try_set(None);
        });
    };

    let resume = config.resume.clone();
    let on_download = Callback::new(move |_| {
        start_resume_download(&toasts, &DomAnchorDownloader, &resume);
    });

    view! {
        <section id="contact" class="contact-section">
            <div class="contact-bg">
                <div class="contact-glow glow-1"></div>
                <div class="contact-glow glow-2"></div>
                <div class="contact-grid-overlay"></div>
            </div>

            <div class="contact-container">
                <div class="contact-header">
                    <div class="hero-header">
                        <div class="header-line"></div>
                        <IconImage icon=Icon::MessageSquare alt="Contact" class="header-icon" />
                        <div class="header-line"></div>
                    </div>
                    <h2 class="contact-title">
                        <span class="title-plain">"CON"</span>
                        <span class="title-gradient">"TACT"</span>
                    </h2>
                    <p class="contact-subtitle">
                        {">"} " Let's collaborate and build something extraordinary together"
                    </p>
                </div>

                <div class="contact-main">
                    <div class="contact-column-wide">
                        <Card
                            title="Send Message"
                            icon=Icon::Terminal
                            subtitle="Initialize communication protocol"
                        >
                            <form class="contact-form" on:submit=on_submit>
                                <div class="form-row">
                                    <TextInput
                                        label="Name"
                                        field=FormField::Name
                                        form=form
                                        placeholder="Enter your name"
                                        required=true
                                    />
                                    <TextInput
                                        label="Email"
                                        field=FormField::Email
                                        form=form
                                        input_type="email"
                                        placeholder="Enter your email"
                                        required=true
                                    />
                                </div>
                                <TextArea
                                    label="Message"
                                    field=FormField::Message
                                    form=form
                                    placeholder="Describe your project or inquiry..."
                                    rows=6
                                    required=true
                                />
                                <Button submit=true disabled=submitting>
                                    <IconImage icon=Icon::Send class="btn-icon" />
                                    {move || if submitting.get() { "TRANSMITTING..." } else { "TRANSMIT_MESSAGE" }}
                                </Button>
                            </form>
                        </Card>

                        <Card
                            title="Download Resume"
                            icon=Icon::Download
                            subtitle="Get a copy of my complete professional profile"
                            class="card-accent"
                        >
                            <p class="resume-blurb">
                                "Download my comprehensive resume including detailed work experience, "
                                "technical skills, projects, and achievements in PDF format."
                            </p>
                            <div class="status-line accent">
                                <span class="status-dot"></span>
                                <span>"Last updated: JULY 2025"</span>
                            </div>
                            <Button variant=ButtonVariant::Accent on_click=on_download>
                                <IconImage icon=Icon::Download class="btn-icon" />
                                "DOWNLOAD_RESUME.PDF"
                            </Button>
                        </Card>
                    </div>

                    <div class="contact-column-narrow">
                        <div class="connect-blurb">
                            <h3>"Let's Connect"</h3>
                            <p>
                                "Ready to transform ideas into reality? I'm passionate about collaborating "
                                "on innovative projects that push the boundaries of technology."
                            </p>
                            <div class="status-line">
                                <span class="status-dot"></span>
                                <span>"Available for new opportunities"</span>
                            </div>
                        </div>

                        <div class="contact-details">
                            {CONTACT_INFO
                                .into_iter()
                                .map(|info| view! { <ContactDetail info=info /> })
                                .collect_view()}
                        </div>

                        <div class="social-panel">
                            <h4>"Find Me Online"</h4>
                            <div class="social-row">
                                {SOCIAL_LINKS
                                    .into_iter()
                                    .map(|link| view! { <SocialButton link=link /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Contact Details
// -----------------------------------------------------------------------------

#[component]
fn ContactDetail(info: ContactInfoEntry) -> impl IntoView {
    let class = if info.action.is_some() {
        "contact-detail clickable"
    } else {
        "contact-detail"
    };

    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(ContactAction::Open(url)) = info.action {
                    open_in_new_tab(url);
                }
            }
        >
            <div class="contact-detail-icon">
                <IconImage icon=info.icon alt=info.label />
            </div>
            <div class="contact-detail-text">
                <p class="contact-detail-label">{info.label}</p>
                <p class="contact-detail-value">{info.value}</p>
                <p class="contact-detail-description">{info.description}</p>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Social Links
// -----------------------------------------------------------------------------

#[component]
fn SocialButton(link: SocialLinkEntry) -> impl IntoView {
    let class = if link.is_placeholder() {
        format!("social-button placeholder {}", link.hover_class)
    } else {
        format!("social-button {}", link.hover_class)
    };

    view! {
        <button
            type="button"
            class=class
            title=link.label
            on:click=move |_| open_in_new_tab(link.url)
        >
            <IconImage icon=link.icon alt=link.label />
        </button>
    }
}

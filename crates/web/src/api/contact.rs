// =============================================================================
// Portfolio Web - Contact Submission API
// =============================================================================
// Table of Contents:
// 1. Transport
// 2. Submission Outcome
// 3. Dispatcher
// 4. Submission Run
// 5. Tests
// =============================================================================

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use gloo_net::http::Request;

use super::ApiError;
use crate::services::notifications::{NotificationSink, Toast};
use crate::state::{FormState, LatchGuard, SubmissionLatch};

// -----------------------------------------------------------------------------
// 1. Transport
// -----------------------------------------------------------------------------

/// Sends a JSON body and reports the response status.
///
/// Implementations never read the response body.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, ApiError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl FormTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, ApiError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(response.status())
    }
}

// -----------------------------------------------------------------------------
// 2. Submission Outcome
// -----------------------------------------------------------------------------

/// Result of one submission attempt, as the user sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The form service answered with a 2xx status.
    Success,
    /// A response arrived with any other status.
    ServerRejected,
    /// No response: offline, DNS, CORS, or the request never left.
    TransportError,
}

impl SubmissionOutcome {
    /// Classify a transport result. Only the status code matters.
    pub fn from_response(result: &Result<u16, ApiError>) -> Self {
        match result {
            Ok(200..=299) => SubmissionOutcome::Success,
            Ok(_) => SubmissionOutcome::ServerRejected,
            Err(_) => SubmissionOutcome::TransportError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    /// The fixed toast for this outcome.
    pub fn toast(&self) -> Toast {
        match self {
            SubmissionOutcome::Success => Toast::new(
                "Message Transmitted!",
                "Your message has been sent successfully. I'll respond within 24 hours.",
            ),
            SubmissionOutcome::ServerRejected => Toast::destructive(
                "Oops! Something went wrong.",
                "Please try again later or check your connection.",
            ),
            SubmissionOutcome::TransportError => Toast::destructive(
                "Error!",
                "Network error occurred. Please try again.",
            ),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Dispatcher
// -----------------------------------------------------------------------------

/// Post a form snapshot to the form service and report the outcome.
///
/// Exactly one request and exactly one toast per call. The caller decides
/// what happens to the draft (see [`FormState::settle`]).
pub async fn submit_contact<T, S>(
    transport: &T,
    sink: &S,
    endpoint: &str,
    form: &FormState,
) -> SubmissionOutcome
where
    T: FormTransport,
    S: NotificationSink + ?Sized,
{
    let result = match serde_json::to_string(form) {
        Ok(body) => transport.post_json(endpoint, body).await,
        Err(e) => Err(ApiError::Encode(e.to_string())),
    };

    let outcome = SubmissionOutcome::from_response(&result);
    match &result {
        Ok(status) if outcome.is_success() => {
            log::info!("Contact message accepted ({})", status)
        }
        Ok(status) => log::warn!("Contact message rejected with status {}", status),
        Err(e) => log::error!("Contact message not sent: {}", e),
    }

    sink.notify(outcome.toast());
    outcome
}

// -----------------------------------------------------------------------------
// 4. Submission Run
// -----------------------------------------------------------------------------

/// A claimed submission slot. The latch stays held until the run ends.
#[derive(Debug)]
pub struct SubmissionTicket {
    guard: LatchGuard,
    registration: AbortRegistration,
}

impl SubmissionTicket {
    /// Claim the latch for one submission.
    ///
    /// Returns `None` while another submission holds it. The [`AbortHandle`]
    /// cancels the run started with this ticket.
    pub fn claim(latch: &SubmissionLatch) -> Option<(Self, AbortHandle)> {
        let guard = latch.try_acquire()?;
        let (handle, registration) = AbortHandle::new_pair();
        Some((Self { guard, registration }, handle))
    }
}

/// Submit a snapshot under a claimed ticket and settle the draft.
///
/// Returns `None` if the run was aborted. An aborted run sends no toast and
/// never calls `settle`. The latch is released either way.
pub async fn run_submission<T, S, F>(
    ticket: SubmissionTicket,
    transport: &T,
    sink: &S,
    endpoint: &str,
    snapshot: &FormState,
    settle: F,
) -> Option<SubmissionOutcome>
where
    T: FormTransport,
    S: NotificationSink + ?Sized,
    F: FnOnce(SubmissionOutcome),
{
    let SubmissionTicket { guard, registration } = ticket;
    let request = submit_contact(transport, sink, endpoint, snapshot);
    let result = Abortable::new(request, registration).await;
    drop(guard);

    match result {
        Ok(outcome) => {
            settle(outcome);
            Some(outcome)
        }
        Err(_) => {
            log::debug!("Contact submission aborted");
            None
        }
    }
}

// -----------------------------------------------------------------------------
// 5. Tests
// -----------------------------------------------------------------------------

//! Navigation/submission channel
//!
//! The custom-field form performs no network I/O itself. It hands its
//! encoded payload to this channel, which POSTs the fields
//! multipart-encoded to the backend and drives the submission phase the
//! form observes: `Idle → Submitting → Loading → Idle`. Success and
//! failure both end in `Idle`; the distinction only surfaces as a status
//! message.

use std::time::Duration;

use serde::Deserialize;
use trove_core::{TroveError, TroveResult};
use trove_model::{CustomFieldUpsert, FormValues};

use crate::state::{APP_STATE, StatusLevel};

/// Upper bound on a single submission round trip
pub const SUBMIT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Submission Phase
// ============================================================================

/// Lifecycle of the externally-owned submission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// No submission in flight
    #[default]
    Idle,
    /// Request sent, waiting for the server
    Submitting,
    /// Response received, refreshing the working set
    Loading,
}

impl SubmissionPhase {
    /// Whether the form should render disabled
    pub fn is_busy(&self) -> bool {
        !matches!(self, SubmissionPhase::Idle)
    }

    /// Short label for the status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Loading => "loading",
        }
    }
}

// ============================================================================
// Form Channel
// ============================================================================

/// HTTP channel the form submits through
#[derive(Debug, Clone)]
pub struct FormChannel {
    client: reqwest::Client,
    endpoint: String,
}

impl FormChannel {
    /// Create a channel against the given backend base URL
    pub fn new(api_base_url: &str) -> TroveResult<Self> {
        if api_base_url.trim().is_empty() {
            return Err(TroveError::config("api_base_url is empty"));
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("trove/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TroveError::submission(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: field_endpoint(api_base_url),
        })
    }

    /// The resolved custom-fields endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload as multipart form fields
    pub async fn post(&self, values: &FormValues) -> TroveResult<()> {
        let request = self
            .client
            .post(&self.endpoint)
            .multipart(multipart_form(values))
            .send();

        let response = tokio::time::timeout(Duration::from_secs(SUBMIT_TIMEOUT_SECS), request)
            .await
            .map_err(|_| TroveError::SubmissionTimeout {
                seconds: SUBMIT_TIMEOUT_SECS,
            })?
            .map_err(|e| TroveError::submission(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(TroveError::SubmissionRejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }
}

/// Resolve the custom-fields endpoint under a base URL
pub fn field_endpoint(api_base_url: &str) -> String {
    format!("{}/api/custom-fields", api_base_url.trim_end_matches('/'))
}

fn multipart_form(values: &FormValues) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new();
    for (key, value) in values.iter() {
        form = form.text(key.to_string(), value.to_string());
    }
    form
}

/// Error body shape the backend uses for rejections
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Best-effort extraction of a human-readable message from a rejection body
fn rejection_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

// ============================================================================
// Submission Lifecycle
// ============================================================================

/// Run one submission through its full lifecycle.
///
/// Spawned by the form on submit. Writes phase transitions into the app
/// state; on success folds the validated upsert into the working set during
/// the `Loading` window and closes the editor.
pub async fn submit_custom_field(
    channel: FormChannel,
    values: FormValues,
    upsert: CustomFieldUpsert,
) {
    APP_STATE.write().set_submission(SubmissionPhase::Submitting);
    tracing::debug!("Submitting custom field to {}", channel.endpoint());

    match channel.post(&values).await {
        Ok(()) => {
            let name = upsert.name.clone();
            let mut state = APP_STATE.write();
            state.set_submission(SubmissionPhase::Loading);
            state.apply_upsert(upsert);
            state.close_editor();
            state.set_status(
                format!("Saved custom field '{}'", name),
                StatusLevel::Success,
            );
            state.set_submission(SubmissionPhase::Idle);
            drop(state);
            tracing::info!("Custom field '{}' saved", name);
        }
        Err(e) => {
            tracing::error!("Custom field submission failed: {}", e);
            let mut state = APP_STATE.write();
            state.set_status(format!("Submission failed: {}", e), StatusLevel::Error);
            state.set_submission(SubmissionPhase::Idle);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

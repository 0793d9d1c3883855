//! Application State Management for Trove
//!
//! This module provides centralized state management using Dioxus Signals.
//! It holds the tenant context, the page-title observable, the submission
//! phase, status messages, and the in-memory working set of custom fields.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use trove_core::{CustomFieldId, OrganizationId};
use trove_model::{CustomField, CustomFieldUpsert};

use crate::config::AppConfig;
use crate::submit::SubmissionPhase;

// ============================================================================
// Organization Context
// ============================================================================

/// The tenant every submission is attached to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationContext {
    /// Opaque tenant identifier, embedded as a hidden form field
    pub id: OrganizationId,
    /// Display name shown in the header
    pub name: String,
}

impl OrganizationContext {
    /// Create a new organization context
    pub fn new(id: OrganizationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ============================================================================
// Status Messages
// ============================================================================

/// Severity of a status-bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// CSS modifier suffix for the status bar
    pub fn css_suffix(&self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "success",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

/// A transient message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
    pub level: StatusLevel,
    pub at: DateTime<Utc>,
}

impl StatusMessage {
    /// Create a new status message stamped with the current time
    pub fn new(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
            at: Utc::now(),
        }
    }
}

// ============================================================================
// Field Editor
// ============================================================================

/// Which form the custom-fields page currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEditor {
    /// Creating a new field
    Create,
    /// Editing an existing field
    Edit(CustomFieldId),
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current tenant
    pub organization: OrganizationContext,
    /// Base URL of the Trove backend
    pub api_base_url: String,
    /// Process-wide title observable; mirrored by the page header while the
    /// user types a field name. `None` falls back to the page default.
    page_title: Option<String>,
    /// Current submission phase, owned by the submission channel
    pub submission: SubmissionPhase,
    /// Last status message, if any
    pub status: Option<StatusMessage>,
    /// In-memory working set of the organization's custom fields
    pub fields: Vec<CustomField>,
    /// Currently open form, if any
    pub active_editor: Option<FieldEditor>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::global();
        Self {
            organization: OrganizationContext::new(
                config.organization_id,
                config.organization_name,
            ),
            api_base_url: config.api_base_url,
            page_title: None,
            submission: SubmissionPhase::Idle,
            status: None,
            fields: Vec::new(),
            active_editor: None,
        }
    }
}

impl AppState {
    /// Create new application state from the installed configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Title observable
    // ------------------------------------------------------------------

    /// Write target for the title observable. An empty title clears it.
    pub fn set_page_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.page_title = if title.trim().is_empty() {
            None
        } else {
            Some(title)
        };
    }

    /// Current page title, if one was published
    pub fn page_title(&self) -> Option<&str> {
        self.page_title.as_deref()
    }

    // ------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------

    /// Show a status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage::new(message, level));
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // ------------------------------------------------------------------
    // Submission phase
    // ------------------------------------------------------------------

    /// Record the current submission phase
    pub fn set_submission(&mut self, phase: SubmissionPhase) {
        self.submission = phase;
    }

    // ------------------------------------------------------------------
    // Editor lifecycle
    // ------------------------------------------------------------------

    /// Open the form in create mode
    pub fn open_create_editor(&mut self) {
        self.active_editor = Some(FieldEditor::Create);
    }

    /// Open the form in edit mode for `id`
    pub fn open_edit_editor(&mut self, id: CustomFieldId) {
        self.active_editor = Some(FieldEditor::Edit(id));
    }

    /// Close the form and discard its transient title
    pub fn close_editor(&mut self) {
        self.active_editor = None;
        self.page_title = None;
    }

    /// The field the open editor targets, if it is an edit
    pub fn editor_field(&self) -> Option<&CustomField> {
        match self.active_editor {
            Some(FieldEditor::Edit(id)) => self.field(id),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Working set
    // ------------------------------------------------------------------

    /// Look up a field by id
    pub fn field(&self, id: CustomFieldId) -> Option<&CustomField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Number of fields in the working set
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Fold a validated upsert into the working set: applied to the field
    /// under edit, or appended as a new field otherwise. Returns the id of
    /// the affected field.
    pub fn apply_upsert(&mut self, upsert: CustomFieldUpsert) -> CustomFieldId {
        if let Some(FieldEditor::Edit(id)) = self.active_editor {
            if let Some(field) = self.fields.iter_mut().find(|f| f.id == id) {
                upsert.apply_to(field);
                return id;
            }
        }
        let field = upsert.into_custom_field();
        let id = field.id;
        self.fields.push(field);
        id
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to get the current submission phase
pub fn use_submission_phase() -> SubmissionPhase {
    APP_STATE.read().submission
}

/// Hook to get the published page title
pub fn use_page_title() -> Option<String> {
    APP_STATE.read().page_title().map(str::to_string)
}

/// Hook to get the organization display name
pub fn use_organization_name() -> String {
    APP_STATE.read().organization.name.clone()
}

// ============================================================================
// Tests
// ============================================================================

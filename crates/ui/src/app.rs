//! Main Application Component for Trove
//!
//! This module contains the root Dioxus component: the header that mirrors
//! the page-title observable, the main content area, and the status bar.

use dioxus::prelude::*;

use crate::pages::CustomFieldsPage;
use crate::state::APP_STATE;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Trove UI initialized");
    });

    rsx! {
        div {
            class: "app-shell",

            Header {}

            main {
                class: "app-main",
                CustomFieldsPage {}
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Page header mirroring the process-wide title observable
#[component]
fn Header() -> Element {
    let state = APP_STATE.read();
    let organization = state.organization.name.clone();
    let title = state
        .page_title()
        .unwrap_or("Custom fields")
        .to_string();
    drop(state);

    rsx! {
        header {
            class: "app-header",

            span { class: "app-header__org", "{organization}" }
            h1 { class: "app-header__title", "{title}" }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom bar showing the last status message and the submission phase
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.status.clone();
    let phase = state.submission;
    drop(state);

    let (message, message_class) = match &status {
        Some(status) => (
            status.message.clone(),
            format!(
                "status-bar__message status-bar__message--{}",
                status.level.css_suffix()
            ),
        ),
        None => ("Ready".to_string(), "status-bar__message".to_string()),
    };

    rsx! {
        footer {
            class: "status-bar",

            span { class: "{message_class}", "{message}" }
            span { "{phase.display_name()}" }
        }
    }
}

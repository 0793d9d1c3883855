//! # Trove UI
//!
//! Dioxus Desktop UI for the Trove asset management client.
//!
//! This crate provides the custom-field administration surface:
//!
//! - The custom-field create/edit form with inline validation errors
//! - The submission channel driving the idle/submitting/loading lifecycle
//! - Global application state (tenant context, title observable, status)
//! - Client configuration loaded from the platform config directory
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod submit;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use trove_core;
pub use trove_model;

// Re-export main components
pub use app::App;
pub use config::AppConfig;
pub use pages::CustomFieldsPage;
pub use state::{
    APP_STATE, AppState, FieldEditor, OrganizationContext, StatusLevel, StatusMessage,
    use_organization_name, use_page_title, use_submission_phase,
};
pub use submit::{FormChannel, SubmissionPhase};

// Re-export components
pub use components::{
    CustomFieldForm, FormRow, OptionListEditor, Select, SelectOption, Spinner, Switch, TextArea,
    TextInput,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Trove";

/// Application display title
pub const TITLE: &str = "Trove - Asset Management";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Trove desktop application
///
/// This is the main entry point for the Dioxus desktop app. It installs
/// the configuration and starts the UI.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     let config = trove_ui::AppConfig::load()?;
///     trove_ui::launch(config);
///     Ok(())
/// }
/// ```
pub fn launch(config: AppConfig) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // App state reads the installed configuration on first access
    config.install();

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(720.0, 520.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

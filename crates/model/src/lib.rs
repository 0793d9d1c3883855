//! # Trove Model
//!
//! Custom-field domain model for the Trove client.
//!
//! This crate covers the data side of custom-field administration:
//!
//! - **custom_field**: the `CustomField` entity and its bookkeeping
//! - **form**: the multipart submission payload (`FormValues`) and the
//!   form's working draft (`FieldDraft`) with its wire encoding
//! - **schema**: the validation schema mapping submitted values to typed
//!   output or per-field error messages
//!

pub mod custom_field;
pub mod form;
pub mod schema;

// Re-export commonly used items at crate root
pub use custom_field::CustomField;
pub use form::{
    FIELD_ACTIVE, FIELD_HELP_TEXT, FIELD_NAME, FIELD_ORGANIZATION_ID, FIELD_REQUIRED, FIELD_TYPE,
    FieldDraft, FormValues, option_field_name,
};
pub use schema::{CustomFieldUpsert, FieldErrors, NAME_MIN_LEN, UpsertSchema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

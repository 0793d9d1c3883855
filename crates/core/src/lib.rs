//! # Trove Core
//!
//! Core types, traits, and error handling for the Trove asset management
//! client.
//!
//! This crate provides the foundational building blocks used throughout
//! the Trove workspace, including:
//!
//! - **Types**: Identifier aliases, the custom-field kind enum, checkbox
//!   wire-value helpers
//! - **Traits**: Common behaviors like `Validatable`
//! - **Errors**: Unified error handling with `TroveError` and `TroveResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ResultExt, TroveError, TroveResult};
pub use traits::Validatable;
pub use types::{CHECKBOX_ON, CustomFieldId, FieldKind, OrganizationId, checkbox_checked};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

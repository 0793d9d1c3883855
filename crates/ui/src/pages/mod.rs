//! Page Components for Trove
//!
//! This module contains the page/view components for the application.

pub mod custom_fields;

pub use custom_fields::CustomFieldsPage;

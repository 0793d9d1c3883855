//! # UI Components
//!
//! Reusable Dioxus components for the Trove client.

pub mod custom_field_form;
pub mod inputs;
pub mod option_list;

pub use custom_field_form::CustomFieldForm;
pub use inputs::{FormRow, Select, SelectOption, Spinner, Switch, TextArea, TextInput};
pub use option_list::OptionListEditor;

//! # Input Components
//!
//! Reusable form input components for the Trove UI:
//!
//! - **FormRow**: labeled row with required indicator, help text, and
//!   inline error
//! - **TextInput**: single-line text input
//! - **TextArea**: multi-line text input
//! - **Select**: dropdown selection
//! - **Switch**: checkbox-style toggle
//! - **Spinner**: loading indicator
//!

use dioxus::prelude::*;

// ============================================================================
// Form Row Component
// ============================================================================

/// Properties for FormRow component
#[derive(Props, Clone, PartialEq)]
pub struct FormRowProps {
    /// Row label
    pub label: String,

    /// Whether the required indicator is shown
    #[props(default = false)]
    pub required: bool,

    /// Inline error message; takes precedence over help text
    #[props(default)]
    pub error: Option<String>,

    /// Help text shown under the control
    #[props(default)]
    pub help_text: Option<String>,

    /// The control itself
    pub children: Element,
}

/// Labeled form row with required indicator and inline error
#[component]
pub fn FormRow(props: FormRowProps) -> Element {
    rsx! {
        div {
            class: "form-row",

            label {
                class: "form-row__label",
                "{props.label}"
                if props.required {
                    span { class: "form-row__required", "*" }
                }
            }

            {props.children}

            if let Some(error) = &props.error {
                p { class: "form-row__error", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "form-row__help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Whether the input renders in its error state
    #[props(default = false)]
    pub has_error: bool,

    /// Input type (text, date, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            class: control_class("input", props.has_error),
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            disabled: props.disabled,
            oninput: move |e| props.on_change.call(e.value()),
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Whether the error state is shown
    #[props(default = false)]
    pub has_error: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        textarea {
            class: control_class("textarea", props.has_error),
            rows: "{props.rows}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            disabled: props.disabled,
            oninput: move |e| props.on_change.call(e.value()),
            "{props.value}"
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Whether the error state is shown
    #[props(default = false)]
    pub has_error: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        select {
            class: control_class("select", props.has_error),
            disabled: props.disabled,
            onchange: move |e| props.on_change.call(e.value()),

            for option in &props.options {
                option {
                    key: "{option.value}",
                    value: "{option.value}",
                    selected: props.value == option.value,
                    "{option.label}"
                }
            }
        }
    }
}

// ============================================================================
// Switch Component
// ============================================================================

/// Properties for Switch component
#[derive(Props, Clone, PartialEq)]
pub struct SwitchProps {
    /// Whether on
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox-style toggle switch
#[component]
pub fn Switch(props: SwitchProps) -> Element {
    let track_class = if props.checked {
        "switch__track switch__track--on"
    } else {
        "switch__track"
    };

    rsx! {
        div {
            class: "switch",
            class: if props.disabled { "switch--disabled" } else { "" },
            onclick: move |_| {
                if !props.disabled {
                    props.on_change.call(!props.checked);
                }
            },

            span {
                class: "{track_class}",
                span { class: "switch__thumb" }
            }

            if let Some(label) = &props.label {
                span { class: "switch__label", "{label}" }
            }
        }
    }
}

// ============================================================================
// Spinner Component
// ============================================================================

/// Loading indicator shown in place of a submit label
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "spinner" }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a control class string, adding the error modifier when needed
fn control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{base} {base}--error")
    } else {
        base.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_class() {
        assert_eq!(control_class("input", false), "input");
        assert_eq!(control_class("input", true), "input input--error");
        assert_eq!(control_class("select", true), "select select--error");
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("text", "Single-line text");
        assert_eq!(opt.value, "text");
        assert_eq!(opt.label, "Single-line text");
    }
}

//! Dynamic option-list editor
//!
//! Shown inside the custom-field form when the option-list kind is
//! selected. Supports appending a new option at the end and removing an
//! option by position; deduplication, reordering, and per-option
//! validation are intentionally not done here.

use dioxus::prelude::*;

use crate::components::inputs::TextInput;

/// Properties for OptionListEditor component
#[derive(Props, Clone, PartialEq)]
pub struct OptionListEditorProps {
    /// Current working option list
    pub options: Vec<String>,

    /// Whether editing is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Called with the new option when the user appends one
    #[props(default)]
    pub on_append: EventHandler<String>,

    /// Called with the removed index
    #[props(default)]
    pub on_remove: EventHandler<usize>,
}

/// Editor for the ordered option list of an option-list field
#[component]
pub fn OptionListEditor(props: OptionListEditorProps) -> Element {
    let mut pending = use_signal(String::new);
    let can_append = !props.disabled && normalized_option(&pending.read()).is_some();

    let mut append_pending = move |_| {
        if let Some(value) = normalized_option(&pending.read()) {
            props.on_append.call(value);
            pending.set(String::new());
        }
    };

    rsx! {
        div {
            class: "option-list",

            if props.options.is_empty() {
                p {
                    class: "option-list__empty",
                    "No options yet. Add the choices this field offers."
                }
            } else {
                for (i, option) in props.options.iter().enumerate() {
                    div {
                        key: "{i}-{option}",
                        class: "option-list__row",

                        span { class: "option-list__value", "{option}" }

                        button {
                            r#type: "button",
                            class: "button button--danger",
                            disabled: props.disabled,
                            onclick: move |_| props.on_remove.call(i),
                            "✕"
                        }
                    }
                }
            }

            div {
                class: "option-list__row",

                TextInput {
                    value: pending.read().clone(),
                    placeholder: "New option".to_string(),
                    disabled: props.disabled,
                    on_change: move |value: String| pending.set(value),
                }

                button {
                    r#type: "button",
                    class: "button",
                    disabled: !can_append,
                    onclick: move |_| append_pending(()),
                    "Add option"
                }
            }
        }
    }
}

/// Trim a pending entry; whitespace-only entries are not appendable
fn normalized_option(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! # Custom Field Form
//!
//! Create/edit form for an organization's custom fields.
//!
//! The form keeps a transient draft of the entity for its mounted
//! lifetime, validates submissions through [`UpsertSchema`], and hands the
//! encoded payload to the submission channel. While the channel reports a
//! busy phase every control is disabled and the submit button shows a
//! spinner instead of its label.
//!
//! Typing in the name field additionally publishes the in-progress name to
//! the process-wide title observable so the page header mirrors it before
//! the submission completes.

use dioxus::prelude::*;
use trove_core::FieldKind;
use trove_model::{
    CustomField, FIELD_HELP_TEXT, FIELD_NAME, FIELD_TYPE, FieldDraft, FieldErrors, UpsertSchema,
};

use crate::components::inputs::{FormRow, Select, SelectOption, Spinner, Switch, TextArea, TextInput};
use crate::components::option_list::OptionListEditor;
use crate::state::{APP_STATE, StatusLevel};
use crate::submit::{self, FormChannel};

// ============================================================================
// Component Props
// ============================================================================

/// Properties for CustomFieldForm component
#[derive(Props, Clone, PartialEq)]
pub struct CustomFieldFormProps {
    /// Existing field to seed the draft from; `None` renders the create form
    #[props(default)]
    pub initial: Option<CustomField>,

    /// When true the kind selector is locked; kind changes after creation
    /// are disallowed, but the selected kind is still submitted
    #[props(default = false)]
    pub is_edit: bool,

    /// Called when the user abandons the form
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Custom field creation and editing form
#[component]
pub fn CustomFieldForm(props: CustomFieldFormProps) -> Element {
    // Seed the draft once, from the edited field or from defaults
    let initial_draft = match &props.initial {
        Some(field) => FieldDraft::from_field(field),
        None => FieldDraft::new(APP_STATE.read().organization.id),
    };
    let mut draft = use_signal(|| initial_draft);
    let mut errors = use_signal(FieldErrors::new);

    let phase = APP_STATE.read().submission;
    let busy = phase.is_busy();
    let is_edit = props.is_edit;

    let kind_options: Vec<SelectOption> = FieldKind::all()
        .iter()
        .map(|kind| SelectOption::new(kind.token(), kind.display_name()))
        .collect();

    // Handle form submission
    let mut handle_submit = move |_| {
        let values = draft.read().encode();
        match UpsertSchema.validate(&values) {
            Err(field_errors) => {
                tracing::debug!(
                    "Custom field submission blocked by {} invalid field(s)",
                    field_errors.len()
                );
                errors.set(field_errors);
            }
            Ok(upsert) => {
                errors.set(FieldErrors::new());
                let api_base_url = APP_STATE.read().api_base_url.clone();
                match FormChannel::new(&api_base_url) {
                    Ok(channel) => {
                        spawn(submit::submit_custom_field(channel, values, upsert));
                    }
                    Err(e) => {
                        tracing::error!("Cannot open submission channel: {}", e);
                        APP_STATE
                            .write()
                            .set_status(format!("Submission failed: {}", e), StatusLevel::Error);
                    }
                }
            }
        }
    };

    let current = draft.read().clone();
    let error_map = errors.read().clone();
    let submit_text = submit_label(is_edit);

    rsx! {
        form {
            class: "field-form",
            onsubmit: move |e| {
                e.prevent_default();
            },

            // Name (mirrored into the title observable while typing)
            FormRow {
                label: "Name",
                required: UpsertSchema::is_required(FIELD_NAME),
                error: error_map.get(FIELD_NAME).map(str::to_string),
                help_text: Some("Shown as the label on asset forms.".to_string()),

                TextInput {
                    value: current.name.clone(),
                    placeholder: "e.g. Serial number".to_string(),
                    disabled: busy,
                    has_error: error_map.get(FIELD_NAME).is_some(),
                    on_change: move |value: String| {
                        APP_STATE.write().set_page_title(value.as_str());
                        draft.write().name = value;
                    },
                }
            }

            // Help text
            FormRow {
                label: "Help text",
                required: UpsertSchema::is_required(FIELD_HELP_TEXT),
                error: error_map.get(FIELD_HELP_TEXT).map(str::to_string),
                help_text: Some("Optional guidance shown next to the input.".to_string()),

                TextArea {
                    value: current.help_text.clone(),
                    rows: 2,
                    disabled: busy,
                    on_change: move |value: String| {
                        draft.write().help_text = value;
                    },
                }
            }

            // Kind selector; helper blurb follows the selection
            FormRow {
                label: "Type",
                required: UpsertSchema::is_required(FIELD_TYPE),
                error: error_map.get(FIELD_TYPE).map(str::to_string),
                help_text: Some(current.kind.helper_text().to_string()),

                Select {
                    value: current.kind.token().to_string(),
                    options: kind_options,
                    disabled: kind_selector_locked(is_edit, busy),
                    has_error: error_map.get(FIELD_TYPE).is_some(),
                    on_change: move |token: String| {
                        if let Some(kind) = FieldKind::parse_token(&token) {
                            draft.write().kind = kind;
                        }
                    },
                }
            }

            // Option list, only for the option-list kind
            if current.kind.has_options() {
                FormRow {
                    label: "Options",
                    help_text: Some("One choice per entry, offered in this order.".to_string()),

                    OptionListEditor {
                        options: current.options.clone(),
                        disabled: busy,
                        on_append: move |value: String| {
                            draft.write().add_option(value);
                        },
                        on_remove: move |index: usize| {
                            draft.write().remove_option(index);
                        },
                    }
                }
            }

            // Flags
            div {
                class: "form-row",

                Switch {
                    checked: current.required,
                    label: Some("Required on asset forms".to_string()),
                    disabled: busy,
                    on_change: move |checked: bool| {
                        draft.write().required = checked;
                    },
                }

                Switch {
                    checked: current.active,
                    label: Some("Active".to_string()),
                    disabled: busy,
                    on_change: move |checked: bool| {
                        draft.write().active = checked;
                    },
                }
            }

            // Actions
            div {
                class: "form-actions",

                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy,
                    onclick: move |_| props.on_cancel.call(()),
                    "Cancel"
                }

                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy,
                    onclick: move |_| handle_submit(()),

                    if busy {
                        Spinner {}
                    } else {
                        "{submit_text}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// The kind selector is non-interactive in edit mode and while a
/// submission is in flight
fn kind_selector_locked(is_edit: bool, busy: bool) -> bool {
    is_edit || busy
}

/// Submit button label by mode
fn submit_label(is_edit: bool) -> &'static str {
    if is_edit { "Save changes" } else { "Create field" }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use trove_core::OrganizationId;

    fn org() -> OrganizationId {
        uuid::Uuid::new_v4()
    }

    #[test]
    fn test_kind_selector_locked_in_edit_mode() {
        assert!(kind_selector_locked(true, false));
        assert!(kind_selector_locked(false, true));
        assert!(!kind_selector_locked(false, false));
    }

    #[test]
    fn test_submit_label_by_mode() {
        assert_eq!(submit_label(false), "Create field");
        assert_eq!(submit_label(true), "Save changes");
    }

    #[test]
    fn test_locked_selector_still_submits_kind() {
        // Edit mode locks the selector, but the draft's kind token is still
        // part of the encoded payload.
        let field = CustomField::new("Condition", FieldKind::OptionList, org());
        let draft = FieldDraft::from_field(&field);
        assert!(kind_selector_locked(true, false));
        assert_eq!(draft.encode().get(FIELD_TYPE), Some("option"));
    }
}

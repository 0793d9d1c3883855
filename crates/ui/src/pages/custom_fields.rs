//! Custom fields administration page
//!
//! Lists the organization's custom fields and mounts the create/edit form
//! when an editor is open. The form's transient state lives only while it
//! is mounted; leaving the page discards it.

use dioxus::prelude::*;
use trove_model::CustomField;

use crate::components::CustomFieldForm;
use crate::state::{APP_STATE, FieldEditor};

/// Custom fields listing with create/edit mounting
#[component]
pub fn CustomFieldsPage() -> Element {
    let state = APP_STATE.read();
    let editor = state.active_editor;
    let editing_field: Option<CustomField> = state.editor_field().cloned();
    let fields: Vec<CustomField> = state.fields.clone();
    let field_count = state.field_count();
    drop(state);

    match editor {
        Some(editor) => {
            // A stale edit target falls back to the create form
            let is_edit = matches!(editor, FieldEditor::Edit(_)) && editing_field.is_some();
            rsx! {
                div {
                    class: "fields-page",

                    CustomFieldForm {
                        initial: editing_field,
                        is_edit: is_edit,
                        on_cancel: move |_| {
                            APP_STATE.write().close_editor();
                        },
                    }
                }
            }
        }
        None => rsx! {
            div {
                class: "fields-page",

                div {
                    class: "fields-page__toolbar",

                    span { "{field_count} custom fields" }

                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| APP_STATE.write().open_create_editor(),
                        "New custom field"
                    }
                }

                if fields.is_empty() {
                    p {
                        class: "fields-table__empty",
                        "No custom fields yet. Create one to extend your asset forms."
                    }
                } else {
                    table {
                        class: "fields-table",

                        thead {
                            tr {
                                th { "Name" }
                                th { "Type" }
                                th { "Required" }
                                th { "Active" }
                                th { "Updated" }
                                th {}
                            }
                        }

                        tbody {
                            for field in fields.iter() {
                                {
                                    let id = field.id;
                                    let updated = field.updated_at.format("%Y-%m-%d").to_string();
                                    rsx! {
                                        tr {
                                            key: "{id}",

                                            td { "{field.name}" }
                                            td { "{field.kind_label()}" }
                                            td {
                                                span {
                                                    class: badge_class(field.required),
                                                    if field.required { "required" } else { "optional" }
                                                }
                                            }
                                            td {
                                                span {
                                                    class: badge_class(field.active),
                                                    if field.active { "active" } else { "inactive" }
                                                }
                                            }
                                            td { "{updated}" }
                                            td {
                                                button {
                                                    r#type: "button",
                                                    class: "button button--ghost",
                                                    onclick: move |_| APP_STATE.write().open_edit_editor(id),
                                                    "Edit"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

/// Badge modifier for on/off flags
fn badge_class(on: bool) -> &'static str {
    if on { "badge badge--on" } else { "badge" }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(true), "badge badge--on");
        assert_eq!(badge_class(false), "badge");
    }
}

//! Form submission payload
//!
//! The custom-field form submits a flat multipart payload:
//!
//! - `name` (string)
//! - `helpText` (string, empty when absent)
//! - `type` (a [`FieldKind`] wire token)
//! - `required` / `active` ("on" when checked, absent otherwise)
//! - `organizationId` (string UUID)
//! - `options[i]` (one field per option, index-suffixed), present only for
//!   option-list fields
//!
//! [`FormValues`] is the ordered key/value form of that payload;
//! [`FieldDraft`] is the form's working copy of the entity and knows how to
//! encode itself into it.

use serde::{Deserialize, Serialize};
use trove_core::{CHECKBOX_ON, FieldKind, OrganizationId, checkbox_checked};

use crate::custom_field::CustomField;

// ============================================================================
// Field Names
// ============================================================================

/// Form field: display name
pub const FIELD_NAME: &str = "name";

/// Form field: help text (empty when absent)
pub const FIELD_HELP_TEXT: &str = "helpText";

/// Form field: kind wire token
pub const FIELD_TYPE: &str = "type";

/// Form field: required flag (checkbox encoding)
pub const FIELD_REQUIRED: &str = "required";

/// Form field: active flag (checkbox encoding)
pub const FIELD_ACTIVE: &str = "active";

/// Form field: owning tenant id
pub const FIELD_ORGANIZATION_ID: &str = "organizationId";

/// Base name of the index-suffixed option fields
pub const FIELD_OPTIONS: &str = "options";

/// Name of the i-th option form field, e.g. `options[2]`
pub fn option_field_name(index: usize) -> String {
    format!("{}[{}]", FIELD_OPTIONS, index)
}

// ============================================================================
// Form Values
// ============================================================================

/// Ordered key/value submission payload
///
/// Keys are not unique; lookups return the first match, mirroring how a
/// multipart body is read on the server side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    entries: Vec<(String, String)>,
}

impl FormValues {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value submitted under `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether any field was submitted under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Decode a checkbox-style field: "on" maps to true, absent to false
    pub fn checkbox(&self, key: &str) -> bool {
        checkbox_checked(self.get(key))
    }

    /// Collect index-suffixed fields (`base[0]`, `base[1]`, ...) ordered by
    /// their index
    pub fn indexed_values(&self, base: &str) -> Vec<String> {
        let mut found: Vec<(usize, &str)> = self
            .entries
            .iter()
            .filter_map(|(k, v)| parse_indexed_key(k, base).map(|i| (i, v.as_str())))
            .collect();
        found.sort_by_key(|(i, _)| *i);
        found.into_iter().map(|(_, v)| v.to_string()).collect()
    }

    /// Number of fields in the payload
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over fields in submission order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse `base[i]` into `i`; returns `None` for any other key shape
fn parse_indexed_key(key: &str, base: &str) -> Option<usize> {
    let rest = key.strip_prefix(base)?;
    let inner = rest.strip_prefix('[')?.strip_suffix(']')?;
    inner.parse().ok()
}

// ============================================================================
// Field Draft
// ============================================================================

/// The form's working copy of a custom field
///
/// Lives for the mounted lifetime of the form: seeded from an existing field
/// in edit mode, from defaults otherwise, and discarded on unmount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub name: String,
    /// Raw help-text input; the empty string means "no value"
    pub help_text: String,
    pub kind: FieldKind,
    pub required: bool,
    pub active: bool,
    pub options: Vec<String>,
    pub organization_id: OrganizationId,
}

impl FieldDraft {
    /// Fresh draft for a new field. Active defaults to checked.
    pub fn new(organization_id: OrganizationId) -> Self {
        Self {
            name: String::new(),
            help_text: String::new(),
            kind: FieldKind::default(),
            required: false,
            active: true,
            options: Vec::new(),
            organization_id,
        }
    }

    /// Draft seeded from an existing field (edit mode)
    pub fn from_field(field: &CustomField) -> Self {
        Self {
            name: field.name.clone(),
            help_text: field.help_text.clone().unwrap_or_default(),
            kind: field.kind,
            required: field.required,
            active: field.active,
            options: field.options.clone(),
            organization_id: field.organization_id,
        }
    }

    /// Append an option to the end of the working list
    pub fn add_option(&mut self, value: impl Into<String>) {
        self.options.push(value.into());
    }

    /// Remove the option at `index`, shifting subsequent entries left.
    /// Out-of-range indices are ignored.
    pub fn remove_option(&mut self, index: usize) {
        if index < self.options.len() {
            self.options.remove(index);
        }
    }

    /// Encode the draft into the submission payload.
    ///
    /// Checkbox flags are present only when checked; `options[i]` fields are
    /// present only for option-list drafts.
    pub fn encode(&self) -> FormValues {
        let mut values = FormValues::new();
        values.push(FIELD_NAME, self.name.clone());
        values.push(FIELD_HELP_TEXT, self.help_text.clone());
        values.push(FIELD_TYPE, self.kind.token());
        if self.required {
            values.push(FIELD_REQUIRED, CHECKBOX_ON);
        }
        if self.active {
            values.push(FIELD_ACTIVE, CHECKBOX_ON);
        }
        values.push(FIELD_ORGANIZATION_ID, self.organization_id.to_string());
        if self.kind.has_options() {
            for (i, option) in self.options.iter().enumerate() {
                values.push(option_field_name(i), option.clone());
            }
        }
        values
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn org() -> OrganizationId {
        uuid::Uuid::new_v4()
    }

    fn option_draft() -> FieldDraft {
        let mut draft = FieldDraft::new(org());
        draft.name = "Condition".to_string();
        draft.kind = FieldKind::OptionList;
        draft.options = vec!["New".to_string(), "Used".to_string(), "Broken".to_string()];
        draft
    }

    #[test]
    fn test_new_draft_active_by_default() {
        let draft = FieldDraft::new(org());
        assert!(draft.active);
        assert!(!draft.required);
        assert_eq!(draft.kind, FieldKind::Text);
    }

    #[test]
    fn test_add_option_appends_last() {
        let mut draft = option_draft();
        draft.add_option("Lost");
        assert_eq!(
            draft.options,
            vec!["New", "Used", "Broken", "Lost"]
        );
    }

    #[test]
    fn test_remove_option_shifts_left() {
        let mut draft = option_draft();
        draft.remove_option(1);
        assert_eq!(draft.options, vec!["New", "Broken"]);
    }

    #[test]
    fn test_remove_option_out_of_range_is_ignored() {
        let mut draft = option_draft();
        draft.remove_option(7);
        assert_eq!(draft.options.len(), 3);
    }

    #[test]
    fn test_encode_omits_options_for_non_option_kinds() {
        for kind in FieldKind::all() {
            if kind.has_options() {
                continue;
            }
            let mut draft = option_draft();
            draft.kind = *kind;
            let values = draft.encode();
            assert!(
                values.indexed_values(FIELD_OPTIONS).is_empty(),
                "kind {kind} should not submit options"
            );
        }
    }

    #[test]
    fn test_encode_option_fields_in_order() {
        let values = option_draft().encode();
        assert_eq!(values.get("options[0]"), Some("New"));
        assert_eq!(values.get("options[1]"), Some("Used"));
        assert_eq!(values.get("options[2]"), Some("Broken"));
        assert_eq!(
            values.indexed_values(FIELD_OPTIONS),
            vec!["New", "Used", "Broken"]
        );
    }

    #[test]
    fn test_encode_checkbox_flags() {
        let mut draft = FieldDraft::new(org());
        draft.name = "Serial".to_string();

        // active defaults to checked, required does not
        let values = draft.encode();
        assert!(!values.contains(FIELD_REQUIRED));
        assert_eq!(values.get(FIELD_ACTIVE), Some(CHECKBOX_ON));
        assert!(!values.checkbox(FIELD_REQUIRED));
        assert!(values.checkbox(FIELD_ACTIVE));

        draft.required = true;
        draft.active = false;
        let values = draft.encode();
        assert!(values.checkbox(FIELD_REQUIRED));
        assert!(!values.contains(FIELD_ACTIVE));
    }

    #[test]
    fn test_encode_help_text_empty_when_absent() {
        let mut draft = FieldDraft::new(org());
        draft.name = "Serial".to_string();
        let values = draft.encode();
        assert_eq!(values.get(FIELD_HELP_TEXT), Some(""));
    }

    #[test]
    fn test_encode_always_includes_type_token() {
        let mut draft = FieldDraft::new(org());
        draft.kind = FieldKind::Date;
        let values = draft.encode();
        assert_eq!(values.get(FIELD_TYPE), Some("date"));
    }

    #[test]
    fn test_from_field_seeds_every_attribute() {
        let field = CustomField::new("Condition", FieldKind::OptionList, org())
            .with_help_text("Physical condition")
            .required()
            .with_options(vec!["New".to_string()]);
        let draft = FieldDraft::from_field(&field);
        assert_eq!(draft.name, "Condition");
        assert_eq!(draft.help_text, "Physical condition");
        assert_eq!(draft.kind, FieldKind::OptionList);
        assert!(draft.required);
        assert!(draft.active);
        assert_eq!(draft.options, vec!["New"]);
        assert_eq!(draft.organization_id, field.organization_id);
    }

    #[test]
    fn test_form_values_first_wins() {
        let mut values = FormValues::new();
        values.push("name", "first");
        values.push("name", "second");
        assert_eq!(values.get("name"), Some("first"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_indexed_values_sorted_by_index() {
        let mut values = FormValues::new();
        values.push("options[2]", "c");
        values.push("options[0]", "a");
        values.push("options[1]", "b");
        values.push("other[0]", "x");
        assert_eq!(values.indexed_values("options"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_form_values_json_round_trip() {
        let values = option_draft().encode();
        let json = serde_json::to_string(&values).unwrap();
        let back: FormValues = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_option_field_name() {
        assert_eq!(option_field_name(0), "options[0]");
        assert_eq!(option_field_name(12), "options[12]");
    }
}

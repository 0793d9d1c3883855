//! Validation schema for custom-field submissions
//!
//! Maps a submitted [`FormValues`] payload to a typed
//! [`CustomFieldUpsert`], or to a field-name → message error map when one
//! or more fields fail their rule. Errors are field-scoped and
//! independent: a broken name never suppresses or produces errors for
//! unrelated fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trove_core::{FieldKind, OrganizationId};

use crate::custom_field::CustomField;
use crate::form::{
    FIELD_ACTIVE, FIELD_HELP_TEXT, FIELD_NAME, FIELD_OPTIONS, FIELD_ORGANIZATION_ID,
    FIELD_REQUIRED, FIELD_TYPE, FormValues,
};

/// Minimum length of a custom-field name, after trimming
pub const NAME_MIN_LEN: usize = 2;

// ============================================================================
// Field Errors
// ============================================================================

/// Mapping from form-field name to validation error message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    entries: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. The first error per field wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.entry(field.into()).or_insert_with(|| message.into());
    }

    /// The error recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Whether no errors were recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with errors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (field, message) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// Typed Upsert
// ============================================================================

/// Validated, typed output of a custom-field submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldUpsert {
    pub name: String,
    pub help_text: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
    pub active: bool,
    pub options: Vec<String>,
    pub organization_id: OrganizationId,
}

impl CustomFieldUpsert {
    /// Materialize a new custom field from this upsert
    pub fn into_custom_field(self) -> CustomField {
        let mut field = CustomField::new(self.name, self.kind, self.organization_id);
        field.help_text = self.help_text;
        field.required = self.required;
        field.active = self.active;
        field.options = self.options;
        field
    }

    /// Apply this upsert to an existing field.
    ///
    /// The kind is fixed after creation and is left unchanged even when the
    /// submitted payload carries a different token.
    pub fn apply_to(&self, field: &mut CustomField) {
        field.name = self.name.clone();
        field.help_text = self.help_text.clone();
        field.required = self.required;
        field.active = self.active;
        field.options = if field.kind.has_options() {
            self.options.clone()
        } else {
            Vec::new()
        };
        field.touch();
    }
}

// ============================================================================
// Upsert Schema
// ============================================================================

/// The validation schema for custom-field create/edit submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct UpsertSchema;

impl UpsertSchema {
    /// Whether a form field must carry a value, used by the rendering layer
    /// to show the required indicator
    pub fn is_required(field: &str) -> bool {
        matches!(field, FIELD_NAME | FIELD_TYPE | FIELD_ORGANIZATION_ID)
    }

    /// Validate a submitted payload.
    ///
    /// Returns the typed upsert on success, or the per-field error map when
    /// any rule fails.
    pub fn validate(&self, values: &FormValues) -> Result<CustomFieldUpsert, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = values.get(FIELD_NAME).unwrap_or_default().trim().to_string();
        if name.chars().count() < NAME_MIN_LEN {
            errors.insert(
                FIELD_NAME,
                format!("Name must be at least {} characters long", NAME_MIN_LEN),
            );
        }

        let help_text = values
            .get(FIELD_HELP_TEXT)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let kind = match values.get(FIELD_TYPE) {
            Some(token) => match FieldKind::parse_token(token) {
                Some(kind) => Some(kind),
                None => {
                    errors.insert(FIELD_TYPE, format!("Unknown field type '{}'", token));
                    None
                }
            },
            None => {
                errors.insert(FIELD_TYPE, "Field type is required");
                None
            }
        };

        let required = values.checkbox(FIELD_REQUIRED);
        let active = values.checkbox(FIELD_ACTIVE);

        let organization_id = match values.get(FIELD_ORGANIZATION_ID) {
            Some(raw) => match raw.parse::<OrganizationId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.insert(FIELD_ORGANIZATION_ID, "Organization id is not a valid UUID");
                    None
                }
            },
            None => {
                errors.insert(FIELD_ORGANIZATION_ID, "Organization id is missing");
                None
            }
        };

        let options = match kind {
            Some(kind) if kind.has_options() => values.indexed_values(FIELD_OPTIONS),
            _ => Vec::new(),
        };

        match (kind, organization_id) {
            (Some(kind), Some(organization_id)) if errors.is_empty() => Ok(CustomFieldUpsert {
                name,
                help_text,
                kind,
                required,
                active,
                options,
                organization_id,
            }),
            _ => Err(errors),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldDraft;
    use pretty_assertions::assert_eq;

    fn org() -> OrganizationId {
        uuid::Uuid::new_v4()
    }

    fn valid_values(organization_id: OrganizationId) -> FormValues {
        let mut draft = FieldDraft::new(organization_id);
        draft.name = "Serial number".to_string();
        draft.encode()
    }

    #[test]
    fn test_valid_submission() {
        let organization_id = org();
        let upsert = UpsertSchema.validate(&valid_values(organization_id)).unwrap();
        assert_eq!(upsert.name, "Serial number");
        assert_eq!(upsert.help_text, None);
        assert_eq!(upsert.kind, FieldKind::Text);
        assert!(!upsert.required);
        assert!(upsert.active);
        assert!(upsert.options.is_empty());
        assert_eq!(upsert.organization_id, organization_id);
    }

    #[test]
    fn test_empty_name_reports_only_min_length_error() {
        let mut draft = FieldDraft::new(org());
        draft.name = String::new();
        let errors = UpsertSchema.validate(&draft.encode()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FIELD_NAME),
            Some("Name must be at least 2 characters long")
        );
        assert_eq!(errors.get(FIELD_TYPE), None);
        assert_eq!(errors.get(FIELD_ORGANIZATION_ID), None);
    }

    #[test]
    fn test_whitespace_name_fails_min_length() {
        let mut draft = FieldDraft::new(org());
        draft.name = "   ".to_string();
        let errors = UpsertSchema.validate(&draft.encode()).unwrap_err();
        assert!(errors.get(FIELD_NAME).is_some());
    }

    #[test]
    fn test_checkbox_resolution() {
        let organization_id = org();

        let mut values = valid_values(organization_id);
        assert!(!UpsertSchema.validate(&values).unwrap().required);

        values.push(FIELD_REQUIRED, "on");
        assert!(UpsertSchema.validate(&values).unwrap().required);
    }

    #[test]
    fn test_absent_active_resolves_false() {
        let mut draft = FieldDraft::new(org());
        draft.name = "Serial".to_string();
        draft.active = false;
        let upsert = UpsertSchema.validate(&draft.encode()).unwrap();
        assert!(!upsert.active);
    }

    #[test]
    fn test_unknown_type_token() {
        let mut values = FormValues::new();
        values.push(FIELD_NAME, "Serial");
        values.push(FIELD_TYPE, "number");
        values.push(FIELD_ORGANIZATION_ID, org().to_string());
        let errors = UpsertSchema.validate(&values).unwrap_err();
        assert_eq!(errors.get(FIELD_TYPE), Some("Unknown field type 'number'"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_bad_organization_id() {
        let mut values = FormValues::new();
        values.push(FIELD_NAME, "Serial");
        values.push(FIELD_TYPE, "text");
        values.push(FIELD_ORGANIZATION_ID, "not-a-uuid");
        let errors = UpsertSchema.validate(&values).unwrap_err();
        assert_eq!(
            errors.get(FIELD_ORGANIZATION_ID),
            Some("Organization id is not a valid UUID")
        );
    }

    #[test]
    fn test_options_collected_for_option_kind_only() {
        let mut draft = FieldDraft::new(org());
        draft.name = "Condition".to_string();
        draft.kind = FieldKind::OptionList;
        draft.options = vec!["New".to_string(), "Used".to_string()];
        let upsert = UpsertSchema.validate(&draft.encode()).unwrap();
        assert_eq!(upsert.options, vec!["New", "Used"]);

        draft.kind = FieldKind::Boolean;
        let upsert = UpsertSchema.validate(&draft.encode()).unwrap();
        assert!(upsert.options.is_empty());
    }

    #[test]
    fn test_help_text_normalization() {
        let mut draft = FieldDraft::new(org());
        draft.name = "Serial".to_string();
        draft.help_text = "  ".to_string();
        let upsert = UpsertSchema.validate(&draft.encode()).unwrap();
        assert_eq!(upsert.help_text, None);

        draft.help_text = "Printed on the underside".to_string();
        let upsert = UpsertSchema.validate(&draft.encode()).unwrap();
        assert_eq!(
            upsert.help_text.as_deref(),
            Some("Printed on the underside")
        );
    }

    #[test]
    fn test_is_required_predicate() {
        assert!(UpsertSchema::is_required(FIELD_NAME));
        assert!(UpsertSchema::is_required(FIELD_TYPE));
        assert!(UpsertSchema::is_required(FIELD_ORGANIZATION_ID));
        assert!(!UpsertSchema::is_required(FIELD_HELP_TEXT));
        assert!(!UpsertSchema::is_required(FIELD_REQUIRED));
        assert!(!UpsertSchema::is_required(FIELD_ACTIVE));
    }

    #[test]
    fn test_apply_to_keeps_kind() {
        let organization_id = org();
        let mut field = CustomField::new("Condition", FieldKind::OptionList, organization_id)
            .with_options(vec!["New".to_string()]);

        let upsert = CustomFieldUpsert {
            name: "State".to_string(),
            help_text: Some("Physical state".to_string()),
            kind: FieldKind::Text,
            required: true,
            active: false,
            options: vec!["New".to_string(), "Used".to_string()],
            organization_id,
        };
        upsert.apply_to(&mut field);

        assert_eq!(field.kind, FieldKind::OptionList);
        assert_eq!(field.name, "State");
        assert!(field.required);
        assert!(!field.active);
        assert_eq!(field.options, vec!["New", "Used"]);
    }

    #[test]
    fn test_into_custom_field() {
        let organization_id = org();
        let upsert = CustomFieldUpsert {
            name: "Warranty until".to_string(),
            help_text: None,
            kind: FieldKind::Date,
            required: false,
            active: true,
            options: Vec::new(),
            organization_id,
        };
        let field = upsert.into_custom_field();
        assert_eq!(field.name, "Warranty until");
        assert_eq!(field.kind, FieldKind::Date);
        assert!(field.active);
        assert_eq!(field.organization_id, organization_id);
    }
}

//! Custom field entity
//!
//! A custom field is an organization-scoped attribute definition that asset
//! forms render in addition to the built-in attributes. The kind decides the
//! input widget; option-list fields additionally carry an ordered list of
//! choices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trove_core::{
    CustomFieldId, FieldKind, OrganizationId, TroveError, TroveResult, Validatable,
};

use crate::schema::NAME_MIN_LEN;

// ============================================================================
// Custom Field
// ============================================================================

/// A custom field definition owned by an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    /// Unique identifier
    pub id: CustomFieldId,

    /// Short display name, shown as the label on asset forms
    pub name: String,

    /// Optional guidance shown next to the input on asset forms.
    /// `None` is the explicit no-value marker the backend persists.
    pub help_text: Option<String>,

    /// Which input the field renders as
    pub kind: FieldKind,

    /// Whether asset forms require a value for this field
    pub required: bool,

    /// Inactive fields are kept for historic data but no longer rendered
    pub active: bool,

    /// Ordered option list; only meaningful when `kind` is `OptionList`
    pub options: Vec<String>,

    /// Owning tenant
    pub organization_id: OrganizationId,

    /// When the field was created
    pub created_at: DateTime<Utc>,

    /// When the field was last modified
    pub updated_at: DateTime<Utc>,
}

impl CustomField {
    /// Create a new custom field with defaults (active, not required)
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        organization_id: OrganizationId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            help_text: None,
            kind,
            required: false,
            active: true,
            options: Vec::new(),
            organization_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: set the help text
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Builder: mark the field as required on asset forms
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Builder: mark the field as inactive
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Builder: set the option list
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// The option list as consumers see it: empty for every kind that
    /// does not carry options, regardless of what is stored.
    pub fn effective_options(&self) -> &[String] {
        if self.kind.has_options() {
            &self.options
        } else {
            &[]
        }
    }

    /// Label suffix shown in listings, e.g. "Option list (3 options)"
    pub fn kind_label(&self) -> String {
        if self.kind.has_options() {
            format!(
                "{} ({} options)",
                self.kind.display_name(),
                self.options.len()
            )
        } else {
            self.kind.display_name().to_string()
        }
    }
}

impl Validatable for CustomField {
    fn validate(&self) -> TroveResult<()> {
        if self.name.trim().len() < NAME_MIN_LEN {
            return Err(TroveError::field_validation(
                "name",
                format!("Name must be at least {} characters long", NAME_MIN_LEN),
            ));
        }
        if self.kind.has_options() && self.options.is_empty() {
            return Err(TroveError::field_validation(
                "options",
                "Option-list fields need at least one option",
            ));
        }
        Ok(())
    }
}

impl PartialEq for CustomField {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CustomField {}

impl std::hash::Hash for CustomField {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
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

    #[test]
    fn test_new_field_defaults() {
        let field = CustomField::new("Serial number", FieldKind::Text, org());
        assert!(field.active);
        assert!(!field.required);
        assert!(field.help_text.is_none());
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_builders() {
        let field = CustomField::new("Condition", FieldKind::OptionList, org())
            .with_help_text("Current physical condition")
            .required()
            .with_options(vec!["New".to_string(), "Used".to_string()]);
        assert!(field.required);
        assert_eq!(field.help_text.as_deref(), Some("Current physical condition"));
        assert_eq!(field.options.len(), 2);
    }

    #[test]
    fn test_effective_options_ignored_for_other_kinds() {
        let mut field = CustomField::new("Warranty", FieldKind::Date, org());
        field.options = vec!["stale".to_string()];
        assert!(field.effective_options().is_empty());

        field.kind = FieldKind::OptionList;
        assert_eq!(field.effective_options(), ["stale".to_string()]);
    }

    #[test]
    fn test_validate_name_too_short() {
        let field = CustomField::new("", FieldKind::Text, org());
        let err = field.validate().unwrap_err();
        assert!(err.is_validation());

        let field = CustomField::new("  x  ", FieldKind::Text, org());
        assert!(!field.is_valid());
    }

    #[test]
    fn test_validate_option_list_needs_options() {
        let field = CustomField::new("Condition", FieldKind::OptionList, org());
        assert!(!field.is_valid());

        let field = field.with_options(vec!["New".to_string()]);
        assert!(field.is_valid());
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = CustomField::new("Serial", FieldKind::Text, org());
        let mut b = a.clone();
        b.name = "Renamed".to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_kind_label() {
        let field = CustomField::new("Condition", FieldKind::OptionList, org())
            .with_options(vec!["New".to_string(), "Used".to_string()]);
        assert_eq!(field.kind_label(), "Option list (2 options)");

        let field = CustomField::new("Notes", FieldKind::MultilineText, org());
        assert_eq!(field.kind_label(), "Multi-line text");
    }
}

//! Core types used throughout Trove
//!
//! This module contains the fundamental types shared by the model layer
//! and the UI: identifier aliases, the closed set of custom-field kinds,
//! and the checkbox wire-value encoding.

use serde::{Deserialize, Serialize};

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for custom-field unique identifiers
pub type CustomFieldId = uuid::Uuid;

/// Type alias for organization (tenant) unique identifiers
pub type OrganizationId = uuid::Uuid;

// ============================================================================
// Checkbox Encoding
// ============================================================================

/// Wire value a checked checkbox-style control submits
pub const CHECKBOX_ON: &str = "on";

/// Decode a checkbox-style submitted value: "on" maps to true, anything
/// else (including an absent field) maps to false.
pub fn checkbox_checked(value: Option<&str>) -> bool {
    matches!(value, Some(CHECKBOX_ON))
}

// ============================================================================
// Field Kinds
// ============================================================================

/// The closed set of custom-field kinds an organization can define.
///
/// The kind decides which input an asset form renders for the field and
/// whether the field carries an option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldKind {
    /// Single-line free text
    #[default]
    Text,
    /// Multi-line free text
    MultilineText,
    /// True/false toggle
    Boolean,
    /// Calendar date
    Date,
    /// Single choice from a fixed option list
    OptionList,
}

impl FieldKind {
    /// All kinds in display order
    pub fn all() -> &'static [FieldKind] {
        &[
            FieldKind::Text,
            FieldKind::MultilineText,
            FieldKind::Boolean,
            FieldKind::Date,
            FieldKind::OptionList,
        ]
    }

    /// Stable wire token for this kind, as submitted in the `type` form field
    pub fn token(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::MultilineText => "multiline_text",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::OptionList => "option",
        }
    }

    /// Parse a wire token back into a kind
    pub fn parse_token(token: &str) -> Option<FieldKind> {
        match token {
            "text" => Some(FieldKind::Text),
            "multiline_text" => Some(FieldKind::MultilineText),
            "boolean" => Some(FieldKind::Boolean),
            "date" => Some(FieldKind::Date),
            "option" => Some(FieldKind::OptionList),
            _ => None,
        }
    }

    /// Human-readable name for selectors and listings
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Single-line text",
            FieldKind::MultilineText => "Multi-line text",
            FieldKind::Boolean => "Boolean",
            FieldKind::Date => "Date",
            FieldKind::OptionList => "Option list",
        }
    }

    /// Helper blurb shown under the kind selector
    pub fn helper_text(&self) -> &'static str {
        match self {
            FieldKind::Text => "A short free-form value, rendered as a single-line input.",
            FieldKind::MultilineText => "Longer free-form text, rendered as a text area.",
            FieldKind::Boolean => "A yes/no value, rendered as a checkbox.",
            FieldKind::Date => "A calendar date, rendered with a date picker.",
            FieldKind::OptionList => {
                "A single choice from a list of options you define below."
            }
        }
    }

    /// Whether this kind carries an option list
    pub fn has_options(&self) -> bool {
        matches!(self, FieldKind::OptionList)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_token_round_trip() {
        for kind in FieldKind::all() {
            assert_eq!(FieldKind::parse_token(kind.token()), Some(*kind));
        }
    }

    #[test]
    fn test_parse_unknown_token() {
        assert_eq!(FieldKind::parse_token("number"), None);
        assert_eq!(FieldKind::parse_token(""), None);
        assert_eq!(FieldKind::parse_token("TEXT"), None);
    }

    #[test]
    fn test_default_kind() {
        assert_eq!(FieldKind::default(), FieldKind::Text);
    }

    #[test]
    fn test_only_option_list_has_options() {
        for kind in FieldKind::all() {
            assert_eq!(kind.has_options(), *kind == FieldKind::OptionList);
        }
    }

    #[test]
    fn test_display_uses_token() {
        assert_eq!(FieldKind::MultilineText.to_string(), "multiline_text");
        assert_eq!(FieldKind::OptionList.to_string(), "option");
    }

    #[test]
    fn test_checkbox_checked() {
        assert!(checkbox_checked(Some("on")));
        assert!(!checkbox_checked(Some("off")));
        assert!(!checkbox_checked(Some("")));
        assert!(!checkbox_checked(None));
    }
}

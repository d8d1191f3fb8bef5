//! Display and validation metadata per data type.
//!
//! Pure lookup functions over the closed [`DataType`] set. Every match here
//! is exhaustive with no fallback arm, so adding a data type is a compile
//! error in this module rather than a silent default at runtime.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::icons::{IconRef, IconResolver};
use crate::localize::Localizer;
use crate::types::DataType;

/// Pattern for numeric attribute values: optional sign, optional fraction.
static NUMERIC_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("invalid numeric value pattern"));

/// Localized display label for a data type.
pub fn display_name(data_type: DataType, localizer: &dyn Localizer) -> String {
    match data_type {
        DataType::Boolean => localizer.translate("Boolean"),
        DataType::Number => localizer.translate("Number"),
        DataType::String => localizer.translate("Text"),
        DataType::List => localizer.translate("List"),
    }
}

/// Icon for a data type.
///
/// A keyword that resolves through the host's icon set wins over the
/// per-type default, whatever the type.
pub fn icon_for(data_type: DataType, keyword: Option<&str>, icons: &dyn IconResolver) -> IconRef {
    if let Some(found) = keyword.and_then(|k| icons.find_by_keyword(k)) {
        return found;
    }

    match data_type {
        DataType::Boolean => IconRef::named("done"),
        DataType::Number => IconRef::named("hashtag"),
        DataType::String => IconRef::named("case-sensitive"),
        DataType::List => IconRef::named("table-of-contents"),
    }
}

/// Input validation pattern for values of a data type.
///
/// Only numeric attributes carry a pattern. Advisory for input-level
/// validation in the host; the draft editor never enforces it.
pub fn validation_pattern_for(data_type: DataType) -> Option<&'static Regex> {
    match data_type {
        DataType::Number => Some(&NUMERIC_VALUE),
        DataType::Boolean | DataType::String | DataType::List => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolver that only knows the "number" keyword.
    struct NumberOnly;

    impl IconResolver for NumberOnly {
        fn find_by_keyword(&self, keyword: &str) -> Option<IconRef> {
            (keyword == "number").then(|| IconRef::named("hashtag"))
        }
    }

    fn passthrough(key: &str) -> String {
        key.to_string()
    }

    #[test]
    fn display_names_use_localization_keys() {
        assert_eq!(display_name(DataType::Boolean, &passthrough), "Boolean");
        assert_eq!(display_name(DataType::Number, &passthrough), "Number");
        assert_eq!(display_name(DataType::String, &passthrough), "Text");
        assert_eq!(display_name(DataType::List, &passthrough), "List");
    }

    #[test]
    fn display_names_are_translated() {
        let german = |key: &str| match key {
            "Number" => "Zahl".to_string(),
            other => other.to_string(),
        };
        assert_eq!(display_name(DataType::Number, &german), "Zahl");
    }

    #[test]
    fn every_type_has_a_default_icon() {
        for data_type in DataType::ALL {
            let icon = icon_for(data_type, None, &NumberOnly);
            assert!(!icon.name().is_empty());
        }
    }

    #[test]
    fn default_icons_per_type() {
        assert_eq!(icon_for(DataType::Boolean, None, &NumberOnly).name(), "done");
        assert_eq!(icon_for(DataType::Number, None, &NumberOnly).name(), "hashtag");
        assert_eq!(
            icon_for(DataType::String, None, &NumberOnly).name(),
            "case-sensitive"
        );
        assert_eq!(
            icon_for(DataType::List, None, &NumberOnly).name(),
            "table-of-contents"
        );
    }

    #[test]
    fn keyword_match_beats_type_default() {
        let icon = icon_for(DataType::Boolean, Some("number"), &NumberOnly);
        assert_eq!(icon.name(), "hashtag");
    }

    #[test]
    fn unresolved_keyword_falls_back_to_type_default() {
        let icon = icon_for(DataType::Boolean, Some("no-such-keyword"), &NumberOnly);
        assert_eq!(icon.name(), "done");
    }

    #[test]
    fn only_number_has_a_validation_pattern() {
        assert!(validation_pattern_for(DataType::Number).is_some());
        assert!(validation_pattern_for(DataType::Boolean).is_none());
        assert!(validation_pattern_for(DataType::String).is_none());
        assert!(validation_pattern_for(DataType::List).is_none());
    }

    #[test]
    fn numeric_pattern_accepts_signed_and_fractional() {
        let pattern = validation_pattern_for(DataType::Number).unwrap();
        for value in ["12.5", "-3", "10", "0", "-0.25"] {
            assert!(pattern.is_match(value), "should match {value}");
        }
        for value in ["abc", "", "1.2.3", "1.", ".5", "2e3", "- 1"] {
            assert!(!pattern.is_match(value), "should not match {value}");
        }
    }
}

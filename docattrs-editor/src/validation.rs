//! Draft validation results.
//!
//! Validity is derived from the current draft on demand — the host UI calls
//! [`AttributeDraft::validate`](crate::AttributeDraft::validate) after each
//! operation instead of observing mutations through a watcher graph.

/// Why a single field is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    /// The field is required and empty.
    Required,
    /// The field exceeds its maximum length.
    TooLong { max: usize },
}

/// Per-field validity of a draft.
///
/// An empty or all-blank options list on a list attribute is deliberately
/// not flagged here; the persistence layer owns that check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftValidation {
    pub name: Option<FieldIssue>,
    pub description: Option<FieldIssue>,
}

impl DraftValidation {
    /// True when no field is invalid.
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(DraftValidation::default().is_valid());
    }

    #[test]
    fn any_issue_invalidates() {
        let validation = DraftValidation {
            name: Some(FieldIssue::Required),
            description: None,
        };
        assert!(!validation.is_valid());

        let validation = DraftValidation {
            name: None,
            description: Some(FieldIssue::TooLong { max: 1000 }),
        };
        assert!(!validation.is_valid());
    }
}

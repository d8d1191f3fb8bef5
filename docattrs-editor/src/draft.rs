//! The mutable draft of an attribute definition.
//!
//! A draft lives for exactly one edit session: seeded from a persisted
//! attribute (edit) or from defaults (create), mutated by the operations
//! below, then finalized into an immutable [`SubmittableAttribute`]. The
//! options list exists exactly when the data type is `List`;
//! [`AttributeDraft::set_data_type`] is the only operation that creates or
//! drops it.

use docattrs_schema::{
    AttributeLimits, DataAttribute, DataType, OptionEntry, OptionsPayload, SubmittableAttribute,
};
use ulid::Ulid;

use crate::error::{EditorError, Result};
use crate::validation::{DraftValidation, FieldIssue};

/// In-progress state of an attribute being created or edited.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDraft {
    id: Option<Ulid>,
    name: String,
    description: String,
    data_type: DataType,
    options: Option<OptionsPayload>,
    pinned: bool,
    limits: AttributeLimits,
}

impl AttributeDraft {
    /// Create-mode draft with all defaults: empty name and description,
    /// `String` type, no options, unpinned.
    pub fn new(limits: AttributeLimits) -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            data_type: DataType::default(),
            options: None,
            pinned: false,
            limits,
        }
    }

    /// Edit-mode draft seeded from a persisted attribute.
    pub fn from_attribute(attribute: &DataAttribute, limits: AttributeLimits) -> Self {
        Self {
            id: Some(attribute.id),
            name: attribute.name.clone(),
            description: attribute.description.clone().unwrap_or_default(),
            data_type: attribute.data_type,
            options: attribute.options.clone(),
            pinned: attribute.pinned,
            limits,
        }
    }

    // --- Accessors ---

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The option entries, present only while the data type is `List`.
    pub fn options(&self) -> Option<&[OptionEntry]> {
        self.options.as_ref().map(|payload| payload.options.as_slice())
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn limits(&self) -> AttributeLimits {
        self.limits
    }

    /// True when this draft edits an existing attribute.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// True when the host should render the options editor.
    pub fn options_visible(&self) -> bool {
        self.data_type == DataType::List
    }

    // --- Field operations ---

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    /// Switch the data type.
    ///
    /// Entering `List` from any other type (or with options missing) resets
    /// the options to a single empty entry; leaving `List` drops them.
    pub fn set_data_type(&mut self, data_type: DataType) {
        let entering_list = data_type == DataType::List
            && (self.data_type != DataType::List || self.options.is_none());
        self.data_type = data_type;

        if entering_list {
            self.options = Some(OptionsPayload {
                options: vec![OptionEntry::empty()],
            });
        } else if data_type != DataType::List {
            self.options = None;
        }
    }

    // --- Options operations ---

    /// Replace the value of one option entry, leaving every other entry and
    /// the list length untouched.
    pub fn set_option_value(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let entries = match self.options.as_mut() {
            Some(payload) => &mut payload.options,
            None => return Err(EditorError::OptionIndexOutOfRange { index, len: 0 }),
        };
        let len = entries.len();
        match entries.get_mut(index) {
            Some(entry) => {
                entry.value = value.into();
                Ok(())
            }
            None => Err(EditorError::OptionIndexOutOfRange { index, len }),
        }
    }

    /// Append one empty option entry. Returns false and leaves the draft
    /// unchanged when the list is at capacity or the type has no options.
    pub fn append_option(&mut self) -> bool {
        if !self.can_append_option() {
            return false;
        }
        if let Some(payload) = self.options.as_mut() {
            payload.options.push(OptionEntry::empty());
            return true;
        }
        false
    }

    /// Whether another option may be appended — drives the disabled state
    /// of the host's add button.
    pub fn can_append_option(&self) -> bool {
        match &self.options {
            Some(payload) => payload.options.len() < self.limits.max_options,
            None => false,
        }
    }

    // --- Validation and finalize ---

    /// Derive per-field validity from the current state.
    pub fn validate(&self) -> DraftValidation {
        let mut validation = DraftValidation::default();

        if self.name.is_empty() {
            validation.name = Some(FieldIssue::Required);
        } else if self.name.chars().count() > self.limits.max_name_length {
            validation.name = Some(FieldIssue::TooLong {
                max: self.limits.max_name_length,
            });
        }

        if self.description.chars().count() > self.limits.max_description_length {
            validation.description = Some(FieldIssue::TooLong {
                max: self.limits.max_description_length,
            });
        }

        validation
    }

    /// Produce the immutable submit payload.
    ///
    /// Fails with [`EditorError::InvalidDraft`] when any field is invalid.
    /// Options are carried only for `List` attributes; an empty description
    /// is submitted as absent.
    pub fn finalize(&self) -> Result<SubmittableAttribute> {
        let validation = self.validate();
        if !validation.is_valid() {
            return Err(EditorError::InvalidDraft(validation));
        }

        Ok(SubmittableAttribute {
            id: self.id,
            name: self.name.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            data_type: self.data_type,
            options: if self.data_type == DataType::List {
                self.options.clone()
            } else {
                None
            },
            pinned: self.pinned,
        })
    }
}

//! Core attribute types.
//!
//! All types serialize via serde. [`DataAttribute`] is the persisted record
//! an edit session is seeded from; [`SubmittableAttribute`] is the
//! immutable payload a finalized draft hands to the persistence client.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// The type of a data attribute — determines what shape its values take.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Boolean,
    Number,
    #[default]
    String,
    List,
}

impl DataType {
    /// Every data type, in display order. Hosts build the type select menu
    /// from this rather than hard-coding variants.
    pub const ALL: [DataType; 4] = [
        DataType::Boolean,
        DataType::Number,
        DataType::String,
        DataType::List,
    ];
}

/// A single selectable value of a list attribute.
///
/// Order is display order. Duplicate values are permitted here; uniqueness
/// is a persistence-layer concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionEntry {
    pub value: String,
}

impl OptionEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// An entry with no value yet, as created by the editor.
    pub fn empty() -> Self {
        Self {
            value: String::new(),
        }
    }
}

/// The options of a list attribute. Present exactly when the data type is
/// [`DataType::List`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionsPayload {
    pub options: Vec<OptionEntry>,
}

/// A persisted data attribute — a typed metadata field attachable to
/// documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataAttribute {
    pub id: Ulid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsPayload>,
    #[serde(default)]
    pub pinned: bool,
}

/// An immutable submit payload produced from a finalized draft.
///
/// `id` is `None` when creating a new attribute and `Some` when updating an
/// existing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmittableAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Ulid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsPayload>,
    #[serde(default)]
    pub pinned: bool,
}

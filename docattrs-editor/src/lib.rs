//! Attribute draft editing state machine
//!
//! `docattrs-editor` manages the in-progress state of a single attribute
//! definition: typed field edits, the data-type switch that re-shapes the
//! options list, bounded option CRUD, validity derived on demand, and a
//! single-submission-at-a-time hand-off to the host's persistence client.
//!
//! The crate renders nothing and stores nothing. The host UI owns the
//! widgets and re-reads validity after each operation; the persistence
//! client owns the network.
//!
//! ## Basic usage
//!
//! ```rust
//! use docattrs_editor::AttributeDraft;
//! use docattrs_schema::{AttributeLimits, DataType};
//!
//! let mut draft = AttributeDraft::new(AttributeLimits::default());
//! draft.set_name("Priority");
//! draft.set_data_type(DataType::List);
//! draft.set_option_value(0, "High")?;
//! draft.append_option();
//! draft.set_option_value(1, "Low")?;
//! assert!(draft.validate().is_valid());
//! # Ok::<(), docattrs_editor::EditorError>(())
//! ```
//!
//! A draft lives inside an [`EditSession`] together with the persistence
//! client; [`EditSession::submit`] finalizes and hands off the draft while
//! guarding against a second submission racing the first.

pub mod draft;
pub mod error;
pub mod session;
pub mod validation;

pub use draft::AttributeDraft;
pub use error::{EditorError, PersistenceError, Result};
pub use session::{EditSession, PersistenceClient};
pub use validation::{DraftValidation, FieldIssue};

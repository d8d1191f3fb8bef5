//! Attribute schema types and the per-type display catalog
//!
//! `docattrs-schema` is a standalone, schema-only crate: it owns the shape
//! of a data attribute (a typed metadata field attachable to documents) and
//! the pure lookup tables that hang off its type — display names, icons,
//! and input validation patterns. It holds no editing state and performs no
//! I/O; the draft editor and any renderer consume it.
//!
//! # Architecture
//!
//! - **Closed type set**: [`DataType`] is a closed enum and every catalog
//!   lookup matches it exhaustively, so a new data type is a compile error
//!   rather than a silent fallback
//! - **Injected collaborators**: localization ([`Localizer`]) and icon
//!   lookup ([`IconResolver`]) are capabilities passed in by the host, not
//!   global registries
//! - **Wire-ready**: all schema types serialize via serde

pub mod catalog;
pub mod icons;
pub mod limits;
pub mod localize;
pub mod types;

pub use catalog::{display_name, icon_for, validation_pattern_for};
pub use icons::{IconRef, IconResolver};
pub use limits::AttributeLimits;
pub use localize::Localizer;
pub use types::{DataAttribute, DataType, OptionEntry, OptionsPayload, SubmittableAttribute};

//! Icon lookup seam.
//!
//! The host application owns the actual icon set; this crate only names
//! icons and asks the host whether a free-text keyword maps to one. The
//! lookup is an injected capability, never a global registry.

/// Name of an icon in the host application's icon set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef(String);

impl IconRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Resolves free-text keywords to icons in the host's icon set.
pub trait IconResolver {
    /// The icon a keyword maps to, if any.
    fn find_by_keyword(&self, keyword: &str) -> Option<IconRef>;
}

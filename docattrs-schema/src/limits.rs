//! Configured limits for attribute definitions.

/// Length and count limits the draft editor enforces.
///
/// Limits count Unicode scalar values, not bytes. The defaults are the
/// compiled-in product limits; hosts may inject their own at draft
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLimits {
    /// Maximum length of an attribute name.
    pub max_name_length: usize,
    /// Maximum length of an attribute description.
    pub max_description_length: usize,
    /// Maximum number of options on a list attribute.
    pub max_options: usize,
}

impl Default for AttributeLimits {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            max_description_length: 1000,
            max_options: 50,
        }
    }
}

//! A single key/value translation pair.

use crate::key::TranslationKey;

/// One translation pair in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry {
    /// The dotted key.
    pub key: TranslationKey,
    /// The translated text, verbatim.
    pub value: &'static str,
}

impl TranslationEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(key: TranslationKey, value: &'static str) -> Self {
        Self { key, value }
    }
}

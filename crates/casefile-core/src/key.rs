//! Dotted translation keys such as `clue.c1.title`.

use std::fmt;

/// Top-level key segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Clue entries, rendered as `clue`.
    Clue,
    /// Location entries, rendered as `loc`.
    Location,
}

impl Namespace {
    /// Returns the key segment for this namespace.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clue => "clue",
            Self::Location => "loc",
        }
    }
}

/// Trailing key segment naming which text of an item is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Short clue title.
    Title,
    /// Long description (clues and locations).
    Desc,
    /// Document or report text attached to a clue.
    Content,
    /// Location display name.
    Name,
}

impl Field {
    /// Returns the key segment for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Desc => "desc",
            Self::Content => "content",
            Self::Name => "name",
        }
    }
}

/// A translation key: `<namespace>.<id>.<field>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationKey {
    /// The key namespace.
    pub namespace: Namespace,
    /// The clue or location identifier.
    pub id: &'static str,
    /// The translated field.
    pub field: Field,
}

impl TranslationKey {
    /// Creates a key in the `clue` namespace.
    #[must_use]
    pub fn clue(id: &'static str, field: Field) -> Self {
        Self {
            namespace: Namespace::Clue,
            id,
            field,
        }
    }

    /// Creates a key in the `loc` namespace.
    #[must_use]
    pub fn location(id: &'static str, field: Field) -> Self {
        Self {
            namespace: Namespace::Location,
            id,
            field,
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.namespace.as_str(),
            self.id,
            self.field.as_str()
        )
    }
}

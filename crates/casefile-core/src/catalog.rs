//! The four ordered tables a translation catalog is made of.
//!
//! Every table is a slice, so insertion order is slice order. Lookups scan
//! linearly and return the first match; the tables are a few dozen rows.

/// A location record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Location identifier (`loc1`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Long description.
    pub description: &'static str,
}

/// An ordered `id -> text` table.
pub type ClueTable = &'static [(&'static str, &'static str)];

/// Static translation data for one language.
///
/// Description and content ids are expected to also appear in the title
/// table, but nothing enforces it.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    /// Clue titles; drives clue emission order.
    pub clue_titles: ClueTable,
    /// Clue descriptions, for a subset of clues.
    pub clue_descriptions: ClueTable,
    /// Clue document contents, for a small subset of clues.
    pub clue_contents: ClueTable,
    /// Locations, in emission order.
    pub locations: &'static [Location],
}

impl Catalog {
    /// Returns the description for `clue_id`, if the table has one.
    #[must_use]
    pub fn description(&self, clue_id: &str) -> Option<&'static str> {
        lookup(self.clue_descriptions, clue_id)
    }

    /// Returns the document content for `clue_id`, if the table has one.
    #[must_use]
    pub fn content(&self, clue_id: &str) -> Option<&'static str> {
        lookup(self.clue_contents, clue_id)
    }

    /// Returns whether `clue_id` has a title.
    #[must_use]
    pub fn has_title(&self, clue_id: &str) -> bool {
        lookup(self.clue_titles, clue_id).is_some()
    }
}

fn lookup(table: ClueTable, id: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == id)
        .map(|&(_, value)| value)
}

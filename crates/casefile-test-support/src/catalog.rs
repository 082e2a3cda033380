//! Synthetic catalogs for tests.

use casefile_core::catalog::{Catalog, Location};

/// A small catalog covering every optional-field combination.
///
/// `a` has a title only, `b` has a description, `c` has a content only, and
/// `d` has all three.
#[must_use]
pub fn minimal_catalog() -> Catalog {
    Catalog {
        clue_titles: &[("a", "Alpha"), ("b", "Bravo"), ("c", "Charlie"), ("d", "Delta")],
        clue_descriptions: &[("b", "Bravo desc"), ("d", "Delta desc")],
        clue_contents: &[("c", "Charlie doc"), ("d", "Delta doc")],
        locations: &[
            Location {
                id: "loc2",
                name: "Second",
                description: "Listed first",
            },
            Location {
                id: "loc1",
                name: "First",
                description: "Listed second",
            },
        ],
    }
}

/// A catalog with an orphan description, an orphan content and duplicate ids.
#[must_use]
pub fn inconsistent_catalog() -> Catalog {
    Catalog {
        clue_titles: &[("c1", "One"), ("c1", "One again")],
        clue_descriptions: &[("c1", "One desc"), ("c9", "Nobody's desc")],
        clue_contents: &[("c7", "Nobody's doc")],
        locations: &[
            Location {
                id: "loc1",
                name: "Hall",
                description: "A hall.",
            },
            Location {
                id: "loc1",
                name: "Hall again",
                description: "Another hall.",
            },
        ],
    }
}

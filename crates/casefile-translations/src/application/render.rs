//! The translation-entry emission pass.
//!
//! Output is meant to be pasted into the object literal of the game's
//! `translations.ts`, so every line is four-space indented and ends with a
//! comma. Values are written verbatim.

use std::io::Write;

use casefile_core::catalog::{Catalog, Location};
use casefile_core::entry::TranslationEntry;
use casefile_core::error::CatalogError;
use casefile_core::key::{Field, TranslationKey};
use tracing::debug;

/// Header line preceding the clue block.
pub const CLUE_HEADER: &str = "// Traductions françaises à ajouter :";

/// Header line preceding the location block.
pub const LOCATION_HEADER: &str = "// Locations :";

/// Entries for one clue: title, then description and content when present.
#[must_use]
pub fn clue_block(
    catalog: &Catalog,
    id: &'static str,
    title: &'static str,
) -> Vec<TranslationEntry> {
    let mut block = vec![TranslationEntry::new(
        TranslationKey::clue(id, Field::Title),
        title,
    )];
    if let Some(desc) = catalog.description(id) {
        block.push(TranslationEntry::new(TranslationKey::clue(id, Field::Desc), desc));
    }
    if let Some(content) = catalog.content(id) {
        block.push(TranslationEntry::new(
            TranslationKey::clue(id, Field::Content),
            content,
        ));
    }
    block
}

/// Entries for one location: name, then description.
#[must_use]
pub fn location_block(location: &Location) -> [TranslationEntry; 2] {
    [
        TranslationEntry::new(
            TranslationKey::location(location.id, Field::Name),
            location.name,
        ),
        TranslationEntry::new(
            TranslationKey::location(location.id, Field::Desc),
            location.description,
        ),
    ]
}

/// Returns every entry of the catalog in emission order.
#[must_use]
pub fn render_entries(catalog: &Catalog) -> Vec<TranslationEntry> {
    let mut entries = Vec::new();
    for &(id, title) in catalog.clue_titles {
        entries.extend(clue_block(catalog, id, title));
    }
    for location in catalog.locations {
        entries.extend(location_block(location));
    }
    entries
}

/// Formats one entry as a `translations.ts` object-literal line.
#[must_use]
pub fn entry_line(entry: &TranslationEntry) -> String {
    format!("    '{}': '{}',", entry.key, entry.value)
}

/// Writes the catalog in `translations.ts` line format and returns the
/// number of entries written.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the writer rejects a write.
pub fn write_translations<W: Write>(
    catalog: &Catalog,
    out: &mut W,
) -> Result<usize, CatalogError> {
    let mut written = 0;

    writeln!(out, "{CLUE_HEADER}\n")?;
    for &(id, title) in catalog.clue_titles {
        let block = clue_block(catalog, id, title);
        debug!(clue_id = id, lines = block.len(), "writing clue block");
        written += write_block(out, &block)?;
    }

    writeln!(out, "\n{LOCATION_HEADER}")?;
    for location in catalog.locations {
        debug!(location_id = location.id, "writing location block");
        written += write_block(out, &location_block(location))?;
    }

    Ok(written)
}

fn write_block<W: Write>(
    out: &mut W,
    block: &[TranslationEntry],
) -> Result<usize, CatalogError> {
    for entry in block {
        writeln!(out, "{}", entry_line(entry))?;
    }
    writeln!(out)?;
    Ok(block.len())
}

#[cfg(test)]
mod tests {
    use casefile_core::catalog::Catalog;
    use casefile_core::entry::TranslationEntry;
    use casefile_core::error::CatalogError;
    use casefile_core::key::{Field, TranslationKey};
    use casefile_test_support::{FailingWriter, lines_for, minimal_catalog, separator_count};

    use super::{entry_line, render_entries, write_translations};

    fn render(catalog: &Catalog) -> String {
        let mut buffer = Vec::new();
        write_translations(catalog, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_translations_exact_output() {
        // Arrange
        let catalog = minimal_catalog();

        // Act
        let output = render(&catalog);

        // Assert
        let expected = "\
// Traductions françaises à ajouter :

    'clue.a.title': 'Alpha',

    'clue.b.title': 'Bravo',
    'clue.b.desc': 'Bravo desc',

    'clue.c.title': 'Charlie',
    'clue.c.content': 'Charlie doc',

    'clue.d.title': 'Delta',
    'clue.d.desc': 'Delta desc',
    'clue.d.content': 'Delta doc',


// Locations :
    'loc.loc2.name': 'Second',
    'loc.loc2.desc': 'Listed first',

    'loc.loc1.name': 'First',
    'loc.loc1.desc': 'Listed second',

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_write_translations_returns_entry_count() {
        // Arrange
        let catalog = minimal_catalog();
        let mut buffer = Vec::new();

        // Act
        let written = write_translations(&catalog, &mut buffer).unwrap();

        // Assert
        assert_eq!(written, render_entries(&catalog).len());
        assert_eq!(written, 12);
    }

    #[test]
    fn test_content_follows_title_when_description_absent() {
        let output = render(&minimal_catalog());

        assert_eq!(
            lines_for(&output, "clue.c"),
            vec![
                "    'clue.c.title': 'Charlie',",
                "    'clue.c.content': 'Charlie doc',",
            ]
        );
    }

    #[test]
    fn test_separator_per_clue_and_location() {
        let catalog = minimal_catalog();

        let output = render(&catalog);

        assert_eq!(
            separator_count(&output),
            catalog.clue_titles.len() + catalog.locations.len()
        );
    }

    #[test]
    fn test_location_order_follows_table_not_id() {
        let output = render(&minimal_catalog());

        let second = output.find("'loc.loc2.name'").unwrap();
        let first = output.find("'loc.loc1.name'").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_entry_line_keeps_apostrophes_verbatim() {
        let entry = TranslationEntry::new(
            TranslationKey::clue("c3", Field::Title),
            "Marques d'injection",
        );

        assert_eq!(entry_line(&entry), "    'clue.c3.title': 'Marques d'injection',");
    }

    #[test]
    fn test_write_translations_surfaces_io_error() {
        // Arrange
        let mut writer = FailingWriter;

        // Act
        let result = write_translations(&minimal_catalog(), &mut writer);

        // Assert
        match result {
            Err(CatalogError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}

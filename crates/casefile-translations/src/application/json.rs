//! JSON rendering of the catalog as one flat key/value object.

use std::io::Write;

use casefile_core::catalog::Catalog;
use casefile_core::entry::TranslationEntry;
use casefile_core::error::CatalogError;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::application::render::render_entries;

/// Serializes entries as a map, preserving emission order.
struct OrderedEntries<'a>(&'a [TranslationEntry]);

impl Serialize for OrderedEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.key.to_string(), entry.value)?;
        }
        map.end()
    }
}

/// Writes the catalog as a pretty-printed JSON object and returns the number
/// of entries written.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the writer rejects a write, or
/// `CatalogError::Serialization` if encoding fails.
pub fn write_json<W: Write>(catalog: &Catalog, out: &mut W) -> Result<usize, CatalogError> {
    let entries = render_entries(catalog);
    serde_json::to_writer_pretty(&mut *out, &OrderedEntries(&entries)).map_err(|e| {
        if e.is_io() {
            CatalogError::Io(e.into())
        } else {
            CatalogError::Serialization(e.to_string())
        }
    })?;
    writeln!(out)?;
    Ok(entries.len())
}

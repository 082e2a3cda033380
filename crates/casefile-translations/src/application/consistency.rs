//! Cross-table checks over a catalog.
//!
//! Findings are informational. Emission never depends on them.

use std::collections::HashSet;
use std::fmt;

use casefile_core::catalog::{Catalog, ClueTable};

/// The catalog table a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// Clue titles.
    ClueTitles,
    /// Clue descriptions.
    ClueDescriptions,
    /// Clue document contents.
    ClueContents,
    /// Locations.
    Locations,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ClueTitles => "clue titles",
            Self::ClueDescriptions => "clue descriptions",
            Self::ClueContents => "clue contents",
            Self::Locations => "locations",
        })
    }
}

/// A single inconsistency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A description or content row whose id has no title; it is never printed.
    Orphan {
        /// Table holding the orphan row.
        table: Table,
        /// The orphan id.
        id: &'static str,
    },
    /// An id listed more than once in one table; only the first row is used.
    Duplicate {
        /// Table holding the duplicate.
        table: Table,
        /// The duplicated id.
        id: &'static str,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orphan { table, id } => write!(f, "{id} in {table} has no clue title"),
            Self::Duplicate { table, id } => write!(f, "{id} appears more than once in {table}"),
        }
    }
}

/// Result of checking a catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Findings in table order.
    pub findings: Vec<Finding>,
}

impl ConsistencyReport {
    /// Returns whether no findings were recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Checks a catalog for orphan rows and duplicate ids.
#[must_use]
pub fn consistency_report(catalog: &Catalog) -> ConsistencyReport {
    let mut findings = Vec::new();

    duplicates(
        catalog.clue_titles.iter().map(|&(id, _)| id),
        Table::ClueTitles,
        &mut findings,
    );
    for (table, rows) in [
        (Table::ClueDescriptions, catalog.clue_descriptions),
        (Table::ClueContents, catalog.clue_contents),
    ] {
        duplicates(rows.iter().map(|&(id, _)| id), table, &mut findings);
        orphans(catalog, rows, table, &mut findings);
    }
    duplicates(
        catalog.locations.iter().map(|l| l.id),
        Table::Locations,
        &mut findings,
    );

    ConsistencyReport { findings }
}

fn duplicates(
    ids: impl Iterator<Item = &'static str>,
    table: Table,
    findings: &mut Vec<Finding>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            findings.push(Finding::Duplicate { table, id });
        }
    }
}

fn orphans(catalog: &Catalog, rows: ClueTable, table: Table, findings: &mut Vec<Finding>) {
    for &(id, _) in rows {
        if !catalog.has_title(id) {
            findings.push(Finding::Orphan { table, id });
        }
    }
}

#[cfg(test)]
mod tests {
    use casefile_test_support::{inconsistent_catalog, minimal_catalog};

    use super::{Finding, Table, consistency_report};
    use crate::domain::fr_catalog::french_catalog;

    #[test]
    fn test_french_catalog_is_consistent() {
        let report = consistency_report(&french_catalog());

        assert!(report.is_clean(), "unexpected findings: {:?}", report.findings);
    }

    #[test]
    fn test_minimal_catalog_is_consistent() {
        assert!(consistency_report(&minimal_catalog()).is_clean());
    }

    #[test]
    fn test_inconsistent_catalog_reports_every_finding() {
        // Arrange
        let catalog = inconsistent_catalog();

        // Act
        let report = consistency_report(&catalog);

        // Assert
        assert_eq!(
            report.findings,
            vec![
                Finding::Duplicate {
                    table: Table::ClueTitles,
                    id: "c1",
                },
                Finding::Orphan {
                    table: Table::ClueDescriptions,
                    id: "c9",
                },
                Finding::Orphan {
                    table: Table::ClueContents,
                    id: "c7",
                },
                Finding::Duplicate {
                    table: Table::Locations,
                    id: "loc1",
                },
            ]
        );
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding::Orphan {
            table: Table::ClueContents,
            id: "c7",
        };

        assert_eq!(finding.to_string(), "c7 in clue contents has no clue title");
    }
}

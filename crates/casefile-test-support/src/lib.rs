//! Shared test doubles and output helpers for Casefile.

mod catalog;
mod output;
mod writer;

pub use catalog::{inconsistent_catalog, minimal_catalog};
pub use output::{lines_for, separator_count};
pub use writer::FailingWriter;

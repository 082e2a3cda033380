//! Casefile Core — shared translation-catalog abstractions.
//!
//! This crate defines the catalog tables, translation keys and entries
//! that the generator crates depend on. It contains no I/O.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod key;

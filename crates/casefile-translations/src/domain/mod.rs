//! Domain layer: the literal catalog data.

pub mod fr_catalog;

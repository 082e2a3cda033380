//! Application layer: emission passes and catalog checks.

pub mod consistency;
pub mod fingerprint;
pub mod json;
pub mod render;

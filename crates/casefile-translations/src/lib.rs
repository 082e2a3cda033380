//! Casefile — French translation catalog and entry generator.
//!
//! Holds the literal clue and location texts for the Elias Thorne case and
//! renders them as lines ready to paste into the game's translation table.

pub mod application;
pub mod domain;

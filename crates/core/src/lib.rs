//! Shared domain types for the Lingo backoffice.
//!
//! Holds the primitives every other crate depends on: database id and
//! timestamp aliases, the domain error enum, the closed role / level /
//! session-type vocabularies, and the session content model (screens and
//! their typed actions).

pub mod content;
pub mod enums;
pub mod error;
pub mod types;

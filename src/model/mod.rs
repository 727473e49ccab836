//! # Vocabulary Model
//!
//! The types a decoded document is made of. These cross every boundary:
//! wire ↔ codec ↔ caller.
//!
//! Design rule: schema tables describe, the model holds. Nothing here knows
//! about any particular entity; all of that comes from a [`crate::Schema`].

pub mod document;
pub mod iri;
pub mod language_map;
pub mod literal;
pub mod primitive;
pub mod property;
pub mod value;

pub use document::Document;
pub use iri::Iri;
pub use language_map::LanguageMap;
pub use literal::{IsoDuration, Literal, LiteralKind};
pub use property::Property;
pub use value::{Value, ValueKind};

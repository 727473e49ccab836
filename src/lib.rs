//! # activity-vocab — ActivityStreams 2.0 Vocabulary Codec
//!
//! Typed documents for the ActivityStreams / ActivityPub wire vocabulary,
//! with a lossless JSON codec.
//!
//! ## Design Principles
//!
//! 1. **Schema-driven**: every entity is a declarative [`Schema`] table; one
//!    generic engine parses and emits all of them
//! 2. **Closed values, open escape hatch**: a property value is exactly one
//!    [`Value`] variant, and anything unrecognized lands in `Value::Unknown`
//! 3. **Registry-resolved polymorphism**: nested objects are resolved by their
//!    `type` through a [`Registry`], so new entities plug in without touching
//!    the engine
//! 4. **Nothing is dropped**: unknown keys and unresolvable values round-trip
//!
//! ## Quick Start
//!
//! ```rust
//! use activity_vocab::{Codec, Document, Iri, vocab};
//!
//! # fn example() -> activity_vocab::Result<()> {
//! let codec = Codec::new();
//! let like = codec.decode_str(r#"{"type": "Like", "actor": "https://example.com/a"}"#)?;
//! assert_eq!(like.get("actor").and_then(|v| v.as_iri()).map(Iri::as_str), Some("https://example.com/a"));
//!
//! let mut flag = Document::new(&vocab::FLAG);
//! flag.append("object", Iri::parse("https://example.com/notes/1")?)?;
//! let wire = codec.encode_string(&flag)?;
//! assert!(wire.contains(r#""type":"Flag""#));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Layers
//!
//! | Layer | Module | Description |
//! |-------|--------|-------------|
//! | Primitive codecs | `model::primitive` | IRI, strings, date-time, duration, numbers |
//! | Values | `model::value` | The polymorphic property value |
//! | Slots | `model::property` | Ordered values plus natural-language map |
//! | Documents | `model::document` | Whole-entity encode/decode |
//! | Schemas | `schema`, `vocab` | Entity and property tables |
//! | Registry | `registry` | Type name → schema lookup |

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod model;
pub mod registry;
pub mod schema;
pub mod vocab;

use serde_json::Value as Json;
use tracing::debug;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Document, Iri, IsoDuration, LanguageMap, Literal, LiteralKind, Property, Value, ValueKind,
};

// ============================================================================
// Re-exports: Schema, Registry, Config
// ============================================================================

pub use config::{CodecConfig, MalformedPolicy};
pub use registry::Registry;
pub use schema::{Accepts, EntityKind, Kind, PropertySpec, Schema};

/// Wire key carrying the JSON-LD context. Never interpreted, always preserved.
pub const CONTEXT_KEY: &str = "@context";

/// Wire key carrying the type discriminator.
pub const TYPE_KEY: &str = "type";

/// The ActivityStreams 2.0 JSON-LD context IRI.
pub const ACTIVITY_STREAMS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";

// ============================================================================
// Top-level Codec handle
// ============================================================================

/// The primary entry point. A `Codec` pairs a type registry with codec
/// settings and turns raw JSON into [`Document`]s and back.
#[derive(Debug, Clone)]
pub struct Codec<'r> {
    registry: &'r Registry,
    config: CodecConfig,
}

impl Codec<'static> {
    /// Codec over the process-wide registry with default settings.
    pub fn new() -> Self {
        Self::with_registry(Registry::global())
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Codec<'r> {
    /// Create a codec over the given registry.
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self { registry, config: CodecConfig::default() }
    }

    /// Replace the codec settings.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode a JSON object into whichever registered entity its `type` names.
    ///
    /// Type tokens are tried in wire order against the document registry,
    /// then against the link registry.
    pub fn decode(&self, raw: &Json) -> Result<Document> {
        let map = raw.as_object().ok_or_else(|| Error::NotAnObject(json_type(raw)))?;
        let tokens = model::value::type_tokens(map);

        let schema = tokens
            .iter()
            .find_map(|token| self.registry.resolve_document(token))
            .or_else(|| tokens.iter().find_map(|token| self.registry.resolve_link(token)));

        match schema {
            Some(schema) => {
                debug!(type_name = schema.name, "decoding top-level document");
                Document::from_map(schema, map, self, 0)
            }
            None => Err(Error::UnresolvedType(tokens.iter().map(|t| t.to_string()).collect())),
        }
    }

    /// Parse a JSON string and decode it.
    pub fn decode_str(&self, input: &str) -> Result<Document> {
        let raw: Json = serde_json::from_str(input)?;
        self.decode(&raw)
    }

    /// Decode a JSON object as a specific entity, ignoring its `type` for
    /// resolution purposes (the tokens are still kept on the document).
    pub fn decode_as(&self, schema: &'static Schema, raw: &Json) -> Result<Document> {
        let map = raw.as_object().ok_or_else(|| Error::NotAnObject(json_type(raw)))?;
        Document::from_map(schema, map, self, 0)
    }

    /// Encode a document to its wire form.
    pub fn encode(&self, document: &Document) -> Result<Json> {
        document.to_json_with(&self.config)
    }

    /// Encode a document to a compact JSON string.
    pub fn encode_string(&self, document: &Document) -> Result<String> {
        Ok(serde_json::to_string(&self.encode(document)?)?)
    }
}

/// JSON type name, for error messages.
pub(crate) fn json_type(raw: &Json) -> &'static str {
    match raw {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed {kind} value {value}: {reason}")]
    MalformedPrimitive { kind: &'static str, value: String, reason: String },

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("No registered type matches {0:?}")]
    UnresolvedType(Vec<String>),

    #[error("Type {0} is already registered")]
    DuplicateType(String),

    #[error("{entity} has no property {property}")]
    UnknownProperty { entity: &'static str, property: String },

    #[error("Property {property} does not accept {kind} values")]
    KindNotAllowed { property: &'static str, kind: String },

    #[error("Property {0} is functional and holds at most one value")]
    FunctionalProperty(&'static str),

    #[error("Index {index} out of range for {property} (len {len})")]
    IndexOutOfRange { property: &'static str, index: usize, len: usize },

    #[error("Property {0} has no natural-language map")]
    NoLanguageMap(&'static str),

    #[error("Key {0} is set both by a property and in the unknown bag")]
    KeyCollision(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid IRI {iri:?}: {reason}")]
    InvalidIri { iri: String, reason: String },

    #[error("Document nesting exceeds depth {0}")]
    DepthExceeded(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_rejects_non_object() {
        let err = Codec::new().decode(&json!(["Like"])).unwrap_err();
        assert!(matches!(err, Error::NotAnObject("array")));
    }

    #[test]
    fn test_decode_unresolved_type() {
        let err = Codec::new().decode(&json!({"type": ["Frobnicate", 3]})).unwrap_err();
        match err {
            Error::UnresolvedType(tokens) => assert_eq!(tokens, vec!["Frobnicate".to_string()]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_prefers_first_registered_token() {
        let doc = Codec::new()
            .decode(&json!({"type": ["Frobnicate", "Note", "Article"]}))
            .unwrap();
        assert_eq!(doc.type_name(), "Note");
    }

    #[test]
    fn test_decode_falls_back_to_link_registry() {
        let doc = Codec::new()
            .decode(&json!({"type": "Mention", "href": "https://example.com/@ada"}))
            .unwrap();
        assert_eq!(doc.type_name(), "Mention");
        assert_eq!(doc.kind(), EntityKind::Link);
    }

    #[test]
    fn test_decode_str_reports_json_errors() {
        let err = Codec::new().decode_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_decode_as_ignores_type_for_resolution() {
        let doc = Codec::new()
            .decode_as(&vocab::NOTE, &json!({"type": "Article", "name": "x"}))
            .unwrap();
        assert_eq!(doc.type_name(), "Note");
        assert_eq!(doc.types().collect::<Vec<_>>(), vec!["Article"]);
    }
}

//! The polymorphic property value.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as Json};
use tracing::{trace, warn};

use super::{primitive, Document, Iri, IsoDuration, Literal, LiteralKind};
use crate::config::{CodecConfig, MalformedPolicy};
use crate::schema::{EntityKind, Kind};
use crate::{Codec, Result, TYPE_KEY};

/// What one slot of a property holds.
///
/// Exactly one variant is populated. Anything that matched none of the
/// property's candidate kinds is kept verbatim as `Unknown`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A nested document-like entity.
    Document(Box<Document>),
    /// A nested link-like entity.
    Link(Box<Document>),
    /// A bare identifier reference.
    Reference(Iri),
    Literal(Literal),
    /// Raw JSON that resolved to nothing.
    Unknown(Json),
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Document,
    Link,
    Reference,
    Literal(LiteralKind),
    Unknown,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Document => f.write_str("document"),
            ValueKind::Link => f.write_str("link"),
            ValueKind::Reference => f.write_str("IRI"),
            ValueKind::Literal(kind) => write!(f, "{kind}"),
            ValueKind::Unknown => f.write_str("unknown"),
        }
    }
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Document(_) => ValueKind::Document,
            Value::Link(_) => ValueKind::Link,
            Value::Reference(_) => ValueKind::Reference,
            Value::Literal(lit) => ValueKind::Literal(lit.kind()),
            Value::Unknown(_) => ValueKind::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool { matches!(self, Value::Unknown(_)) }
    pub fn is_reference(&self) -> bool { matches!(self, Value::Reference(_)) }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&Document> {
        match self {
            Value::Link(link) => Some(link),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Value::Reference(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// String payload of a text, language-text, MIME type or language tag literal.
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(Literal::as_str)
    }

    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Literal(Literal::DateTime(dt)) => Some(dt),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&IsoDuration> {
        match self {
            Value::Literal(Literal::Duration(d)) => Some(d),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Literal(Literal::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Literal(Literal::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Literal(Literal::NonNegativeInteger(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_unknown(&self) -> Option<&Json> {
        match self {
            Value::Unknown(raw) => Some(raw),
            _ => None,
        }
    }

    /// The IRI this value points at: the reference itself, a nested
    /// document's `id`, or a link's `href`.
    pub fn iri(&self) -> Option<&Iri> {
        match self {
            Value::Reference(iri) => Some(iri),
            Value::Document(doc) => doc.id(),
            Value::Link(link) => link.get("href").and_then(Value::as_iri),
            _ => None,
        }
    }
}

// ============================================================================
// Resolution and encoding
// ============================================================================

impl Value {
    /// Resolve one raw JSON value against a property's candidate kinds.
    ///
    /// Maps resolve only to documents or links, by their `type`; everything
    /// else is tried against the reference and literal candidates in order.
    /// Nothing matching yields `Unknown`, never an error. Errors come only
    /// from malformed literals (under `MalformedPolicy::Reject`) and from
    /// nested documents.
    pub(crate) fn resolve(raw: &Json, kinds: &[Kind], codec: &Codec<'_>, depth: usize) -> Result<Value> {
        if let Json::Object(map) = raw {
            return resolve_map(map, kinds, codec, depth);
        }

        for kind in kinds {
            let resolved = match kind {
                Kind::Reference => primitive::decode_iri(raw).map(Value::Reference),
                Kind::Literal(literal) => match primitive::decode(*literal, raw) {
                    Ok(found) => found.map(Value::Literal),
                    Err(err) => match codec.config().on_malformed {
                        MalformedPolicy::Reject => return Err(err),
                        MalformedPolicy::Preserve => {
                            warn!(%err, "skipping malformed literal candidate");
                            None
                        }
                    },
                },
                Kind::Document(_) | Kind::Link(_) => None,
            };
            if let Some(value) = resolved {
                trace!(kind = %value.kind(), "resolved scalar value");
                return Ok(value);
            }
        }

        trace!(raw = %raw, "no candidate kind matched; keeping as unknown");
        Ok(Value::Unknown(raw.clone()))
    }

    /// Encode with default settings.
    pub fn to_json(&self) -> Result<Json> {
        self.to_json_with(&CodecConfig::default())
    }

    pub fn to_json_with(&self, config: &CodecConfig) -> Result<Json> {
        match self {
            Value::Document(doc) | Value::Link(doc) => doc.to_json_with(config),
            Value::Reference(iri) => Ok(primitive::encode_iri(iri)),
            Value::Literal(lit) => primitive::encode(lit),
            Value::Unknown(raw) => Ok(raw.clone()),
        }
    }
}

fn resolve_map(map: &Map<String, Json>, kinds: &[Kind], codec: &Codec<'_>, depth: usize) -> Result<Value> {
    if !has_string_types(map) {
        trace!("object has no usable type; keeping as unknown");
        return Ok(Value::Unknown(Json::Object(map.clone())));
    }

    let tokens = type_tokens(map);
    for kind in kinds {
        let Kind::Document(accepts) = kind else { continue };
        for token in &tokens {
            if !accepts.admits(token) {
                continue;
            }
            if let Some(schema) = codec.registry().resolve_document(token) {
                trace!(type_name = schema.name, "resolved nested document");
                let doc = Document::from_map(schema, map, codec, depth + 1)?;
                return Ok(Value::Document(Box::new(doc)));
            }
        }
    }
    for kind in kinds {
        let Kind::Link(accepts) = kind else { continue };
        for token in &tokens {
            if !accepts.admits(token) {
                continue;
            }
            if let Some(schema) = codec.registry().resolve_link(token) {
                trace!(type_name = schema.name, "resolved nested link");
                let link = Document::from_map(schema, map, codec, depth + 1)?;
                return Ok(Value::Link(Box::new(link)));
            }
        }
    }

    trace!(?tokens, "object matched no candidate; keeping as unknown");
    Ok(Value::Unknown(Json::Object(map.clone())))
}

/// `type` is present and is a string or an array made only of strings.
fn has_string_types(map: &Map<String, Json>) -> bool {
    match map.get(TYPE_KEY) {
        Some(Json::String(_)) => true,
        Some(Json::Array(items)) => items.iter().all(Json::is_string),
        _ => false,
    }
}

/// The string tokens of a map's `type` entry (a string or array of strings).
pub(crate) fn type_tokens(map: &Map<String, Json>) -> Vec<&str> {
    match map.get(TYPE_KEY) {
        Some(Json::String(token)) => vec![token.as_str()],
        Some(Json::Array(items)) => items.iter().filter_map(Json::as_str).collect(),
        _ => Vec::new(),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<Iri> for Value { fn from(v: Iri) -> Self { Value::Reference(v) } }
impl From<Literal> for Value { fn from(v: Literal) -> Self { Value::Literal(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::Literal(Literal::Text(v.to_owned())) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::Literal(Literal::Text(v)) } }
impl From<bool> for Value { fn from(v: bool) -> Self { Value::Literal(Literal::Boolean(v)) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Literal(Literal::Float(v)) } }
impl From<u64> for Value { fn from(v: u64) -> Self { Value::Literal(Literal::NonNegativeInteger(v)) } }
impl From<IsoDuration> for Value { fn from(v: IsoDuration) -> Self { Value::Literal(Literal::Duration(v)) } }
impl From<DateTime<FixedOffset>> for Value { fn from(v: DateTime<FixedOffset>) -> Self { Value::Literal(Literal::DateTime(v)) } }
impl From<DateTime<Utc>> for Value { fn from(v: DateTime<Utc>) -> Self { Value::Literal(Literal::DateTime(v.fixed_offset())) } }

/// Documents land in the variant matching their entity kind.
impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        match doc.kind() {
            EntityKind::Document => Value::Document(Box::new(doc)),
            EntityKind::Link => Value::Link(Box::new(doc)),
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Document(doc) | Value::Link(doc) => write!(f, "{doc}"),
            Value::Reference(iri) => write!(f, "<{iri}>"),
            Value::Literal(lit) => write!(f, "{lit}"),
            Value::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

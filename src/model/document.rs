//! Vocabulary documents: one typed entity with its property slots.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as Json};
use tracing::trace;

use super::{Iri, LanguageMap, Property, Value};
use crate::config::CodecConfig;
use crate::schema::{EntityKind, Schema};
use crate::{Codec, Error, Result, CONTEXT_KEY, TYPE_KEY};

/// A decoded (or freshly built) entity.
///
/// Slots exist for every property the schema declares, in schema order, and
/// are simply empty until written. Keys the schema does not declare
/// (`@context` among them) are kept in the unknown bag and written back
/// unchanged.
#[derive(Clone, PartialEq)]
pub struct Document {
    schema: &'static Schema,
    /// `type` tokens as they appeared on the wire, without repeats.
    types: Vec<String>,
    properties: Vec<Property>,
    unknown: Map<String, Json>,
}

impl Document {
    /// Empty document of the given entity.
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            types: Vec::new(),
            properties: schema.all_properties().into_iter().map(Property::new).collect(),
            unknown: Map::new(),
        }
    }

    /// Builder form of [`Document::set`] / [`Document::append`]: functional
    /// properties are set, others appended.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
        let slot = self.property_mut(name)?;
        if slot.is_functional() {
            slot.set(value)?;
        } else {
            slot.append(value)?;
        }
        Ok(self)
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Canonical type name of the entity.
    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    pub fn kind(&self) -> EntityKind {
        self.schema.kind
    }

    /// Type tokens carried by the document. The canonical name is added on
    /// encode if it is missing here.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Add an extra type token (e.g. an extension type); no-op if present.
    pub fn add_type(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !self.types.contains(&token) {
            self.types.push(token);
        }
    }

    // ========================================================================
    // Properties
    // ========================================================================

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|slot| slot.name() == name)
    }

    pub fn property_mut(&mut self, name: &str) -> Result<&mut Property> {
        let entity = self.schema.name;
        self.properties
            .iter_mut()
            .find(|slot| slot.name() == name)
            .ok_or_else(|| Error::UnknownProperty { entity, property: name.to_owned() })
    }

    /// All slots in schema order, empty ones included.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// First value of a property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.property(name).and_then(Property::first)
    }

    pub fn append(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.property_mut(name)?.append(value)
    }

    pub fn prepend(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.property_mut(name)?.prepend(value)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.property_mut(name)?.set(value)
    }

    pub fn remove_at(&mut self, name: &str, index: usize) -> Result<Value> {
        self.property_mut(name)?.remove_at(index)
    }

    pub fn language_map(&self, name: &str) -> Option<&LanguageMap> {
        self.property(name).and_then(Property::language_map)
    }

    pub fn language_map_mut(&mut self, name: &str) -> Result<&mut LanguageMap> {
        self.property_mut(name)?.language_map_mut()
    }

    pub fn id(&self) -> Option<&Iri> {
        self.get("id").and_then(Value::as_iri)
    }

    pub fn set_id(&mut self, id: Iri) -> Result<()> {
        self.set("id", id)
    }

    // ========================================================================
    // Unknown bag
    // ========================================================================

    /// The JSON-LD context, passed through untouched.
    pub fn context(&self) -> Option<&Json> {
        self.unknown.get(CONTEXT_KEY)
    }

    pub fn set_context(&mut self, context: impl Into<Json>) {
        self.unknown.insert(CONTEXT_KEY.to_owned(), context.into());
    }

    /// Keys the schema does not declare.
    pub fn unknown(&self) -> &Map<String, Json> {
        &self.unknown
    }

    pub fn unknown_mut(&mut self) -> &mut Map<String, Json> {
        &mut self.unknown
    }

    // ========================================================================
    // Codec
    // ========================================================================

    /// Encode with default settings.
    pub fn to_json(&self) -> Result<Json> {
        self.to_json_with(&CodecConfig::default())
    }

    pub fn to_json_with(&self, config: &CodecConfig) -> Result<Json> {
        let mut out = Map::new();

        for slot in &self.properties {
            if let Some(raw) = slot.to_json_with(config)? {
                out.insert(slot.name().to_owned(), raw);
            }
            if let (Some(key), Some(map)) = (slot.spec().map_key(), slot.language_map()) {
                if !map.is_empty() {
                    out.insert(key, map.to_json());
                }
            }
        }

        for (key, raw) in &self.unknown {
            if key == TYPE_KEY || out.contains_key(key) {
                return Err(Error::KeyCollision(key.clone()));
            }
            out.insert(key.clone(), raw.clone());
        }

        out.insert(TYPE_KEY.to_owned(), self.type_json(config));
        Ok(Json::Object(out))
    }

    /// Wire tokens plus the canonical name when missing. Computed on every
    /// encode, so encoding twice gives the same result.
    fn type_json(&self, config: &CodecConfig) -> Json {
        let mut tokens: Vec<Json> = self.types.iter().cloned().map(Json::String).collect();
        if !self.types.iter().any(|token| token == self.schema.name) {
            tokens.push(Json::String(self.schema.name.to_owned()));
        }
        match tokens.len() {
            1 if config.collapse_singletons => tokens.remove(0),
            _ => Json::Array(tokens),
        }
    }

    pub(crate) fn from_map(
        schema: &'static Schema,
        map: &Map<String, Json>,
        codec: &Codec<'_>,
        depth: usize,
    ) -> Result<Self> {
        let max_depth = codec.config().max_depth;
        if depth > max_depth {
            return Err(Error::DepthExceeded(max_depth));
        }

        let mut doc = Self::new(schema);
        for (key, raw) in map {
            if key == TYPE_KEY {
                for token in type_list(raw)? {
                    doc.add_type(token);
                }
                continue;
            }
            if let Some(slot) = doc.properties.iter_mut().find(|slot| slot.name() == key) {
                slot.absorb(raw, codec, depth)?;
                continue;
            }
            if let Some(slot) = doc.language_map_slot(key) {
                if let Some(language_map) = LanguageMap::from_json(raw) {
                    slot.absorb_language_map(language_map);
                    continue;
                }
            }
            trace!(entity = schema.name, key = key.as_str(), "keeping undeclared key");
            doc.unknown.insert(key.clone(), raw.clone());
        }
        Ok(doc)
    }

    /// The slot whose `<name>Map` key this is.
    fn language_map_slot(&mut self, key: &str) -> Option<&mut Property> {
        let name = key.strip_suffix("Map")?;
        self.properties
            .iter_mut()
            .find(|slot| slot.spec().language_map && slot.name() == name)
    }
}

/// `type` is a string or an array of strings.
fn type_list(raw: &Json) -> Result<Vec<String>> {
    match raw {
        Json::String(token) => Ok(vec![token.clone()]),
        Json::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| Error::InvalidValue(format!("type token {item} is not a string")))
            })
            .collect(),
        other => Err(Error::InvalidValue(format!("type must be a string or array, got {other}"))),
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let populated: Vec<_> = self.properties.iter().filter(|slot| !slot.is_empty()).collect();
        f.debug_struct("Document")
            .field("schema", &self.schema.name)
            .field("types", &self.types)
            .field("properties", &populated)
            .field("unknown", &self.unknown)
            .finish()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "{}<{}>", self.schema.name, id),
            None => write!(f, "{}", self.schema.name),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

/// Resolves against the global registry, like [`Codec::decode`].
impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Json::deserialize(deserializer)?;
        Codec::new().decode(&raw).map_err(D::Error::custom)
    }
}

//! # Entity Schemas
//!
//! Declarative description of a vocabulary entity: its canonical type name,
//! whether it is document-like or link-like, its parent, and the properties
//! it declares. Each property lists the kinds of value it may hold in
//! resolution order, whether it is functional, and whether it carries a
//! natural-language map.
//!
//! The built-in ActivityStreams tables live in [`crate::vocab`]. Callers can
//! declare their own `static` schemas and register them at start-up.

use crate::model::{LiteralKind, Value};

// ============================================================================
// Entity kind
// ============================================================================

/// Which registry namespace an entity lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Object-like entities (Note, Person, Create, ...).
    Document,
    /// Link-like entities (Link, Mention).
    Link,
}

// ============================================================================
// Candidate kinds
// ============================================================================

/// Which type names a document or link candidate admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepts {
    /// Any type registered in the matching registry.
    Any,
    /// Only the listed type names.
    Only(&'static [&'static str]),
}

impl Accepts {
    pub fn admits(&self, type_name: &str) -> bool {
        match self {
            Accepts::Any => true,
            Accepts::Only(names) => names.iter().any(|name| *name == type_name),
        }
    }
}

/// One alternative a property value may resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Document(Accepts),
    Link(Accepts),
    Reference,
    Literal(LiteralKind),
}

// ============================================================================
// Property specification
// ============================================================================

/// Schema entry for one property.
#[derive(Debug, PartialEq, Eq)]
pub struct PropertySpec {
    /// Wire name.
    pub name: &'static str,
    /// Holds at most one value.
    pub functional: bool,
    /// Candidate kinds, in resolution precedence order.
    pub kinds: &'static [Kind],
    /// Also carries a `<name>Map` natural-language map.
    pub language_map: bool,
}

impl PropertySpec {
    pub const fn functional(name: &'static str, kinds: &'static [Kind]) -> Self {
        Self { name, functional: true, kinds, language_map: false }
    }

    pub const fn non_functional(name: &'static str, kinds: &'static [Kind]) -> Self {
        Self { name, functional: false, kinds, language_map: false }
    }

    pub const fn with_language_map(self) -> Self {
        Self { language_map: true, ..self }
    }

    /// Wire key of the natural-language map, if this property has one.
    pub fn map_key(&self) -> Option<String> {
        self.language_map.then(|| format!("{}Map", self.name))
    }

    /// Whether `value` is one of the kinds this property declares.
    /// `Unknown` is always admitted.
    pub fn admits(&self, value: &Value) -> bool {
        match value {
            Value::Unknown(_) => true,
            Value::Document(doc) => self.kinds.iter().any(|kind| {
                matches!(kind, Kind::Document(accepts) if accepts.admits(doc.type_name()))
            }),
            Value::Link(link) => self.kinds.iter().any(|kind| {
                matches!(kind, Kind::Link(accepts) if accepts.admits(link.type_name()))
            }),
            Value::Reference(_) => self.kinds.contains(&Kind::Reference),
            Value::Literal(literal) => self.kinds.contains(&Kind::Literal(literal.kind())),
        }
    }
}

// ============================================================================
// Entity schema
// ============================================================================

/// Schema of one vocabulary entity.
#[derive(Debug)]
pub struct Schema {
    /// Canonical type name, injected into `type` on encode.
    pub name: &'static str,
    pub kind: EntityKind,
    /// Parent entity; its properties come first.
    pub extends: Option<&'static Schema>,
    /// Properties declared by this entity itself.
    pub properties: &'static [&'static PropertySpec],
    /// Inherited properties this entity drops.
    pub without: &'static [&'static str],
}

impl Schema {
    pub const fn document(
        name: &'static str,
        extends: Option<&'static Schema>,
        properties: &'static [&'static PropertySpec],
    ) -> Self {
        Self { name, kind: EntityKind::Document, extends, properties, without: &[] }
    }

    pub const fn link(
        name: &'static str,
        extends: Option<&'static Schema>,
        properties: &'static [&'static PropertySpec],
    ) -> Self {
        Self { name, kind: EntityKind::Link, extends, properties, without: &[] }
    }

    pub const fn without(self, names: &'static [&'static str]) -> Self {
        Self { without: names, ..self }
    }

    /// This schema followed by its ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Schema> {
        std::iter::successors(Some(self), |schema| schema.extends)
    }

    /// True if this entity is `name` or inherits from it.
    pub fn is_or_extends(&self, name: &str) -> bool {
        self.ancestry().any(|schema| schema.name == name)
    }

    /// Every property the entity carries, root ancestor's first.
    pub fn all_properties(&self) -> Vec<&'static PropertySpec> {
        let chain: Vec<&Schema> = self.ancestry().collect();
        let mut all: Vec<&'static PropertySpec> = Vec::new();
        for schema in chain.iter().rev() {
            for spec in schema.properties {
                if !all.iter().any(|known| known.name == spec.name) {
                    all.push(*spec);
                }
            }
        }
        all.retain(|spec| !chain.iter().any(|schema| schema.without.contains(&spec.name)));
        all
    }

    /// Look up a property by wire name.
    pub fn property(&self, name: &str) -> Option<&'static PropertySpec> {
        self.all_properties().into_iter().find(|spec| spec.name == name)
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for Schema {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    #[test]
    fn test_accepts() {
        assert!(Accepts::Any.admits("Anything"));
        assert!(Accepts::Only(&["Image"]).admits("Image"));
        assert!(!Accepts::Only(&["Image"]).admits("Video"));
    }

    #[test]
    fn test_is_or_extends() {
        assert!(vocab::TENTATIVE_ACCEPT.is_or_extends("TentativeAccept"));
        assert!(vocab::TENTATIVE_ACCEPT.is_or_extends("Accept"));
        assert!(vocab::TENTATIVE_ACCEPT.is_or_extends("Activity"));
        assert!(vocab::TENTATIVE_ACCEPT.is_or_extends("Object"));
        assert!(!vocab::TENTATIVE_ACCEPT.is_or_extends("Link"));
        assert!(vocab::MENTION.is_or_extends("Link"));
    }

    #[test]
    fn test_inherited_properties_root_first() {
        let names: Vec<_> = vocab::LIKE.all_properties().iter().map(|p| p.name).collect();
        assert_eq!(names.first(), Some(&"id"));
        assert!(names.contains(&"actor"));
        assert!(names.contains(&"content"));
        let content = names.iter().position(|n| *n == "content").unwrap();
        let actor = names.iter().position(|n| *n == "actor").unwrap();
        assert!(content < actor);
    }

    #[test]
    fn test_without_drops_inherited_property() {
        assert!(vocab::QUESTION.property("object").is_none());
        assert!(vocab::QUESTION.property("actor").is_some());
        assert!(vocab::QUESTION.property("oneOf").is_some());
        assert!(vocab::ARRIVE.property("object").is_none());
    }

    #[test]
    fn test_map_key() {
        assert_eq!(vocab::properties::CONTENT.map_key().as_deref(), Some("contentMap"));
        assert_eq!(vocab::properties::ACTOR.map_key(), None);
    }
}

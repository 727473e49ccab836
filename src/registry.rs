//! Type registry.
//!
//! Maps type names to entity schemas, in two independent namespaces: one
//! for document-like entities and one for link-like entities. Polymorphic
//! values consult it to turn a nested object's `type` into a schema.
//!
//! The registry is built at start-up and read-mostly afterwards. Tables sit
//! behind `parking_lot::RwLock`, so lookups from many threads only contend
//! with registration.

use std::fmt;
use std::sync::LazyLock;

use hashbrown::HashMap;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::schema::{EntityKind, Schema};
use crate::vocab;
use crate::{Error, Result};

type Table = RwLock<HashMap<&'static str, &'static Schema>>;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::with_vocabulary);

pub struct Registry {
    documents: Table,
    links: Table,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            links: RwLock::new(HashMap::new()),
        }
    }

    /// Registry holding every built-in ActivityStreams entity.
    pub fn with_vocabulary() -> Self {
        let registry = Self::new();
        for &schema in vocab::ENTITIES {
            if let Err(e) = registry.register(schema) {
                warn!(error = %e, "skipping built-in entity");
            }
        }
        registry
    }

    /// Process-wide registry, populated with the built-in vocabulary on first
    /// use. Extensions registered here are visible to [`crate::Codec::new`].
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Register a schema in the namespace its kind selects.
    pub fn register(&self, schema: &'static Schema) -> Result<()> {
        match schema.kind {
            EntityKind::Document => self.register_document(schema),
            EntityKind::Link => self.register_link(schema),
        }
    }

    pub fn register_document(&self, schema: &'static Schema) -> Result<()> {
        insert(&self.documents, schema, "document")
    }

    pub fn register_link(&self, schema: &'static Schema) -> Result<()> {
        insert(&self.links, schema, "link")
    }

    pub fn resolve_document(&self, name: &str) -> Option<&'static Schema> {
        self.documents.read().get(name).copied()
    }

    pub fn resolve_link(&self, name: &str) -> Option<&'static Schema> {
        self.links.read().get(name).copied()
    }

    /// Document namespace first, then link.
    pub fn resolve(&self, name: &str) -> Option<&'static Schema> {
        self.resolve_document(name).or_else(|| self.resolve_link(name))
    }

    pub fn document_names(&self) -> Vec<&'static str> {
        sorted_names(&self.documents)
    }

    pub fn link_names(&self) -> Vec<&'static str> {
        sorted_names(&self.links)
    }

    /// Total entries across both namespaces.
    pub fn len(&self) -> usize {
        self.documents.read().len() + self.links.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn insert(table: &Table, schema: &'static Schema, namespace: &str) -> Result<()> {
    let mut entries = table.write();
    if entries.contains_key(schema.name) {
        return Err(Error::DuplicateType(schema.name.to_owned()));
    }
    entries.insert(schema.name, schema);
    debug!(type_name = schema.name, namespace, "registered entity");
    Ok(())
}

fn sorted_names(table: &Table) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = table.read().keys().copied().collect();
    names.sort_unstable();
    names
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("documents", &self.documents.read().len())
            .field("links", &self.links.read().len())
            .finish()
    }
}

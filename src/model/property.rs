//! Property slots: the values one property of one document holds.

use serde_json::Value as Json;
use smallvec::SmallVec;

use super::{LanguageMap, Value, ValueKind};
use crate::config::CodecConfig;
use crate::schema::PropertySpec;
use crate::{Codec, Error, Result};

/// The values of one declared property.
///
/// Non-functional properties keep an ordered list (wire order). Functional
/// properties hold at most one value and are written with [`Property::set`].
/// Reading is always checked: [`Property::get`] returns the [`Value`], whose
/// variant says what it is, so there is no way to read an entry as the
/// wrong kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    spec: &'static PropertySpec,
    values: SmallVec<[Value; 1]>,
    /// Only ever non-empty when `spec.language_map` is set.
    language_map: LanguageMap,
}

impl Property {
    pub fn new(spec: &'static PropertySpec) -> Self {
        Self { spec, values: SmallVec::new(), language_map: LanguageMap::new() }
    }

    pub fn spec(&self) -> &'static PropertySpec {
        self.spec
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn is_functional(&self) -> bool {
        self.spec.functional
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn first(&self) -> Option<&Value> {
        self.values.first()
    }

    pub fn kind_at(&self, index: usize) -> Option<ValueKind> {
        self.values.get(index).map(Value::kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a value at the end. Fails on functional properties.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<()> {
        self.ensure_multi_valued()?;
        let value = self.admit(value.into())?;
        self.values.push(value);
        Ok(())
    }

    /// Add a value at the front. Fails on functional properties.
    pub fn prepend(&mut self, value: impl Into<Value>) -> Result<()> {
        self.ensure_multi_valued()?;
        let value = self.admit(value.into())?;
        self.values.insert(0, value);
        Ok(())
    }

    /// Replace whatever the property holds with a single value.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = self.admit(value.into())?;
        self.values.clear();
        self.values.push(value);
        Ok(())
    }

    /// Remove and return the value at `index`; later values shift down.
    pub fn remove_at(&mut self, index: usize) -> Result<Value> {
        if index >= self.values.len() {
            return Err(Error::IndexOutOfRange {
                property: self.name(),
                index,
                len: self.values.len(),
            });
        }
        Ok(self.values.remove(index))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    // ========================================================================
    // Natural-language map
    // ========================================================================

    /// The language map, for properties that have one.
    pub fn language_map(&self) -> Option<&LanguageMap> {
        self.spec.language_map.then_some(&self.language_map)
    }

    pub fn language_map_mut(&mut self) -> Result<&mut LanguageMap> {
        if !self.spec.language_map {
            return Err(Error::NoLanguageMap(self.name()));
        }
        Ok(&mut self.language_map)
    }

    fn ensure_multi_valued(&self) -> Result<()> {
        if self.spec.functional {
            return Err(Error::FunctionalProperty(self.name()));
        }
        Ok(())
    }

    fn admit(&self, value: Value) -> Result<Value> {
        if self.spec.admits(&value) {
            Ok(value)
        } else {
            Err(Error::KindNotAllowed { property: self.name(), kind: value.kind().to_string() })
        }
    }

    // ========================================================================
    // Codec
    // ========================================================================

    pub(crate) fn absorb(&mut self, raw: &Json, codec: &Codec<'_>, depth: usize) -> Result<()> {
        self.values.clear();
        match raw {
            // The empty array and arrays of arrays have no element-wise
            // reading; they are kept whole as one unknown value.
            Json::Array(items)
                if !self.spec.functional && !items.is_empty() && !items.iter().any(Json::is_array) =>
            {
                for item in items {
                    self.values.push(Value::resolve(item, self.spec.kinds, codec, depth)?);
                }
            }
            _ => self.values.push(Value::resolve(raw, self.spec.kinds, codec, depth)?),
        }
        Ok(())
    }

    pub(crate) fn absorb_language_map(&mut self, map: LanguageMap) {
        self.language_map = map;
    }

    /// Wire form of the positional values; `None` when there are none.
    pub(crate) fn to_json_with(&self, config: &CodecConfig) -> Result<Option<Json>> {
        match self.values.as_slice() {
            [] => Ok(None),
            [single] if self.spec.functional || config.collapse_singletons || is_whole_array(single) => {
                single.to_json_with(config).map(Some)
            }
            values => values
                .iter()
                .map(|value| value.to_json_with(config))
                .collect::<Result<Vec<_>>>()
                .map(|items| Some(Json::Array(items))),
        }
    }
}

/// An unknown array in a slot always stands for the whole wire value.
fn is_whole_array(value: &Value) -> bool {
    value.as_unknown().is_some_and(Json::is_array)
}

impl<'p> IntoIterator for &'p Property {
    type Item = &'p Value;
    type IntoIter = std::slice::Iter<'p, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

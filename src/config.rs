//! Codec settings.

use serde::{Deserialize, Serialize};

/// Default limit on nested document depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// What to do with a value that has the shape of a candidate kind but fails
/// that kind's strict parsing (e.g. `"2024-13-45T99:00:00Z"` for a date-time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Abort the whole decode with `Error::MalformedPrimitive`.
    #[default]
    Reject,
    /// Skip the candidate; the value ends up as `Value::Unknown` unless a
    /// later candidate accepts it.
    Preserve,
}

/// Settings shared by every decode/encode performed through a `Codec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub on_malformed: MalformedPolicy,
    /// Emit single-element non-functional properties (and `type`) as bare
    /// scalars instead of one-element arrays.
    pub collapse_singletons: bool,
    /// Maximum nesting of typed documents inside one another.
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            on_malformed: MalformedPolicy::Reject,
            collapse_singletons: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecConfig {
    /// Defaults, except malformed literals are preserved instead of rejected.
    pub fn lenient() -> Self {
        Self { on_malformed: MalformedPolicy::Preserve, ..Self::default() }
    }
}

//! Identifier references.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// An absolute IRI, kept exactly as spelled on the wire.
///
/// Validation goes through [`Url::parse`], but the original string is what
/// gets compared and re-emitted, so `https://a` does not turn into
/// `https://a/` on a round trip.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri {
    raw: String,
    url: Url,
}

impl Iri {
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.chars().any(char::is_whitespace) {
            return Err(Error::InvalidIri { iri: raw, reason: "contains whitespace".into() });
        }
        match Url::parse(&raw) {
            Ok(url) => Ok(Self { raw, url }),
            Err(e) => Err(Error::InvalidIri { iri: raw, reason: e.to_string() }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed form.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Iri {}

impl Hash for Iri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Debug for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iri").field(&self.raw).finish()
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Iri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iri {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(raw)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.raw
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Self { raw: url.to_string(), url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_original_spelling() {
        let iri = Iri::parse("https://a").unwrap();
        assert_eq!(iri.as_str(), "https://a");
        assert_eq!(iri.url().as_str(), "https://a/");
    }

    #[test]
    fn test_accepts_non_http_schemes() {
        assert!(Iri::parse("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66").is_ok());
        assert!(Iri::parse("mailto:ada@example.com").is_ok());
    }

    #[test]
    fn test_rejects_relative_and_plain_text() {
        for bad in ["Article", "/notes/1", "", "hello world", "2024-01-01T00:00:00Z"] {
            assert!(Iri::parse(bad).is_err(), "{bad:?} should not be an IRI");
        }
    }

    #[test]
    fn test_serde_as_string() {
        let iri: Iri = serde_json::from_str("\"https://example.com/x\"").unwrap();
        assert_eq!(serde_json::to_string(&iri).unwrap(), "\"https://example.com/x\"");
        assert!(serde_json::from_str::<Iri>("\"nope\"").is_err());
    }
}

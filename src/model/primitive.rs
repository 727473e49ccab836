//! Primitive codecs: leaf conversions between a raw JSON scalar and each
//! literal kind.
//!
//! A decoder returns `Ok(None)` for data that is simply not its kind, so
//! callers can move on to the next candidate. It returns an error only when
//! the value is recognizably its kind but fails strict parsing:
//!
//! | Kind | Recognized shape | Malformed when |
//! |------|------------------|----------------|
//! | IRI | string | never (anything unparsable is "not this kind") |
//! | text kinds, MIME type, language tag | string | never |
//! | date-time | string starting `DDDD-` | RFC 3339 parsing fails |
//! | duration | string starting `P`/`-P` then a digit or `T` | ISO 8601 parsing fails |
//! | float | number (integers widen, and re-encode as `12.0`) | never |
//! | boolean | bool | never |
//! | non-negative integer | number (`20.0` reads as `20`) | negative or fractional |

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::{Number, Value as Json};

use super::{Iri, IsoDuration, Literal, LiteralKind};
use crate::{Error, Result};

// ============================================================================
// Identifier references
// ============================================================================

pub fn decode_iri(raw: &Json) -> Option<Iri> {
    raw.as_str().and_then(|s| Iri::parse(s).ok())
}

pub fn encode_iri(iri: &Iri) -> Json {
    Json::String(iri.as_str().to_owned())
}

// ============================================================================
// Literals
// ============================================================================

/// Decode `raw` as a literal of the given kind.
pub fn decode(kind: LiteralKind, raw: &Json) -> Result<Option<Literal>> {
    let text = || raw.as_str().map(str::to_owned);
    Ok(match kind {
        LiteralKind::Text => text().map(Literal::Text),
        LiteralKind::LangText => text().map(Literal::LangText),
        LiteralKind::MimeType => text().map(Literal::MimeType),
        LiteralKind::LanguageTag => text().map(Literal::LanguageTag),
        LiteralKind::DateTime => decode_datetime(raw)?.map(Literal::DateTime),
        LiteralKind::Duration => decode_duration(raw)?.map(Literal::Duration),
        LiteralKind::Float => raw.as_f64().map(Literal::Float),
        LiteralKind::Boolean => raw.as_bool().map(Literal::Boolean),
        LiteralKind::NonNegativeInteger => decode_non_negative(raw)?.map(Literal::NonNegativeInteger),
    })
}

/// Encode a literal to its wire form.
pub fn encode(literal: &Literal) -> Result<Json> {
    match literal {
        Literal::Text(s) | Literal::LangText(s) | Literal::MimeType(s) | Literal::LanguageTag(s) => {
            Ok(Json::String(s.clone()))
        }
        Literal::DateTime(dt) => Ok(Json::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))),
        Literal::Duration(d) => d.to_iso8601().map(Json::String).map_err(Error::InvalidValue),
        Literal::Float(v) => Number::from_f64(*v)
            .map(Json::Number)
            .ok_or_else(|| Error::InvalidValue(format!("non-finite float {v}"))),
        Literal::Boolean(b) => Ok(Json::Bool(*b)),
        Literal::NonNegativeInteger(n) => Ok(Json::Number((*n).into())),
    }
}

pub fn decode_datetime(raw: &Json) -> Result<Option<DateTime<FixedOffset>>> {
    let Some(s) = raw.as_str() else { return Ok(None) };
    if !looks_like_date(s) {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(s)
        .map(Some)
        .map_err(|e| malformed(LiteralKind::DateTime, raw, e))
}

pub fn decode_duration(raw: &Json) -> Result<Option<IsoDuration>> {
    let Some(s) = raw.as_str() else { return Ok(None) };
    if !looks_like_duration(s) {
        return Ok(None);
    }
    IsoDuration::parse(s)
        .map(Some)
        .map_err(|reason| malformed(LiteralKind::Duration, raw, reason))
}

/// Integral floats such as `20.0` count as integers.
fn decode_non_negative(raw: &Json) -> Result<Option<u64>> {
    let Json::Number(n) = raw else { return Ok(None) };
    if let Some(v) = n.as_u64() {
        return Ok(Some(v));
    }
    match n.as_f64() {
        Some(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 => Ok(Some(v as u64)),
        _ => Err(malformed(LiteralKind::NonNegativeInteger, raw, "not a non-negative integer")),
    }
}

fn looks_like_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() > 4 && b[..4].iter().all(u8::is_ascii_digit) && b[4] == b'-'
}

fn looks_like_duration(s: &str) -> bool {
    let mut chars = s.strip_prefix('-').unwrap_or(s).chars();
    chars.next() == Some('P') && chars.next().is_some_and(|c| c.is_ascii_digit() || c == 'T')
}

fn malformed(kind: LiteralKind, raw: &Json, reason: impl ToString) -> Error {
    Error::MalformedPrimitive {
        kind: kind.name(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

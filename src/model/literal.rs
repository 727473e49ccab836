//! Literal values: the scalar kinds a property can hold.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The literal kinds a property may declare.
///
/// Several of these are wire-identical strings; which one a value decodes
/// as depends only on which candidate the property tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralKind {
    Text,
    LangText,
    DateTime,
    Duration,
    Float,
    MimeType,
    Boolean,
    NonNegativeInteger,
    LanguageTag,
}

impl LiteralKind {
    /// XML Schema / RFC name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            LiteralKind::Text => "xsd:string",
            LiteralKind::LangText => "rdf:langString",
            LiteralKind::DateTime => "xsd:dateTime",
            LiteralKind::Duration => "xsd:duration",
            LiteralKind::Float => "xsd:float",
            LiteralKind::MimeType => "rfc2045",
            LiteralKind::Boolean => "xsd:boolean",
            LiteralKind::NonNegativeInteger => "xsd:nonNegativeInteger",
            LiteralKind::LanguageTag => "bcp47",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    LangText(String),
    DateTime(DateTime<FixedOffset>),
    Duration(IsoDuration),
    /// `xsd:float`. Integers on the wire widen to `f64` and are written back
    /// as JSON floats, so `12` re-encodes as `12.0`.
    Float(f64),
    MimeType(String),
    Boolean(bool),
    NonNegativeInteger(u64),
    LanguageTag(String),
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Text(_) => LiteralKind::Text,
            Literal::LangText(_) => LiteralKind::LangText,
            Literal::DateTime(_) => LiteralKind::DateTime,
            Literal::Duration(_) => LiteralKind::Duration,
            Literal::Float(_) => LiteralKind::Float,
            Literal::MimeType(_) => LiteralKind::MimeType,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::NonNegativeInteger(_) => LiteralKind::NonNegativeInteger,
            Literal::LanguageTag(_) => LiteralKind::LanguageTag,
        }
    }

    /// The string payload of the string-shaped kinds.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Text(s) | Literal::LangText(s) | Literal::MimeType(s) | Literal::LanguageTag(s) => {
                Some(s)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(s) | Literal::LangText(s) | Literal::MimeType(s) | Literal::LanguageTag(s) => {
                write!(f, "\"{}\"", s.replace('"', "\\\""))
            }
            Literal::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Literal::Duration(d) => write!(f, "{d}"),
            Literal::Float(v) => write!(f, "{v}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::NonNegativeInteger(n) => write!(f, "{n}"),
        }
    }
}

// ============================================================================
// ISO 8601 duration
// ============================================================================

/// ISO 8601 duration (months, days, seconds, nanoseconds).
///
/// Years fold into months, weeks into days, hours and minutes into seconds,
/// so `P1Y2M` and `P14M` are the same value. All components share one sign
/// on the wire; a value mixing signs cannot be encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoDuration {
    pub months: i64,
    pub days: i64,
    pub seconds: i64,
    pub nanoseconds: i32,
}

const NANOS_PER_SECOND: i32 = 1_000_000_000;

impl IsoDuration {
    pub fn new(months: i64, days: i64, seconds: i64, nanoseconds: i32) -> Self {
        Self { months, days, seconds, nanoseconds }
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self { seconds, ..Self::default() }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Parse `PnYnMnWnDTnHnMn.nS`, optionally prefixed by `-`.
    pub fn parse(input: &str) -> std::result::Result<Self, String> {
        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let body = body.strip_prefix('P').ok_or("missing 'P' designator")?;
        let (date_part, time_part) = match body.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (body, None),
        };
        if time_part == Some("") {
            return Err("empty time section after 'T'".into());
        }
        if date_part.is_empty() && time_part.is_none() {
            return Err("no duration components".into());
        }

        let mut duration = Self::default();
        for (number, designator) in components(date_part, "YMWD")? {
            let value = whole(number, designator)?;
            let (target, factor) = match designator {
                'Y' => (&mut duration.months, 12),
                'M' => (&mut duration.months, 1),
                'W' => (&mut duration.days, 7),
                _ => (&mut duration.days, 1),
            };
            accumulate(target, value, factor)?;
        }
        for (number, designator) in components(time_part.unwrap_or(""), "HMS")? {
            if designator == 'S' {
                let (secs, nanos) = seconds_with_fraction(number)?;
                accumulate(&mut duration.seconds, secs, 1)?;
                duration.nanoseconds = nanos;
                continue;
            }
            let value = whole(number, designator)?;
            let factor = if designator == 'H' { 3600 } else { 60 };
            accumulate(&mut duration.seconds, value, factor)?;
        }

        if negative {
            duration.months = -duration.months;
            duration.days = -duration.days;
            duration.seconds = -duration.seconds;
            duration.nanoseconds = -duration.nanoseconds;
        }
        Ok(duration)
    }

    /// Canonical ISO 8601 spelling.
    pub fn to_iso8601(&self) -> std::result::Result<String, String> {
        if !(-NANOS_PER_SECOND < self.nanoseconds && self.nanoseconds < NANOS_PER_SECOND) {
            return Err(format!("nanoseconds {} out of range", self.nanoseconds));
        }
        let parts = [self.months, self.days, self.seconds, i64::from(self.nanoseconds)];
        let negative = parts.iter().any(|p| *p < 0);
        if negative && parts.iter().any(|p| *p > 0) {
            return Err(format!("duration {self:?} mixes positive and negative components"));
        }

        let months = self.months.unsigned_abs();
        let days = self.days.unsigned_abs();
        let seconds = self.seconds.unsigned_abs();
        let nanos = self.nanoseconds.unsigned_abs();

        let mut out = String::from(if negative { "-P" } else { "P" });
        let (years, months) = (months / 12, months % 12);
        if years > 0 {
            out.push_str(&format!("{years}Y"));
        }
        if months > 0 {
            out.push_str(&format!("{months}M"));
        }
        if days > 0 {
            out.push_str(&format!("{days}D"));
        }

        let (hours, rest) = (seconds / 3600, seconds % 3600);
        let (minutes, secs) = (rest / 60, rest % 60);
        if hours > 0 || minutes > 0 || secs > 0 || nanos > 0 {
            out.push('T');
            if hours > 0 {
                out.push_str(&format!("{hours}H"));
            }
            if minutes > 0 {
                out.push_str(&format!("{minutes}M"));
            }
            if nanos > 0 {
                let fraction = format!("{nanos:09}");
                out.push_str(&format!("{secs}.{}S", fraction.trim_end_matches('0')));
            } else if secs > 0 {
                out.push_str(&format!("{secs}S"));
            }
        }
        if out.ends_with('P') {
            out.push_str("T0S");
        }
        Ok(out)
    }
}

/// Split `12Y3M` into `[("12", 'Y'), ("3", 'M')]`, enforcing designator order.
fn components<'s>(section: &'s str, order: &str) -> std::result::Result<Vec<(&'s str, char)>, String> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut next_allowed = 0;
    for (pos, ch) in section.char_indices() {
        if ch.is_ascii_digit() || ch == '.' || ch == ',' {
            continue;
        }
        let rank = order[next_allowed..]
            .find(ch)
            .ok_or_else(|| format!("unexpected designator '{ch}'"))?;
        let number = &section[start..pos];
        if number.is_empty() {
            return Err(format!("designator '{ch}' without a number"));
        }
        out.push((number, ch));
        next_allowed += rank + 1;
        start = pos + ch.len_utf8();
    }
    if start != section.len() {
        return Err(format!("trailing number '{}'", &section[start..]));
    }
    Ok(out)
}

fn whole(number: &str, designator: char) -> std::result::Result<i64, String> {
    if number.contains(['.', ',']) {
        return Err(format!("fractional '{designator}' component is not supported"));
    }
    number.parse::<i64>().map_err(|e| format!("bad '{designator}' component: {e}"))
}

fn seconds_with_fraction(number: &str) -> std::result::Result<(i64, i32), String> {
    let (int, fraction) = match number.split_once(['.', ',']) {
        Some((int, fraction)) => (int, fraction),
        None => (number, ""),
    };
    let secs = int.parse::<i64>().map_err(|e| format!("bad seconds component: {e}"))?;
    if fraction.is_empty() {
        return Ok((secs, 0));
    }
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("bad fractional seconds '{fraction}'"));
    }
    let padded = format!("{fraction:0<9}");
    let nanos = padded.parse::<i32>().map_err(|e| format!("bad fractional seconds: {e}"))?;
    Ok((secs, nanos))
}

fn accumulate(target: &mut i64, value: i64, factor: i64) -> std::result::Result<(), String> {
    *target = value
        .checked_mul(factor)
        .and_then(|v| target.checked_add(v))
        .ok_or("duration component overflows")?;
    Ok(())
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_iso8601() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(
                f,
                "P{}M{}DT{}.{:09}S",
                self.months, self.days, self.seconds, self.nanoseconds
            ),
        }
    }
}

impl FromStr for IsoDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).map_err(|reason| Error::InvalidValue(format!("duration {s:?}: {reason}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_duration() {
        let d = IsoDuration::parse("P1Y2M3W4DT5H6M7.25S").unwrap();
        assert_eq!(d.months, 14);
        assert_eq!(d.days, 25);
        assert_eq!(d.seconds, 5 * 3600 + 6 * 60 + 7);
        assert_eq!(d.nanoseconds, 250_000_000);
    }

    #[test]
    fn test_parse_negative() {
        let d = IsoDuration::parse("-PT90S").unwrap();
        assert_eq!(d, IsoDuration::from_seconds(-90));
        assert_eq!(d.to_iso8601().unwrap(), "-PT1M30S");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["P", "PT", "P1", "P1H", "PT1D", "P1M1Y", "P1.5D", "PT1.1234567891S", "1D", "P-1D"] {
            assert!(IsoDuration::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_format_canonical() {
        assert_eq!(IsoDuration::parse("P14M").unwrap().to_iso8601().unwrap(), "P1Y2M");
        assert_eq!(IsoDuration::parse("PT3661S").unwrap().to_iso8601().unwrap(), "PT1H1M1S");
        assert_eq!(IsoDuration::parse("PT0.5S").unwrap().to_iso8601().unwrap(), "PT0.5S");
        assert_eq!(IsoDuration::default().to_iso8601().unwrap(), "PT0S");
    }

    #[test]
    fn test_format_rejects_mixed_signs() {
        let d = IsoDuration::new(1, -1, 0, 0);
        assert!(d.to_iso8601().is_err());
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(IsoDuration::parse("P999999999999999999Y").is_err());
    }

    #[test]
    fn test_literal_kind() {
        assert_eq!(Literal::Float(1.5).kind(), LiteralKind::Float);
        assert_eq!(Literal::LangText("hi".into()).as_str(), Some("hi"));
        assert_eq!(Literal::Boolean(true).as_str(), None);
    }
}

//! Property tables for the ActivityStreams 2.0 and ActivityPub vocabulary.
//!
//! Each property lists its candidate kinds in resolution order. JSON objects
//! only ever resolve through the document and link candidates; scalars go
//! through the reference and literal candidates in the order given here.

use crate::model::LiteralKind;
use crate::schema::{Accepts, Kind, PropertySpec};

// ============================================================================
// Candidate kinds
// ============================================================================

const DOC: Kind = Kind::Document(Accepts::Any);
const LINK: Kind = Kind::Link(Accepts::Any);
const REF: Kind = Kind::Reference;

const fn lit(kind: LiteralKind) -> Kind {
    Kind::Literal(kind)
}

const COLLECTIONS: &[&str] = &["Collection", "OrderedCollection", "CollectionPage", "OrderedCollectionPage"];
const PAGES: &[&str] = &["CollectionPage", "OrderedCollectionPage"];
const ORDERED: &[&str] = &["OrderedCollection", "OrderedCollectionPage"];

pub const OBJECT_LINK_IRI: &[Kind] = &[DOC, LINK, REF];
pub const OBJECT_IRI: &[Kind] = &[DOC, REF];
pub const IRI_LINK: &[Kind] = &[REF, LINK];
pub const IMAGE_LINK_IRI: &[Kind] = &[Kind::Document(Accepts::Only(&["Image"])), LINK, REF];
pub const COLLECTION_IRI: &[Kind] = &[Kind::Document(Accepts::Only(COLLECTIONS)), REF];
pub const COLLECTION_LINK_IRI: &[Kind] = &[Kind::Document(Accepts::Only(COLLECTIONS)), LINK, REF];
pub const PAGE_LINK_IRI: &[Kind] = &[Kind::Document(Accepts::Only(PAGES)), LINK, REF];
pub const ORDERED_COLLECTION_IRI: &[Kind] = &[Kind::Document(Accepts::Only(ORDERED)), REF];
pub const IRI: &[Kind] = &[REF];
pub const TEXT: &[Kind] = &[lit(LiteralKind::Text)];
pub const DATE_TIME: &[Kind] = &[lit(LiteralKind::DateTime)];
pub const DURATION_KIND: &[Kind] = &[lit(LiteralKind::Duration)];
pub const FLOAT: &[Kind] = &[lit(LiteralKind::Float)];
pub const MIME_TYPE: &[Kind] = &[lit(LiteralKind::MimeType)];
pub const NON_NEGATIVE_INTEGER: &[Kind] = &[lit(LiteralKind::NonNegativeInteger)];
pub const LANGUAGE_TAG: &[Kind] = &[lit(LiteralKind::LanguageTag)];
/// `closed`: an object, a link, the closing time, a flag, or an IRI.
pub const CLOSED_KINDS: &[Kind] = &[DOC, LINK, lit(LiteralKind::DateTime), lit(LiteralKind::Boolean), REF];
/// `units`: a unit IRI is preferred over the plain-text unit names. A text
/// value that parses as an IRI therefore decodes as a reference.
pub const IRI_TEXT: &[Kind] = &[REF, lit(LiteralKind::Text)];
/// `formerType`: type names are text, so text wins over the IRI reading and
/// a reference written here decodes as text.
pub const OBJECT_TEXT_IRI: &[Kind] = &[DOC, lit(LiteralKind::Text), REF];

// ============================================================================
// Object
// ============================================================================

pub static ID: PropertySpec = PropertySpec::functional("id", IRI);
pub static ATTACHMENT: PropertySpec = PropertySpec::non_functional("attachment", OBJECT_LINK_IRI);
pub static ATTRIBUTED_TO: PropertySpec = PropertySpec::non_functional("attributedTo", OBJECT_LINK_IRI);
pub static AUDIENCE: PropertySpec = PropertySpec::non_functional("audience", OBJECT_LINK_IRI);
pub static BCC: PropertySpec = PropertySpec::non_functional("bcc", OBJECT_LINK_IRI);
pub static BTO: PropertySpec = PropertySpec::non_functional("bto", OBJECT_LINK_IRI);
pub static CC: PropertySpec = PropertySpec::non_functional("cc", OBJECT_LINK_IRI);
pub static CONTENT: PropertySpec = PropertySpec::non_functional("content", TEXT).with_language_map();
pub static CONTEXT: PropertySpec = PropertySpec::non_functional("context", OBJECT_LINK_IRI);
pub static DURATION: PropertySpec = PropertySpec::functional("duration", DURATION_KIND);
pub static END_TIME: PropertySpec = PropertySpec::functional("endTime", DATE_TIME);
pub static GENERATOR: PropertySpec = PropertySpec::non_functional("generator", OBJECT_LINK_IRI);
pub static ICON: PropertySpec = PropertySpec::non_functional("icon", IMAGE_LINK_IRI);
pub static IMAGE: PropertySpec = PropertySpec::non_functional("image", IMAGE_LINK_IRI);
pub static IN_REPLY_TO: PropertySpec = PropertySpec::non_functional("inReplyTo", OBJECT_LINK_IRI);
pub static LIKES: PropertySpec = PropertySpec::functional("likes", COLLECTION_IRI);
pub static LOCATION: PropertySpec = PropertySpec::non_functional("location", OBJECT_LINK_IRI);
pub static MEDIA_TYPE: PropertySpec = PropertySpec::functional("mediaType", MIME_TYPE);
pub static NAME: PropertySpec = PropertySpec::non_functional("name", TEXT).with_language_map();
pub static PREVIEW: PropertySpec = PropertySpec::non_functional("preview", OBJECT_LINK_IRI);
pub static PUBLISHED: PropertySpec = PropertySpec::functional("published", DATE_TIME);
pub static REPLIES: PropertySpec = PropertySpec::functional("replies", COLLECTION_IRI);
pub static SHARES: PropertySpec = PropertySpec::functional("shares", COLLECTION_IRI);
/// ActivityPub: the source markup `content` was rendered from.
pub static SOURCE: PropertySpec = PropertySpec::functional("source", OBJECT_IRI);
pub static START_TIME: PropertySpec = PropertySpec::functional("startTime", DATE_TIME);
pub static SUMMARY: PropertySpec = PropertySpec::non_functional("summary", TEXT).with_language_map();
pub static TAG: PropertySpec = PropertySpec::non_functional("tag", OBJECT_LINK_IRI);
pub static TO: PropertySpec = PropertySpec::non_functional("to", OBJECT_LINK_IRI);
pub static UPDATED: PropertySpec = PropertySpec::functional("updated", DATE_TIME);
pub static URL: PropertySpec = PropertySpec::non_functional("url", IRI_LINK);

// ============================================================================
// Link
// ============================================================================

pub static HREF: PropertySpec = PropertySpec::functional("href", IRI);
pub static HREFLANG: PropertySpec = PropertySpec::functional("hreflang", LANGUAGE_TAG);
pub static REL: PropertySpec = PropertySpec::non_functional("rel", TEXT);
pub static HEIGHT: PropertySpec = PropertySpec::functional("height", NON_NEGATIVE_INTEGER);
pub static WIDTH: PropertySpec = PropertySpec::functional("width", NON_NEGATIVE_INTEGER);

// ============================================================================
// Activity
// ============================================================================

pub static ACTOR: PropertySpec = PropertySpec::non_functional("actor", OBJECT_LINK_IRI);
pub static INSTRUMENT: PropertySpec = PropertySpec::non_functional("instrument", OBJECT_LINK_IRI);
pub static OBJECT: PropertySpec = PropertySpec::non_functional("object", OBJECT_LINK_IRI);
pub static ORIGIN: PropertySpec = PropertySpec::non_functional("origin", OBJECT_LINK_IRI);
pub static RESULT: PropertySpec = PropertySpec::non_functional("result", OBJECT_LINK_IRI);
pub static TARGET: PropertySpec = PropertySpec::non_functional("target", OBJECT_LINK_IRI);

// Question
pub static ANY_OF: PropertySpec = PropertySpec::non_functional("anyOf", OBJECT_LINK_IRI);
pub static ONE_OF: PropertySpec = PropertySpec::non_functional("oneOf", OBJECT_LINK_IRI);
pub static CLOSED: PropertySpec = PropertySpec::non_functional("closed", CLOSED_KINDS);

// ============================================================================
// Collections
// ============================================================================

pub static TOTAL_ITEMS: PropertySpec = PropertySpec::functional("totalItems", NON_NEGATIVE_INTEGER);
pub static CURRENT: PropertySpec = PropertySpec::functional("current", PAGE_LINK_IRI);
pub static FIRST: PropertySpec = PropertySpec::functional("first", PAGE_LINK_IRI);
pub static LAST: PropertySpec = PropertySpec::functional("last", PAGE_LINK_IRI);
pub static ITEMS: PropertySpec = PropertySpec::non_functional("items", OBJECT_LINK_IRI);
pub static ORDERED_ITEMS: PropertySpec = PropertySpec::non_functional("orderedItems", OBJECT_LINK_IRI);
pub static PART_OF: PropertySpec = PropertySpec::functional("partOf", COLLECTION_LINK_IRI);
pub static NEXT: PropertySpec = PropertySpec::functional("next", PAGE_LINK_IRI);
pub static PREV: PropertySpec = PropertySpec::functional("prev", PAGE_LINK_IRI);
pub static START_INDEX: PropertySpec = PropertySpec::functional("startIndex", NON_NEGATIVE_INTEGER);

// ============================================================================
// Place, Profile, Relationship, Tombstone
// ============================================================================

pub static ACCURACY: PropertySpec = PropertySpec::functional("accuracy", FLOAT);
pub static ALTITUDE: PropertySpec = PropertySpec::functional("altitude", FLOAT);
pub static LATITUDE: PropertySpec = PropertySpec::functional("latitude", FLOAT);
pub static LONGITUDE: PropertySpec = PropertySpec::functional("longitude", FLOAT);
pub static RADIUS: PropertySpec = PropertySpec::functional("radius", FLOAT);
pub static UNITS: PropertySpec = PropertySpec::functional("units", IRI_TEXT);

pub static DESCRIBES: PropertySpec = PropertySpec::functional("describes", OBJECT_IRI);
pub static SUBJECT: PropertySpec = PropertySpec::functional("subject", OBJECT_LINK_IRI);
pub static RELATIONSHIP: PropertySpec = PropertySpec::non_functional("relationship", OBJECT_IRI);
pub static FORMER_TYPE: PropertySpec = PropertySpec::non_functional("formerType", OBJECT_TEXT_IRI);
pub static DELETED: PropertySpec = PropertySpec::functional("deleted", DATE_TIME);

// ============================================================================
// ActivityPub actors
// ============================================================================

pub static INBOX: PropertySpec = PropertySpec::functional("inbox", ORDERED_COLLECTION_IRI);
pub static OUTBOX: PropertySpec = PropertySpec::functional("outbox", ORDERED_COLLECTION_IRI);
pub static FOLLOWING: PropertySpec = PropertySpec::functional("following", COLLECTION_IRI);
pub static FOLLOWERS: PropertySpec = PropertySpec::functional("followers", COLLECTION_IRI);
pub static LIKED: PropertySpec = PropertySpec::functional("liked", COLLECTION_IRI);
pub static STREAMS: PropertySpec = PropertySpec::non_functional("streams", COLLECTION_IRI);
pub static PREFERRED_USERNAME: PropertySpec =
    PropertySpec::functional("preferredUsername", TEXT).with_language_map();
/// Usually an untyped object, which is kept as `Value::Unknown`.
pub static ENDPOINTS: PropertySpec = PropertySpec::functional("endpoints", IRI);

/// Every property above, for tooling that wants to enumerate them.
pub static ALL: &[&PropertySpec] = &[
    &ID, &ATTACHMENT, &ATTRIBUTED_TO, &AUDIENCE, &BCC, &BTO, &CC, &CONTENT, &CONTEXT, &DURATION,
    &END_TIME, &GENERATOR, &ICON, &IMAGE, &IN_REPLY_TO, &LIKES, &LOCATION, &MEDIA_TYPE, &NAME,
    &PREVIEW, &PUBLISHED, &REPLIES, &SHARES, &SOURCE, &START_TIME, &SUMMARY, &TAG, &TO, &UPDATED,
    &URL, &HREF, &HREFLANG, &REL, &HEIGHT, &WIDTH, &ACTOR, &INSTRUMENT, &OBJECT, &ORIGIN, &RESULT,
    &TARGET, &ANY_OF, &ONE_OF, &CLOSED, &TOTAL_ITEMS, &CURRENT, &FIRST, &LAST, &ITEMS,
    &ORDERED_ITEMS, &PART_OF, &NEXT, &PREV, &START_INDEX, &ACCURACY, &ALTITUDE, &LATITUDE,
    &LONGITUDE, &RADIUS, &UNITS, &DESCRIBES, &SUBJECT, &RELATIONSHIP, &FORMER_TYPE, &DELETED,
    &INBOX, &OUTBOX, &FOLLOWING, &FOLLOWERS, &LIKED, &STREAMS, &PREFERRED_USERNAME, &ENDPOINTS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_properties_unique() {
        assert_eq!(ALL.len(), 73);
        let mut names: Vec<_> = ALL.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_language_maps() {
        let with_maps: Vec<_> = ALL.iter().filter(|p| p.language_map).map(|p| p.name).collect();
        assert_eq!(with_maps, vec!["content", "name", "summary", "preferredUsername"]);
    }
}

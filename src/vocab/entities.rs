//! Entity tables for the ActivityStreams 2.0 core and extended types, plus
//! the ActivityPub actor properties.

use super::properties as p;
use crate::schema::{PropertySpec, Schema};

// ============================================================================
// Core types
// ============================================================================

// Property lists are separate statics: a borrowed array of statics is not
// promoted to 'static.

static OBJECT_PROPERTIES: [&PropertySpec; 30] = [
    &p::ID, &p::ATTACHMENT, &p::ATTRIBUTED_TO, &p::AUDIENCE, &p::BCC, &p::BTO, &p::CC,
    &p::CONTENT, &p::CONTEXT, &p::DURATION, &p::END_TIME, &p::GENERATOR, &p::ICON, &p::IMAGE,
    &p::IN_REPLY_TO, &p::LIKES, &p::LOCATION, &p::MEDIA_TYPE, &p::NAME, &p::PREVIEW,
    &p::PUBLISHED, &p::REPLIES, &p::SHARES, &p::SOURCE, &p::START_TIME, &p::SUMMARY, &p::TAG,
    &p::TO, &p::UPDATED, &p::URL,
];

static LINK_PROPERTIES: [&PropertySpec; 9] = [
    &p::ID, &p::HREF, &p::REL, &p::MEDIA_TYPE, &p::NAME, &p::HREFLANG, &p::HEIGHT, &p::WIDTH,
    &p::PREVIEW,
];

static ACTIVITY_PROPERTIES: [&PropertySpec; 6] =
    [&p::ACTOR, &p::OBJECT, &p::TARGET, &p::RESULT, &p::ORIGIN, &p::INSTRUMENT];

static COLLECTION_PROPERTIES: [&PropertySpec; 5] =
    [&p::TOTAL_ITEMS, &p::CURRENT, &p::FIRST, &p::LAST, &p::ITEMS];
static ORDERED_COLLECTION_PROPERTIES: [&PropertySpec; 1] = [&p::ORDERED_ITEMS];
static COLLECTION_PAGE_PROPERTIES: [&PropertySpec; 3] = [&p::PART_OF, &p::NEXT, &p::PREV];
static ORDERED_COLLECTION_PAGE_PROPERTIES: [&PropertySpec; 2] = [&p::ORDERED_ITEMS, &p::START_INDEX];

static QUESTION_PROPERTIES: [&PropertySpec; 3] = [&p::ONE_OF, &p::ANY_OF, &p::CLOSED];

/// Properties ActivityPub adds to every actor.
static ACTOR_PROPERTIES: [&PropertySpec; 8] = [
    &p::INBOX, &p::OUTBOX, &p::FOLLOWING, &p::FOLLOWERS, &p::LIKED, &p::STREAMS,
    &p::PREFERRED_USERNAME, &p::ENDPOINTS,
];

static PLACE_PROPERTIES: [&PropertySpec; 6] =
    [&p::ACCURACY, &p::ALTITUDE, &p::LATITUDE, &p::LONGITUDE, &p::RADIUS, &p::UNITS];
static PROFILE_PROPERTIES: [&PropertySpec; 1] = [&p::DESCRIBES];
static RELATIONSHIP_PROPERTIES: [&PropertySpec; 3] = [&p::SUBJECT, &p::OBJECT, &p::RELATIONSHIP];
static TOMBSTONE_PROPERTIES: [&PropertySpec; 2] = [&p::FORMER_TYPE, &p::DELETED];

pub static OBJECT: Schema = Schema::document("Object", None, &OBJECT_PROPERTIES);

pub static LINK: Schema = Schema::link("Link", None, &LINK_PROPERTIES);

pub static MENTION: Schema = Schema::link("Mention", Some(&LINK), &[]);

pub static ACTIVITY: Schema = Schema::document("Activity", Some(&OBJECT), &ACTIVITY_PROPERTIES);

pub static INTRANSITIVE_ACTIVITY: Schema =
    Schema::document("IntransitiveActivity", Some(&ACTIVITY), &[]).without(&["object"]);

pub static COLLECTION: Schema = Schema::document("Collection", Some(&OBJECT), &COLLECTION_PROPERTIES);

pub static ORDERED_COLLECTION: Schema =
    Schema::document("OrderedCollection", Some(&COLLECTION), &ORDERED_COLLECTION_PROPERTIES);

pub static COLLECTION_PAGE: Schema =
    Schema::document("CollectionPage", Some(&COLLECTION), &COLLECTION_PAGE_PROPERTIES);

pub static ORDERED_COLLECTION_PAGE: Schema = Schema::document(
    "OrderedCollectionPage",
    Some(&COLLECTION_PAGE),
    &ORDERED_COLLECTION_PAGE_PROPERTIES,
);

// ============================================================================
// Activity types
// ============================================================================

pub static ACCEPT: Schema = Schema::document("Accept", Some(&ACTIVITY), &[]);
pub static ADD: Schema = Schema::document("Add", Some(&ACTIVITY), &[]);
pub static ANNOUNCE: Schema = Schema::document("Announce", Some(&ACTIVITY), &[]);
pub static ARRIVE: Schema = Schema::document("Arrive", Some(&INTRANSITIVE_ACTIVITY), &[]);
pub static BLOCK: Schema = Schema::document("Block", Some(&IGNORE), &[]);
pub static CREATE: Schema = Schema::document("Create", Some(&ACTIVITY), &[]);
pub static DELETE: Schema = Schema::document("Delete", Some(&ACTIVITY), &[]);
pub static DISLIKE: Schema = Schema::document("Dislike", Some(&ACTIVITY), &[]);
pub static FLAG: Schema = Schema::document("Flag", Some(&ACTIVITY), &[]);
pub static FOLLOW: Schema = Schema::document("Follow", Some(&ACTIVITY), &[]);
pub static IGNORE: Schema = Schema::document("Ignore", Some(&ACTIVITY), &[]);
pub static INVITE: Schema = Schema::document("Invite", Some(&OFFER), &[]);
pub static JOIN: Schema = Schema::document("Join", Some(&ACTIVITY), &[]);
pub static LEAVE: Schema = Schema::document("Leave", Some(&ACTIVITY), &[]);
pub static LIKE: Schema = Schema::document("Like", Some(&ACTIVITY), &[]);
pub static LISTEN: Schema = Schema::document("Listen", Some(&ACTIVITY), &[]);
pub static MOVE: Schema = Schema::document("Move", Some(&ACTIVITY), &[]);
pub static OFFER: Schema = Schema::document("Offer", Some(&ACTIVITY), &[]);
pub static QUESTION: Schema =
    Schema::document("Question", Some(&INTRANSITIVE_ACTIVITY), &QUESTION_PROPERTIES);
pub static READ: Schema = Schema::document("Read", Some(&ACTIVITY), &[]);
pub static REJECT: Schema = Schema::document("Reject", Some(&ACTIVITY), &[]);
pub static REMOVE: Schema = Schema::document("Remove", Some(&ACTIVITY), &[]);
pub static TENTATIVE_ACCEPT: Schema = Schema::document("TentativeAccept", Some(&ACCEPT), &[]);
pub static TENTATIVE_REJECT: Schema = Schema::document("TentativeReject", Some(&REJECT), &[]);
pub static TRAVEL: Schema = Schema::document("Travel", Some(&INTRANSITIVE_ACTIVITY), &[]);
pub static UNDO: Schema = Schema::document("Undo", Some(&ACTIVITY), &[]);
pub static UPDATE: Schema = Schema::document("Update", Some(&ACTIVITY), &[]);
pub static VIEW: Schema = Schema::document("View", Some(&ACTIVITY), &[]);

// ============================================================================
// Actor types
// ============================================================================

pub static APPLICATION: Schema = Schema::document("Application", Some(&OBJECT), &ACTOR_PROPERTIES);
pub static GROUP: Schema = Schema::document("Group", Some(&OBJECT), &ACTOR_PROPERTIES);
pub static ORGANIZATION: Schema = Schema::document("Organization", Some(&OBJECT), &ACTOR_PROPERTIES);
pub static PERSON: Schema = Schema::document("Person", Some(&OBJECT), &ACTOR_PROPERTIES);
pub static SERVICE: Schema = Schema::document("Service", Some(&OBJECT), &ACTOR_PROPERTIES);

// ============================================================================
// Object types
// ============================================================================

pub static ARTICLE: Schema = Schema::document("Article", Some(&OBJECT), &[]);
pub static DOCUMENT: Schema = Schema::document("Document", Some(&OBJECT), &[]);
pub static AUDIO: Schema = Schema::document("Audio", Some(&DOCUMENT), &[]);
pub static IMAGE: Schema = Schema::document("Image", Some(&DOCUMENT), &[]);
pub static PAGE: Schema = Schema::document("Page", Some(&DOCUMENT), &[]);
pub static VIDEO: Schema = Schema::document("Video", Some(&DOCUMENT), &[]);
pub static EVENT: Schema = Schema::document("Event", Some(&OBJECT), &[]);
pub static NOTE: Schema = Schema::document("Note", Some(&OBJECT), &[]);
pub static PLACE: Schema = Schema::document("Place", Some(&OBJECT), &PLACE_PROPERTIES);
pub static PROFILE: Schema = Schema::document("Profile", Some(&OBJECT), &PROFILE_PROPERTIES);
pub static RELATIONSHIP: Schema =
    Schema::document("Relationship", Some(&OBJECT), &RELATIONSHIP_PROPERTIES);
pub static TOMBSTONE: Schema = Schema::document("Tombstone", Some(&OBJECT), &TOMBSTONE_PROPERTIES);

/// Every built-in entity, as registered by [`crate::Registry::with_vocabulary`].
pub static ENTITIES: &[&Schema] = &[
    &OBJECT, &LINK, &MENTION, &ACTIVITY, &INTRANSITIVE_ACTIVITY,
    &COLLECTION, &ORDERED_COLLECTION, &COLLECTION_PAGE, &ORDERED_COLLECTION_PAGE,
    &ACCEPT, &ADD, &ANNOUNCE, &ARRIVE, &BLOCK, &CREATE, &DELETE, &DISLIKE, &FLAG, &FOLLOW,
    &IGNORE, &INVITE, &JOIN, &LEAVE, &LIKE, &LISTEN, &MOVE, &OFFER, &QUESTION, &READ, &REJECT,
    &REMOVE, &TENTATIVE_ACCEPT, &TENTATIVE_REJECT, &TRAVEL, &UNDO, &UPDATE, &VIEW,
    &APPLICATION, &GROUP, &ORGANIZATION, &PERSON, &SERVICE,
    &ARTICLE, &DOCUMENT, &AUDIO, &IMAGE, &PAGE, &VIDEO, &EVENT, &NOTE, &PLACE, &PROFILE,
    &RELATIONSHIP, &TOMBSTONE,
];

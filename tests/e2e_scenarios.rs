//! End-to-end codec tests over realistic ActivityStreams documents.
//!
//! Each test decodes wire JSON through the global registry, inspects the
//! resulting document, and encodes it back.

use activity_vocab::{
    Codec, CodecConfig, Document, Error, Iri, LiteralKind, Value, ValueKind, vocab,
};
use pretty_assertions::assert_eq;
use serde_json::{Value as Json, json};

fn decode(raw: &Json) -> Document {
    Codec::new().decode(raw).unwrap()
}

fn iris(doc: &Document, property: &str) -> Vec<String> {
    doc.property(property)
        .unwrap()
        .iter()
        .filter_map(Value::iri)
        .map(|iri| iri.as_str().to_owned())
        .collect()
}

// ============================================================================
// 1. Bare identifier reference
// ============================================================================

#[test]
fn test_actor_string_is_reference() {
    let raw = json!({"type": "Like", "actor": "https://example.com/a"});
    let like = decode(&raw);

    let actor = like.property("actor").unwrap();
    assert_eq!(actor.len(), 1);
    assert_eq!(actor.kind_at(0), Some(ValueKind::Reference));
    assert_eq!(actor.get(0).and_then(Value::as_iri).map(Iri::as_str), Some("https://example.com/a"));

    assert_eq!(like.to_json().unwrap(), raw);
}

#[test]
fn test_untyped_input_gets_canonical_type() {
    let flag = Codec::new()
        .decode_as(&vocab::FLAG, &json!({"actor": "https://example.com/a"}))
        .unwrap();
    assert_eq!(flag.property("actor").unwrap().kind_at(0), Some(ValueKind::Reference));
    assert_eq!(flag.to_json().unwrap(), json!({"actor": "https://example.com/a", "type": "Flag"}));
}

// ============================================================================
// 2. Multi-valued property keeps wire order
// ============================================================================

#[test]
fn test_two_actors_keep_order() {
    let raw = json!({"type": "Like", "actor": ["https://example.com/a", "https://example.com/b"]});
    let like = decode(&raw);

    assert_eq!(iris(&like, "actor"), vec!["https://example.com/a", "https://example.com/b"]);
    assert_eq!(like.to_json().unwrap(), raw);
}

#[test]
fn test_mixed_kinds_in_one_property() {
    let raw = json!({
        "type": "Create",
        "object": [
            "https://example.com/notes/1",
            {"type": "Note", "content": "inline"},
            {"type": "Mention", "href": "https://example.com/@ada"},
            {"foo": "bar"},
        ],
    });
    let create = decode(&raw);
    let kinds: Vec<_> = create.property("object").unwrap().iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![ValueKind::Reference, ValueKind::Document, ValueKind::Link, ValueKind::Unknown]
    );
    assert_eq!(create.to_json().unwrap(), raw);
}

// ============================================================================
// 3. Natural-language map next to positional values
// ============================================================================

#[test]
fn test_content_map_independent_of_content() {
    let raw = json!({
        "type": "Note",
        "content": "Hi",
        "contentMap": {"en": "Hi", "fr": "Salut"},
    });
    let note = decode(&raw);

    assert_eq!(note.get("content").and_then(Value::as_str), Some("Hi"));
    let map = note.language_map("content").unwrap();
    assert_eq!(map.languages(), vec!["en", "fr"]);
    assert_eq!(map.get("fr"), Some("Salut"));

    assert_eq!(note.to_json().unwrap(), raw);
}

#[test]
fn test_language_map_without_positional_value() {
    let raw = json!({"type": "Person", "nameMap": {"de": "Ada"}});
    let person = decode(&raw);
    assert!(person.property("name").unwrap().is_empty());
    assert_eq!(person.language_map("name").unwrap().get("de"), Some("Ada"));
    assert_eq!(person.to_json().unwrap(), raw);
}

// ============================================================================
// 4. Values matching no candidate survive verbatim
// ============================================================================

#[test]
fn test_media_type_number_is_unknown() {
    let raw = json!({"type": "Document", "mediaType": 42});
    let doc = decode(&raw);

    let media_type = doc.get("mediaType").unwrap();
    assert_eq!(media_type, &Value::Unknown(json!(42)));
    assert_eq!(doc.to_json().unwrap(), raw);
}

#[test]
fn test_undeclared_keys_round_trip() {
    let raw = json!({
        "@context": ["https://www.w3.org/ns/activitystreams", {"toot": "http://joinmastodon.org/ns#"}],
        "type": "Note",
        "toot:discoverable": true,
        "attachment": {"weird": [1, 2, {"x": null}]},
    });
    let note = decode(&raw);
    assert_eq!(note.unknown().len(), 2);
    assert_eq!(note.get("attachment").and_then(Value::as_unknown), Some(&json!({"weird": [1, 2, {"x": null}]})));
    assert_eq!(note.to_json().unwrap(), raw);
}

#[test]
fn test_nested_object_with_bad_type_is_unknown() {
    let raw = json!({"type": "Like", "object": {"type": ["Note", 7], "content": "hi"}});
    let like = decode(&raw);
    assert_eq!(like.get("object").and_then(Value::as_unknown), Some(&json!({"type": ["Note", 7], "content": "hi"})));
    assert_eq!(like.to_json().unwrap(), raw);
}

#[test]
fn test_empty_and_nested_arrays_are_preserved() {
    let arrays = Codec::new().with_config(CodecConfig { collapse_singletons: false, ..CodecConfig::default() });
    for raw in [
        json!({"type": ["Note"], "to": []}),
        json!({"type": ["Note"], "to": [["https://example.com/a"]]}),
        json!({"type": ["Note"], "to": ["https://example.com/a", ["https://example.com/b"]]}),
    ] {
        let note = decode(&raw);
        assert!(note.get("to").unwrap().is_unknown());
        assert_eq!(arrays.encode(&note).unwrap(), raw);
    }
}

#[test]
fn test_functional_property_with_array_is_unknown() {
    let raw = json!({"type": "Note", "published": ["2024-01-01T00:00:00Z"]});
    let note = decode(&raw);
    assert!(note.get("published").unwrap().is_unknown());
    assert_eq!(note.to_json().unwrap(), raw);
}

// ============================================================================
// 5. Candidate precedence
// ============================================================================

#[test]
fn test_units_prefers_iri() {
    let place = decode(&json!({"type": "Place", "units": "https://example.com/units/km"}));
    assert_eq!(place.get("units").unwrap().kind(), ValueKind::Reference);

    let place = decode(&json!({"type": "Place", "units": "km", "radius": 12}));
    assert_eq!(place.get("units").and_then(Value::as_str), Some("km"));
    assert_eq!(place.get("radius").and_then(Value::as_float), Some(12.0));
}

#[test]
fn test_closed_candidates() {
    let question = decode(&json!({"type": "Question", "closed": "2024-05-01T10:00:00Z"}));
    assert_eq!(question.get("closed").unwrap().kind(), ValueKind::Literal(LiteralKind::DateTime));

    let question = decode(&json!({"type": "Question", "closed": true}));
    assert_eq!(question.get("closed").and_then(Value::as_bool), Some(true));

    let question = decode(&json!({"type": "Question", "closed": "https://example.com/result"}));
    assert_eq!(question.get("closed").unwrap().kind(), ValueKind::Reference);
}

#[test]
fn test_same_input_same_variant() {
    let raw = json!({"type": "Tombstone", "formerType": ["Note", "https://example.com/t", {"type": "Note"}]});
    let first = decode(&raw);
    let second = decode(&raw);
    assert_eq!(first, second);
    let kinds: Vec<_> = first.property("formerType").unwrap().iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ValueKind::Literal(LiteralKind::Text),
            ValueKind::Literal(LiteralKind::Text),
            ValueKind::Document,
        ]
    );
}

// ============================================================================
// 6. Nested documents and restricted candidates
// ============================================================================

#[test]
fn test_nested_create_note() {
    let raw = json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "id": "https://example.com/activities/1",
        "type": "Create",
        "actor": {"type": "Person", "id": "https://example.com/u/ada", "preferredUsername": "ada"},
        "object": {
            "id": "https://example.com/notes/1",
            "type": "Note",
            "content": "Hello",
            "published": "2024-03-01T12:30:00Z",
            "to": ["https://www.w3.org/ns/activitystreams#Public"],
            "tag": [{"type": "Mention", "href": "https://example.com/u/bob", "name": "@bob"}],
        },
    });
    let create = decode(&raw);

    let actor = create.get("actor").and_then(Value::as_document).unwrap();
    assert_eq!(actor.type_name(), "Person");
    assert_eq!(actor.get("preferredUsername").and_then(Value::as_str), Some("ada"));

    let note = create.get("object").and_then(Value::as_document).unwrap();
    assert_eq!(note.id().map(Iri::as_str), Some("https://example.com/notes/1"));
    assert!(note.get("published").and_then(Value::as_datetime).is_some());
    let mention = note.get("tag").and_then(Value::as_link).unwrap();
    assert_eq!(mention.type_name(), "Mention");

    let mut expected = raw.clone();
    expected["object"]["to"] = json!("https://www.w3.org/ns/activitystreams#Public");
    expected["object"]["tag"] = raw["object"]["tag"][0].clone();
    assert_eq!(create.to_json().unwrap(), expected);
}

#[test]
fn test_actor_inbox_must_be_ordered_collection() {
    let person = decode(&json!({
        "type": "Person",
        "inbox": {"type": "OrderedCollection", "totalItems": 0},
        "outbox": {"type": "Note"},
        "followers": "https://example.com/u/ada/followers",
    }));
    assert_eq!(person.get("inbox").unwrap().kind(), ValueKind::Document);
    assert!(person.get("outbox").unwrap().is_unknown());
    assert!(person.get("followers").unwrap().is_reference());
}

#[test]
fn test_collection_paging() {
    let page = decode(&json!({
        "type": "OrderedCollectionPage",
        "partOf": "https://example.com/outbox",
        "next": {"type": "OrderedCollectionPage", "id": "https://example.com/outbox?page=2"},
        "startIndex": 20,
        "orderedItems": ["https://example.com/a/1", "https://example.com/a/2"],
    }));
    assert_eq!(page.get("startIndex").and_then(Value::as_u64), Some(20));
    assert_eq!(page.get("next").and_then(Value::iri).map(Iri::as_str), Some("https://example.com/outbox?page=2"));
    assert_eq!(page.property("orderedItems").unwrap().len(), 2);
}

#[test]
fn test_integral_float_start_index() {
    let page = decode(&json!({"type": "OrderedCollectionPage", "startIndex": 20.0}));
    assert_eq!(page.get("startIndex").and_then(Value::as_u64), Some(20));
    assert_eq!(page.to_json().unwrap()["startIndex"], json!(20));

    let err = Codec::new()
        .decode(&json!({"type": "OrderedCollectionPage", "startIndex": 20.5}))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedPrimitive { .. }));
}

// ============================================================================
// 7. Building documents
// ============================================================================

#[test]
fn test_build_and_encode() {
    let mut note = Document::new(&vocab::NOTE);
    note.set_id(Iri::parse("https://example.com/notes/9").unwrap()).unwrap();
    note.set_context(activity_vocab::ACTIVITY_STREAMS_CONTEXT);
    note.append("content", "Hello").unwrap();
    note.language_map_mut("content").unwrap().set("es", "Hola");
    note.append("to", Iri::parse("https://example.com/u/b").unwrap()).unwrap();
    note.prepend("to", Iri::parse("https://example.com/u/a").unwrap()).unwrap();

    let encoded = Codec::new().encode(&note).unwrap();
    assert_eq!(
        encoded,
        json!({
            "@context": "https://www.w3.org/ns/activitystreams",
            "id": "https://example.com/notes/9",
            "type": "Note",
            "content": "Hello",
            "contentMap": {"es": "Hola"},
            "to": ["https://example.com/u/a", "https://example.com/u/b"],
        })
    );
    let decoded = decode(&encoded);
    assert_eq!(decoded.types().collect::<Vec<_>>(), vec!["Note"]);
    assert_eq!(decoded.to_json().unwrap(), encoded);
}

#[test]
fn test_nested_document_value() {
    let note = Document::new(&vocab::NOTE).with("content", "inner").unwrap();
    let create = Document::new(&vocab::CREATE).with("object", note).unwrap();
    assert_eq!(
        create.to_json().unwrap(),
        json!({"type": "Create", "object": {"type": "Note", "content": "inner"}})
    );
}

#[test]
fn test_arrays_everywhere_config() {
    let like = decode(&json!({"type": "Like", "actor": "https://example.com/a", "published": "2024-01-01T00:00:00Z"}));
    let codec = Codec::new().with_config(CodecConfig { collapse_singletons: false, ..CodecConfig::default() });
    assert_eq!(
        codec.encode(&like).unwrap(),
        json!({"type": ["Like"], "actor": ["https://example.com/a"], "published": "2024-01-01T00:00:00Z"})
    );
}

// ============================================================================
// 8. Errors
// ============================================================================

#[test]
fn test_malformed_date_aborts_decode() {
    let raw = json!({"type": "Create", "object": {"type": "Note", "published": "2024-02-30T00:00:00Z"}});
    let err = Codec::new().decode(&raw).unwrap_err();
    assert!(matches!(err, Error::MalformedPrimitive { kind: "xsd:dateTime", .. }));
}

#[test]
fn test_malformed_date_preserved_when_lenient() {
    let raw = json!({"type": "Note", "published": "2024-02-30T00:00:00Z"});
    let note = Codec::new().with_config(CodecConfig::lenient()).decode(&raw).unwrap();
    assert!(note.get("published").unwrap().is_unknown());
    assert_eq!(note.to_json().unwrap(), raw);
}

#[test]
fn test_encode_failure_propagates_from_nested_value() {
    let place = Document::new(&vocab::PLACE).with("latitude", f64::NAN).unwrap();
    let create = Document::new(&vocab::CREATE).with("object", place).unwrap();
    assert!(matches!(create.to_json(), Err(Error::InvalidValue(_))));
}

#[test]
fn test_wrong_kind_rejected_on_write() {
    let mut note = Document::new(&vocab::NOTE);
    assert!(matches!(note.set("published", "yesterday"), Err(Error::KindNotAllowed { .. })));
    assert!(matches!(note.append("mediaType", "text/html"), Err(Error::FunctionalProperty(_))));
    let video = Document::new(&vocab::VIDEO);
    assert!(matches!(note.append("icon", video), Err(Error::KindNotAllowed { property: "icon", .. })));
}

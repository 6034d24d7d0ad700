//! Purpose: Lock the tag-to-type contract across the whole registered vocabulary.
//! Exports: Integration tests only.
//! Role: Verify envelope validation, abstract resolution, and error taxonomy end to end.
//! Invariants: Every registered wire tag resolves to exactly its registered type.
//! Invariants: Errors abort the whole parse; no partial models are observed.

use redthing::core::envelope;
use redthing::core::error::ErrorKind;
use redthing::core::kind::KindTag;
use redthing::core::registry::{Descriptor, ModelType, ParseRule, Registry};
use redthing::json::parse::from_str;
use redthing::models::model::Model;
use serde_json::{Value, json};

fn minimal_data(tag: KindTag) -> Value {
    match tag {
        KindTag::Comment => json!({"author": "alice", "body": "hi", "replies": ""}),
        KindTag::Account => json!({"name": "alice"}),
        KindTag::Link => json!({"title": "hello"}),
        KindTag::Message => json!({"author": "alice", "body": "hi"}),
        KindTag::Subreddit => json!({"display_name": "rust"}),
        KindTag::Award => json!({"name": "gold"}),
        KindTag::Listing => json!({"after": null, "children": []}),
        KindTag::More => json!({"count": 1, "children": ["abc"]}),
        KindTag::Multireddit => json!({"name": "multi"}),
        KindTag::WikiPage => json!({"content_md": "text"}),
        KindTag::WikiPageSettings => json!({"permlevel": 0, "listed": true}),
        KindTag::LiveThread => json!({"title": "live"}),
        KindTag::LiveUpdate => json!({"body": "update"}),
        KindTag::KarmaBreakdown => json!([{"sr": "rust"}]),
        KindTag::ModAction => json!({"action": "approvelink"}),
        KindTag::Abstract | KindTag::None => unreachable!("sentinels never appear on the wire"),
    }
}

#[test]
fn every_registered_tag_resolves_to_its_own_type() {
    let registry = Registry::standard();
    let wire_tags = [
        KindTag::Comment,
        KindTag::Account,
        KindTag::Link,
        KindTag::Message,
        KindTag::Subreddit,
        KindTag::Award,
        KindTag::Listing,
        KindTag::More,
        KindTag::Multireddit,
        KindTag::WikiPage,
        KindTag::WikiPageSettings,
        KindTag::LiveThread,
        KindTag::LiveUpdate,
        KindTag::KarmaBreakdown,
        KindTag::ModAction,
    ];

    for tag in wire_tags {
        let wire = tag.wire_value().expect("wire tag");
        let node = json!({"kind": wire, "data": minimal_data(tag)});
        let model = envelope::parse_dynamic(&node, &registry)
            .unwrap_or_else(|err| panic!("tag {wire} failed: {err}"));
        assert_eq!(model.kind(), tag, "tag {wire} resolved to the wrong type");
    }
}

#[test]
fn abstract_contribution_resolves_comment_and_submission() {
    let registry = Registry::standard();

    let comment = json!({"kind": "t1", "data": {"author": "a", "body": "b", "replies": ""}});
    let parsed = envelope::parse(&comment, ModelType::Contribution, &registry).expect("comment");
    assert!(matches!(parsed, Model::Comment(_)));

    let link = json!({"kind": "t3", "data": {"title": "hello"}});
    let parsed = envelope::parse(&link, ModelType::Contribution, &registry).expect("submission");
    assert!(matches!(parsed, Model::Submission(_)));

    let message = json!({"kind": "t4", "data": {"author": "a", "body": "b"}});
    let parsed = envelope::parse(&message, ModelType::Contribution, &registry).expect("message");
    assert!(matches!(parsed, Model::PrivateMessage(_)));
}

#[test]
fn abstract_resolution_rejects_unregistered_tags() {
    let registry = Registry::standard();
    let node = json!({"kind": "t9", "data": {}});
    let err = envelope::parse(&node, ModelType::Contribution, &registry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownKind);
    assert_eq!(err.tag(), Some("t9"));
}

#[test]
fn abstract_resolution_requires_a_kind_field() {
    let registry = Registry::standard();
    let node = json!({"data": {"author": "a", "body": "b"}});
    let err = envelope::parse(&node, ModelType::Contribution, &registry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingKindField);
}

#[test]
fn validation_bypass_accepts_a_foreign_tag() {
    let registry = Registry::standard();
    // Submission opts out of validation; the declared tag is ignored entirely.
    let node = json!({"kind": "t5", "data": {"title": "hello"}});
    let parsed = envelope::parse(&node, ModelType::Submission, &registry).expect("bypass");
    assert!(matches!(parsed, Model::Submission(_)));
}

#[test]
fn mismatched_tag_reports_expected_and_actual() {
    let registry = Registry::standard();
    let node = json!({"kind": "t2", "data": {"name": "alice"}});
    let err = envelope::parse(&node, ModelType::Comment, &registry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaMismatch);
    assert_eq!(err.expected(), Some("t1"));
    assert_eq!(err.actual(), Some("t2"));
}

#[test]
fn unregistered_target_is_a_configuration_error() {
    let registry = Registry::empty();
    let node = json!({"kind": "t1", "data": {"author": "a", "body": "b"}});
    let err = envelope::parse(&node, ModelType::Comment, &registry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn none_kind_descriptor_parses_bare_nodes() {
    let mut registry = Registry::empty();
    registry
        .register(
            ModelType::Account,
            Descriptor::new(KindTag::None, ParseRule::Default),
        )
        .expect("fresh registry");

    // No envelope at all: the whole node is the data.
    let node = json!({"name": "alice", "comment_karma": 4});
    let parsed = envelope::parse(&node, ModelType::Account, &registry).expect("bare account");
    match parsed {
        Model::Account(account) => assert_eq!(account.comment_karma, 4),
        other => panic!("expected an account, got {other:?}"),
    }
}

#[test]
fn decode_boundary_feeds_the_resolver() {
    let registry = Registry::standard();
    let tree = from_str(r#"{"kind": "t2", "data": {"name": "alice", "link_karma": 7}}"#)
        .expect("valid json");
    let parsed = envelope::parse(&tree, ModelType::Account, &registry).expect("account");
    match parsed {
        Model::Account(account) => {
            assert_eq!(account.name, "alice");
            assert_eq!(account.link_karma, 7);
        }
        other => panic!("expected an account, got {other:?}"),
    }
}

#[test]
fn decode_boundary_rejects_malformed_text() {
    let err = from_str(r#"{"kind": "t2", "#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);
    assert!(std::error::Error::source(&err).is_some());
}

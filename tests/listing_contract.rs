//! Purpose: Lock the dual-layout listing contract and its child-resolution policies.
//! Exports: Integration tests only.
//! Role: Verify enveloped/bare parity, order preservation, and fail-fast semantics.
//! Invariants: Identical content in either layout yields structurally equal listings.
//! Invariants: A single malformed child aborts the whole listing parse.

use redthing::core::error::ErrorKind;
use redthing::core::kind::KindTag;
use redthing::core::registry::Registry;
use redthing::models::listing::{Listing, parse_listing, parse_listing_dynamic};
use redthing::models::thing::{Account, Subreddit};
use serde_json::{Value, json};

fn children() -> Value {
    json!([
        {"kind": "t2", "data": {"name": "alice", "link_karma": 10}},
        {"kind": "t2", "data": {"name": "bob"}},
        {"kind": "t2", "data": {"name": "carol", "comment_karma": 3}}
    ])
}

#[test]
fn enveloped_and_bare_layouts_are_structurally_equal() {
    let registry = Registry::standard();
    let enveloped = json!({
        "kind": "Listing",
        "data": {"after": "t2_cursor", "children": children()}
    });
    let bare = json!({"after": "t2_cursor", "children": children()});

    let a = parse_listing_dynamic(&enveloped, &registry).expect("enveloped");
    let b = parse_listing_dynamic(&bare, &registry).expect("bare");
    assert_eq!(a, b);

    let a: Listing<Account> = parse_listing(&enveloped, &registry).expect("enveloped static");
    let b: Listing<Account> = parse_listing(&bare, &registry).expect("bare static");
    assert_eq!(a, b);
    assert_eq!(a.next_cursor.as_deref(), Some("t2_cursor"));
}

#[test]
fn static_and_dynamic_policies_agree_on_uniform_children() {
    let registry = Registry::standard();
    let node = json!({"after": null, "children": children()});

    let fixed: Listing<Account> = parse_listing(&node, &registry).expect("static");
    let dynamic = parse_listing_dynamic(&node, &registry).expect("dynamic");

    assert_eq!(fixed.len(), dynamic.len());
    for (account, model) in fixed.iter().zip(dynamic.iter()) {
        assert_eq!(model.kind(), KindTag::Account);
        let name = match model {
            redthing::models::model::Model::Account(dyn_account) => &dyn_account.name,
            other => panic!("expected an account, got {other:?}"),
        };
        assert_eq!(&account.name, name);
    }
}

#[test]
fn dynamic_listing_mixes_types_in_wire_order() {
    let registry = Registry::standard();
    let node = json!({
        "after": null,
        "children": [
            {"kind": "t5", "data": {"display_name": "rust"}},
            {"kind": "t2", "data": {"name": "alice"}},
            {"kind": "t5", "data": {"display_name": "programming"}}
        ]
    });
    let listing = parse_listing_dynamic(&node, &registry).expect("dynamic");
    let kinds: Vec<KindTag> = listing.iter().map(|m| m.kind()).collect();
    assert_eq!(
        kinds,
        [KindTag::Subreddit, KindTag::Account, KindTag::Subreddit]
    );
}

#[test]
fn malformed_child_aborts_with_no_partial_listing() {
    let registry = Registry::standard();
    let node = json!({
        "after": null,
        "children": [
            {"kind": "t2", "data": {"name": "alice"}},
            {"kind": "t2", "data": {"link_karma": "not-a-number"}},
            {"kind": "t2", "data": {"name": "carol"}}
        ]
    });
    let err = parse_listing::<Account>(&node, &registry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);
}

#[test]
fn missing_children_array_is_construction() {
    let registry = Registry::standard();
    let node = json!({"kind": "Listing", "data": {"after": null}});
    let err = parse_listing::<Subreddit>(&node, &registry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);
}

#[test]
fn nested_dynamic_listings_resolve_recursively() {
    let registry = Registry::standard();
    let node = json!({
        "kind": "Listing",
        "data": {
            "after": null,
            "children": [
                {
                    "kind": "Listing",
                    "data": {
                        "after": "inner_cursor",
                        "children": [{"kind": "t2", "data": {"name": "alice"}}]
                    }
                }
            ]
        }
    });
    let outer = parse_listing_dynamic(&node, &registry).expect("outer");
    let inner = outer.children[0].as_listing().expect("inner listing");
    assert_eq!(inner.next_cursor.as_deref(), Some("inner_cursor"));
    assert_eq!(inner.children[0].kind(), KindTag::Account);
}

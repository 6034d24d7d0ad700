//! Purpose: Assemble recursive, heterogeneous comment trees.
//! Exports: `CommentNode`, `parse_comment_tree`.
//! Role: Listing assembler specialized to the `Comment | MoreStub` sum type.
//! Invariants: A listing with no children and no cursor is a leaf.
//! Invariants: Expanding a stub is an external operation re-entering the core.

use crate::core::error::Error;
use crate::core::registry::Registry;
use crate::core::serialize;
use crate::models::listing::{self, Listing};
use crate::models::thing::{Comment, MoreStub};
use serde_json::Value;

/// One element of a comment tree: a real comment (owning its own reply tree)
/// or a continuation stub for siblings the API held back.
#[derive(Clone, Debug, PartialEq)]
pub enum CommentNode {
    Comment(Comment),
    More(MoreStub),
}

impl CommentNode {
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            CommentNode::Comment(comment) => Some(comment),
            CommentNode::More(_) => None,
        }
    }

    pub fn as_more(&self) -> Option<&MoreStub> {
        match self {
            CommentNode::More(stub) => Some(stub),
            CommentNode::Comment(_) => None,
        }
    }
}

/// Assemble a comment tree from either listing layout, resolving each child
/// from its own tag. Comments recurse through their `replies` field.
pub fn parse_comment_tree(node: &Value, registry: &Registry) -> Result<Listing<CommentNode>, Error> {
    let data = listing::listing_data(node)?;
    let mut children = Vec::new();
    for child in listing::children_array(data)? {
        children.push(serialize::comment_node(child, registry)?);
    }
    Ok(Listing {
        next_cursor: listing::cursor(data),
        children,
    })
}

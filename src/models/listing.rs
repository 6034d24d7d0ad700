//! Purpose: Assemble cursor-paginated listings from either wire layout.
//! Exports: `Listing`, `parse_listing`, `parse_listing_dynamic`.
//! Role: Shared pagination container for uniform and per-child-typed sequences.
//! Invariants: Child order mirrors wire array order exactly.
//! Invariants: A missing or null `after` means no further pages; the core never fetches them.

use crate::core::envelope;
use crate::core::error::{Error, ErrorKind};
use crate::core::kind::KindTag;
use crate::core::registry::Registry;
use crate::models::model::{FromData, Model, parse_as};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    pub next_cursor: Option<String>,
    pub children: Vec<T>,
}

impl<T> Listing<T> {
    pub fn empty() -> Self {
        Self {
            next_cursor: None,
            children: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// A leaf carries no children and no further pages.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.next_cursor.is_none()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.children.iter()
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

/// Assemble a listing whose children all share one fixed type.
pub fn parse_listing<T: FromData>(node: &Value, registry: &Registry) -> Result<Listing<T>, Error> {
    let data = listing_data(node)?;
    let mut children = Vec::new();
    for child in children_array(data)? {
        children.push(parse_as::<T>(child, registry)?);
    }
    Ok(Listing {
        next_cursor: cursor(data),
        children,
    })
}

/// Assemble a listing whose children each resolve their own type from their
/// `kind` field, permitting heterogeneous element types.
pub fn parse_listing_dynamic(node: &Value, registry: &Registry) -> Result<Listing<Model>, Error> {
    let data = listing_data(node)?;
    let mut children = Vec::new();
    for child in children_array(data)? {
        children.push(envelope::parse_dynamic(child, registry)?);
    }
    Ok(Listing {
        next_cursor: cursor(data),
        children,
    })
}

/// Locate the listing's data node. An enveloped listing carries both `kind`
/// and `data` and has its tag checked; the bare layout is its own data.
pub(crate) fn listing_data(node: &Value) -> Result<&Value, Error> {
    if node.get("kind").is_some() && node.get("data").is_some() {
        envelope::validate_kind(node, KindTag::Listing)?;
        envelope::data_node(node)
    } else if node.is_object() {
        Ok(node)
    } else {
        Err(Error::new(ErrorKind::Construction).with_message("listing node is not an object"))
    }
}

pub(crate) fn cursor(data: &Value) -> Option<String> {
    data.get("after")
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub(crate) fn children_array(data: &Value) -> Result<&Vec<Value>, Error> {
    data.get("children").and_then(Value::as_array).ok_or_else(|| {
        Error::new(ErrorKind::Construction).with_message("listing has no 'children' array")
    })
}

//! Purpose: Provide the decode entrypoints turning response text into generic JSON trees.
//! Exports: `from_str`, `decode`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Decode failures map to `Construction` with the serde cause attached.
//! Invariants: Helpers are deterministic and hold no state between calls.

use crate::core::error::{Error, ErrorKind};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode raw response text into a generic JSON tree.
pub fn from_str(input: &str) -> Result<Value, Error> {
    serde_json::from_str(input).map_err(|err| {
        Error::new(ErrorKind::Construction)
            .with_message("response is not valid json")
            .with_source(err)
    })
}

/// Map a data node onto a typed structure. This is the default rule's
/// field-mapping step; failures surface as `Construction`.
pub(crate) fn decode<T: DeserializeOwned>(data: &Value) -> Result<T, Error> {
    serde_json::from_value(data.clone()).map_err(|err| {
        Error::new(ErrorKind::Construction)
            .with_message("data node does not match model fields")
            .with_source(err)
    })
}

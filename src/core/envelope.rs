//! Purpose: Detect wire envelope shape and check declared kinds against descriptors.
//! Exports: `parse`, `parse_dynamic`, `kind_field`, `validate_kind`, `data_for`.
//! Role: Front door of the resolution pipeline; all parse entry points funnel through here.
//! Invariants: Validation only runs for concrete expected kinds with `validate = true`.
//! Invariants: Abstract requests always require a `kind` field, regardless of `validate`.

use crate::core::error::{Error, ErrorKind};
use crate::core::kind::KindTag;
use crate::core::registry::{ModelType, Registry};
use crate::core::serialize;
use crate::models::model::Model;
use serde_json::Value;

/// Resolve `node` against `target`'s descriptor and hand it to serializer
/// dispatch. This is the general entry point; listings and comment trees wrap
/// it with their own shape handling.
pub fn parse(node: &Value, target: ModelType, registry: &Registry) -> Result<Model, Error> {
    let descriptor = registry.lookup(target)?;
    match descriptor.expected_kind {
        KindTag::Abstract => {
            let value = kind_field(node)?;
            let tag = registry.resolve_tag(value).ok_or_else(|| {
                Error::new(ErrorKind::UnknownKind)
                    .with_message("no registered type for kind")
                    .with_tag(value)
            })?;
            tracing::debug!(kind = value, resolved = ?tag, "resolving abstract request");
            serialize::dispatch(descriptor.rule, target, node, tag, registry)
        }
        expected => {
            if descriptor.validate && expected != KindTag::None {
                validate_kind(node, expected)?;
            }
            serialize::dispatch(descriptor.rule, target, node, expected, registry)
        }
    }
}

/// Resolve a node purely from its own `kind` field. Used for dynamically-typed
/// listing children, where every element picks its own concrete type.
pub fn parse_dynamic(node: &Value, registry: &Registry) -> Result<Model, Error> {
    let value = kind_field(node)?;
    let tag = registry.resolve_tag(value).ok_or_else(|| {
        Error::new(ErrorKind::UnknownKind)
            .with_message("no registered type for kind")
            .with_tag(value)
    })?;
    let target = registry.default_type_for(tag)?;
    parse(node, target, registry)
}

/// Extract the `kind` field of an envelope as a string.
pub fn kind_field(node: &Value) -> Result<&str, Error> {
    match node.get("kind") {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(Error::new(ErrorKind::MissingKindField)
            .with_message("envelope 'kind' field is not a string")),
        None => {
            Err(Error::new(ErrorKind::MissingKindField)
                .with_message("envelope has no 'kind' field"))
        }
    }
}

/// Require `node` to declare exactly `expected`'s wire value.
pub fn validate_kind(node: &Value, expected: KindTag) -> Result<(), Error> {
    let expected_value = expected.wire_value().ok_or_else(|| {
        Error::new(ErrorKind::Configuration).with_message("sentinel kind cannot be validated")
    })?;
    let actual = kind_field(node)?;
    if actual != expected_value {
        return Err(Error::new(ErrorKind::SchemaMismatch)
            .with_message("declared kind does not match expected kind")
            .with_expected(expected_value)
            .with_actual(actual));
    }
    Ok(())
}

/// Validate `node` for a concrete target type and return its data node: the
/// whole node for `None`-kind types, the `data` child otherwise.
pub(crate) fn data_for<'a>(
    node: &'a Value,
    target: ModelType,
    registry: &Registry,
) -> Result<&'a Value, Error> {
    let descriptor = registry.lookup(target)?;
    match descriptor.expected_kind {
        KindTag::Abstract => Err(Error::new(ErrorKind::Configuration)
            .with_message("abstract types carry no data node of their own")),
        KindTag::None => Ok(node),
        expected => {
            if descriptor.validate {
                validate_kind(node, expected)?;
            }
            data_node(node)
        }
    }
}

pub(crate) fn data_node(node: &Value) -> Result<&Value, Error> {
    node.get("data").ok_or_else(|| {
        Error::new(ErrorKind::Construction).with_message("envelope has no 'data' node")
    })
}

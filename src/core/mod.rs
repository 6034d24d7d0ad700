// Core modules implementing kind tags, descriptor registry, envelope resolution,
// serializer dispatch, and error modeling.
pub mod envelope;
pub mod error;
pub mod kind;
pub mod registry;
pub mod serialize;

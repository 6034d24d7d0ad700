//! Purpose: Resolve kind-tagged content-API JSON payloads into a typed model graph.
//! Exports: `core` (kinds, registry, envelope resolution, dispatch, errors), `json`, `models`.
//! Role: Pure transformation layer; transport, auth, and pagination live in the embedding client.
//! Invariants: The core performs no I/O and keeps no state between parse calls.
//! Invariants: The registry is immutable after construction; parse calls may run in parallel.
pub mod core;
pub mod json;
pub mod models;

//! Purpose: Internal JSON decode boundary shared by tests and embedding callers.
//! Exports: `parse` module with decode helpers.
//! Role: Single seam between raw response text and the generic tree the core consumes.
//! Invariants: The core itself never tokenizes bytes; all decoding goes through here.

pub mod parse;

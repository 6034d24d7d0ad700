// Typed model graph: concrete things, listings, comment trees, and the
// closed result enum produced by the resolver.
pub mod comment_tree;
pub mod listing;
pub mod model;
pub mod submission;
pub mod thing;

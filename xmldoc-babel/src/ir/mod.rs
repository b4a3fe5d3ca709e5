//! In-memory representation of a parsed documentation comment.
//!
//! The tokenizer hands us a flat list of top-level [`entity::Entity`] nodes. The converter
//! wraps them in a synthetic root, reshapes the tree with a few passes and then renders it.

pub mod entity;
pub mod treeviz;

//! # textobj-core: Vim-style text-object resolution
//!
//! Given a read-only buffer and the caller's selection, resolve a text object
//! (`aw`, `is`, `ap`, `ii`, `ia`, `af`, ...) into the span an operator or a
//! visual selection should cover.
//!
//! - **[`position`]**: `Position` (line, col), half-open `Range`, inclusive `Span`
//! - **[`buffer`]**: `Buffer` wrapping a rope with line classification and coordinate conversion
//! - **[`mode`]**: normal / visual / operator-pending, and the pending `Operator`
//! - **[`selection`]**: `SelectionState`: anchor, cursor, count and mode
//! - **[`word`]**, **[`paragraph`]**: character classes and paragraph bounds the objects build on
//! - **[`options`]**: `:set`-style configuration of the argument delimiters
//! - **[`text_object`]**: the resolvers and the operator adjustment

pub mod buffer;
pub mod mode;
pub mod options;
pub mod paragraph;
pub mod position;
pub mod selection;
mod sentence;
pub mod text_object;
pub mod word;

pub use buffer::Buffer;
pub use options::Options;
pub use position::{Position, Span};
pub use selection::SelectionState;
pub use text_object::{resolve_keys, Resolution, Resolved, TextObjectKind};

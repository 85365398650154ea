//! Shunt - move the element under the cursor among its siblings
//!
//! Given one line of source text and a character offset, shunt classifies
//! the syntactic neighborhood around the cursor (array, object literal,
//! parameter list, type parameters, tag attributes, class list, logical
//! expression, union type, or a generic fallback), splits that scope into
//! element and separator chunks, and relocates the element under the cursor
//! left or right while the cursor tracks it.
//!
//! The pipeline is three pure stages:
//! - [`detect::detect`] classifies the environment and its scope range
//! - [`split::split_scope`] partitions the scope into chunks
//! - [`reorder::move_element`] reorders and remaps the cursor
//!
//! All stages are synchronous, allocation-light, and never fail: anything
//! the heuristics cannot handle degrades to an identity no-op.

pub mod chunk;
pub mod detect;
pub mod env;
pub mod reorder;
pub mod scan;
pub mod split;
pub mod test_utils;

pub use chunk::{Chunk, ChunkKind};
pub use detect::detect;
pub use env::{Detection, EnvKind};
pub use reorder::{move_element, move_left, move_right, MoveResult};
pub use split::split_scope;

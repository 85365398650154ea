//! Environment detection
//!
//! Classifies the syntactic context at a cursor position within one line and
//! computes the delimiter-excluded character range of that context.
//!
//! ## Design
//!
//! Detection is an ordered chain of independent rules, each a pure function
//! from the line context to an optional [`Detection`]. The first rule that
//! claims the cursor wins, which keeps the ambiguity policy explicit and
//! testable per rule:
//!
//! 1. generic type-parameter list
//! 2. tag/attribute list (with class-list and nested-value refinement)
//! 3. nearest enclosing bracket pair
//! 4. naive nearest-pair probe for input the scanner chokes on
//! 5. union type
//! 6. logical expression
//! 7. simple (no scope)

mod rules;

use crate::env::{Detection, EnvKind};
use crate::scan;

/// Classify the context at `cursor`. Pure and total: malformed input falls
/// through the rule chain and ends at `Simple`.
pub fn detect(line: &str, cursor: usize) -> Detection {
    let ctx = Ctx::new(line, cursor);
    rules::type_params(&ctx)
        .or_else(|| rules::tag_attributes(&ctx))
        .or_else(|| rules::enclosing_pair(&ctx))
        .or_else(|| rules::naive_pair(&ctx))
        .or_else(|| rules::union_type(&ctx))
        .or_else(|| rules::logical(&ctx))
        .unwrap_or(Detection::bare(EnvKind::Simple))
}

/// Per-call line context shared by all rules
pub(crate) struct Ctx {
    pub(crate) chars: Vec<char>,
    pub(crate) mask: Vec<bool>,
    pub(crate) cursor: usize,
}

impl Ctx {
    fn new(line: &str, cursor: usize) -> Self {
        let chars: Vec<char> = line.chars().collect();
        let mask = scan::quote_mask(&chars);
        Ctx {
            chars,
            mask,
            cursor,
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

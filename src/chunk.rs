//! Scope chunks
//! A split scope is an alternating sequence of element and separator chunks

/// Whether a chunk is reorderable or verbatim glue between elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// One reorderable unit (array item, parameter, attribute, ...)
    Element,
    /// Verbatim source text between two adjacent elements
    Separator,
}

/// One piece of a split scope
///
/// Concatenating all chunk texts of a scope in order reproduces the scope's
/// content exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: ChunkKind,
    pub text: String,
}

impl Chunk {
    pub fn element(text: impl Into<String>) -> Self {
        Chunk {
            kind: ChunkKind::Element,
            text: text.into(),
        }
    }

    pub fn separator(text: impl Into<String>) -> Self {
        Chunk {
            kind: ChunkKind::Separator,
            text: text.into(),
        }
    }

    /// Length in characters (cursor math is character-indexed throughout)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

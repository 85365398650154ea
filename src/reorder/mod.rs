//! Reordering engine
//!
//! Orchestrates detection and splitting, relocates the element under the
//! cursor by list reinsertion, rebuilds the line and remaps the cursor.
//!
//! Every "cannot move" condition (no environment, no elements, target out of
//! range, malformed input) is a silent no-op returning the input unchanged;
//! the engine never corrupts the line and never panics.

use crate::chunk::{Chunk, ChunkKind};
use crate::detect;
use crate::env::EnvKind;
use crate::scan;
use crate::split;

/// Outcome of a move: the full rewritten line and the new cursor offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub text: String,
    pub cursor: usize,
}

/// Move the element under the cursor one position right
pub fn move_right(line: &str, cursor: usize) -> MoveResult {
    move_element(line, cursor, 1)
}

/// Move the element under the cursor one position left
pub fn move_left(line: &str, cursor: usize) -> MoveResult {
    move_element(line, cursor, -1)
}

/// Move the element under the cursor `delta` positions among its siblings
///
/// `cursor` is a character offset into `line`; the returned cursor tracks the
/// moved element, preserving the offset within it.
pub fn move_element(line: &str, cursor: usize, delta: isize) -> MoveResult {
    let chars: Vec<char> = line.chars().collect();
    let detection = detect::detect(line, cursor);

    // scope plus chunks; without a usable scope, fall back to tokenizing the
    // whole line so bare word swaps still work
    let (scope_start, scope_end, chunks) = match detection.scope {
        Some((s, e)) if detection.env != EnvKind::Simple => {
            let content: String = chars[s..=e].iter().collect();
            (s, e, split::split_scope(&content, detection.env))
        }
        _ => (0, chars.len().saturating_sub(1), split_words(&chars)),
    };

    let element_count = chunks
        .iter()
        .filter(|c| c.kind == ChunkKind::Element)
        .count();
    if element_count == 0 {
        return identity(line, cursor);
    }

    // 1. Locate the element under the cursor and the offset within it
    let relative = cursor.saturating_sub(scope_start);
    let from = element_index_at(&chunks, relative, element_count);
    let (from_start, from_len) = element_span(&chunks, from);
    let within = relative.saturating_sub(from_start).min(from_len);

    // 2. Validate the target position
    let target = from as isize + delta;
    if target < 0 || target >= element_count as isize {
        return identity(line, cursor);
    }
    let target = target as usize;
    if target == from {
        return identity(line, cursor);
    }

    // 3. Reinsert the element text at the target; separators stay put
    let mut order: Vec<String> = chunks
        .iter()
        .filter(|c| c.kind == ChunkKind::Element)
        .map(|c| c.text.clone())
        .collect();
    let moved = order.remove(from);
    order.insert(target, moved);
    let mut next = order.into_iter();
    let rebuilt: Vec<Chunk> = chunks
        .iter()
        .map(|c| match c.kind {
            ChunkKind::Element => match next.next() {
                Some(text) => Chunk::element(text),
                None => c.clone(),
            },
            ChunkKind::Separator => c.clone(),
        })
        .collect();

    // 4. Rebuild the line around the unchanged prefix and suffix
    let new_scope: String = rebuilt.iter().map(|c| c.text.as_str()).collect();
    let prefix: String = chars[..scope_start.min(chars.len())].iter().collect();
    let suffix: String = chars[(scope_end + 1).min(chars.len())..].iter().collect();
    let text = format!("{prefix}{new_scope}{suffix}");

    // 5. Remap the cursor onto the moved element
    let (new_start, new_len) = element_span(&rebuilt, target);
    let new_cursor = scope_start + new_start + within.min(new_len);
    MoveResult {
        text,
        cursor: new_cursor,
    }
}

fn identity(line: &str, cursor: usize) -> MoveResult {
    MoveResult {
        text: line.to_string(),
        cursor,
    }
}

/// Index of the element containing `relative`; a cursor inside a separator
/// belongs to the preceding element, and one past the end to the last
fn element_index_at(chunks: &[Chunk], relative: usize, element_count: usize) -> usize {
    let mut pos = 0;
    let mut elem_idx: usize = 0;
    for chunk in chunks {
        let next_pos = pos + chunk.char_len();
        if relative >= pos && relative < next_pos {
            return match chunk.kind {
                ChunkKind::Separator => elem_idx.saturating_sub(1),
                ChunkKind::Element => elem_idx,
            };
        }
        if chunk.kind == ChunkKind::Element {
            elem_idx += 1;
        }
        pos = next_pos;
    }
    element_count.saturating_sub(1)
}

/// Start offset and length (in characters) of the `idx`-th element
fn element_span(chunks: &[Chunk], idx: usize) -> (usize, usize) {
    let mut pos = 0;
    let mut seen = 0;
    for chunk in chunks {
        if chunk.kind == ChunkKind::Element {
            if seen == idx {
                return (pos, chunk.char_len());
            }
            seen += 1;
        }
        pos += chunk.char_len();
    }
    (pos, 0)
}

/// Whole-line fallback tokenizer: runs of word characters are elements,
/// everything else is a separator
fn split_words(chars: &[char]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    for &ch in chars {
        let word = scan::is_word_char(ch);
        if !current.is_empty() && word != in_word {
            chunks.push(finish_run(&mut current, in_word));
        }
        in_word = word;
        current.push(ch);
    }
    if !current.is_empty() {
        chunks.push(finish_run(&mut current, in_word));
    }
    chunks
}

fn finish_run(current: &mut String, in_word: bool) -> Chunk {
    let text = std::mem::take(current);
    if in_word {
        Chunk::element(text)
    } else {
        Chunk::separator(text)
    }
}

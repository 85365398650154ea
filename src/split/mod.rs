//! Scope splitting
//!
//! Partitions a scope's content into alternating element/separator chunks.
//! The rule applied is a fixed function of the environment kind; no rule may
//! split inside an open quote or at positive bracket depth.

use crate::chunk::Chunk;
use crate::env::EnvKind;
use crate::scan::Scanner;

/// Split `content` according to the environment's fixed rule
pub fn split_scope(content: &str, env: EnvKind) -> Vec<Chunk> {
    match env {
        EnvKind::Array | EnvKind::Object | EnvKind::FunctionParams | EnvKind::TypeParams => {
            split_commas(content)
        }
        EnvKind::Union => split_pipes(content),
        EnvKind::Logical => split_logical(content),
        EnvKind::TagAttributes => split_attributes(content),
        EnvKind::ClassList => split_class_list(content),
        EnvKind::Simple => vec![Chunk::element(content)],
    }
}

/// Top-level commas; elements trimmed, separator keeps its following space
fn split_commas(content: &str) -> Vec<Chunk> {
    let chars: Vec<char> = content.chars().collect();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut scanner = Scanner::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == ',' && scanner.at_top_level() {
            flush_trimmed(&mut chunks, &mut current);
            if chars.get(i + 1) == Some(&' ') {
                chunks.push(Chunk::separator(", "));
                i += 2;
            } else {
                chunks.push(Chunk::separator(","));
                i += 1;
            }
            continue;
        }
        scanner.step(ch, if i > 0 { Some(chars[i - 1]) } else { None });
        current.push(ch);
        i += 1;
    }
    flush_trimmed(&mut chunks, &mut current);
    chunks
}

/// Top-level single pipes; separator preserves ` | ` vs `|` spacing
fn split_pipes(content: &str) -> Vec<Chunk> {
    let chars: Vec<char> = content.chars().collect();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut scanner = Scanner::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '|' && scanner.at_top_level() {
            flush_trimmed(&mut chunks, &mut current);
            let spaced = i > 0 && chars[i - 1] == ' ' && chars.get(i + 1) == Some(&' ');
            chunks.push(Chunk::separator(if spaced { " | " } else { "|" }));
            i += if chars.get(i + 1) == Some(&' ') { 2 } else { 1 };
            continue;
        }
        scanner.step(ch, if i > 0 { Some(chars[i - 1]) } else { None });
        current.push(ch);
        i += 1;
    }
    flush_trimmed(&mut chunks, &mut current);
    chunks
}

/// Top-level `&&`/`||`; surrounding spaces attach to the separator
fn split_logical(content: &str) -> Vec<Chunk> {
    let chars: Vec<char> = content.chars().collect();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut scanner = Scanner::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();
        let op = match (ch, next) {
            ('&', Some('&')) => Some("&&"),
            ('|', Some('|')) => Some("||"),
            _ => None,
        };
        if let Some(op) = op {
            if scanner.at_top_level() {
                flush_trimmed_end(&mut chunks, &mut current);
                let left = !chunks.is_empty() && i > 0 && chars[i - 1] == ' ';
                let right = chars.get(i + 2) == Some(&' ');
                let sep = format!(
                    "{}{}{}",
                    if left { " " } else { "" },
                    op,
                    if right { " " } else { "" }
                );
                chunks.push(Chunk::separator(sep));
                i += if right { 3 } else { 2 };
                continue;
            }
        }
        scanner.step(ch, if i > 0 { Some(chars[i - 1]) } else { None });
        current.push(ch);
        i += 1;
    }
    flush_trimmed_end(&mut chunks, &mut current);
    chunks
}

/// Top-level space runs collapse to a single-space separator; quoted and
/// bracketed attribute values are never split internally
fn split_attributes(content: &str) -> Vec<Chunk> {
    let chars: Vec<char> = content.chars().collect();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut scanner = Scanner::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == ' ' && scanner.at_top_level() {
            if !current.is_empty() {
                chunks.push(Chunk::element(std::mem::take(&mut current)));
            }
            while chars.get(i + 1) == Some(&' ') {
                i += 1;
            }
            chunks.push(Chunk::separator(" "));
            i += 1;
            continue;
        }
        scanner.step(ch, if i > 0 { Some(chars[i - 1]) } else { None });
        current.push(ch);
        i += 1;
    }
    if !current.is_empty() {
        chunks.push(Chunk::element(current));
    }
    chunks
}

/// Spaces outside quotes, with unquoted `[...]` arbitrary-value segments
/// protected by a bracket counter kept independent of quote state
fn split_class_list(content: &str) -> Vec<Chunk> {
    let chars: Vec<char> = content.chars().collect();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth: usize = 0;
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '\'' | '"' | '`' => match quote {
                Some(q) if q == ch && (i == 0 || chars[i - 1] != '\\') => quote = None,
                None => quote = Some(ch),
                _ => {}
            },
            ' ' if quote.is_none() && depth == 0 => {
                if !current.is_empty() {
                    chunks.push(Chunk::element(std::mem::take(&mut current)));
                }
                while chars.get(i + 1) == Some(&' ') {
                    i += 1;
                }
                chunks.push(Chunk::separator(" "));
                i += 1;
                continue;
            }
            _ => {}
        }
        current.push(ch);
        i += 1;
    }
    if !current.is_empty() {
        chunks.push(Chunk::element(current));
    }
    chunks
}

fn flush_trimmed(chunks: &mut Vec<Chunk>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(Chunk::element(trimmed));
    }
    current.clear();
}

/// Logical elements keep leading spaces; the separator only ever absorbs
/// one space per side, so anything further left must stay with the element
/// for the chunks to rejoin exactly
fn flush_trimmed_end(chunks: &mut Vec<Chunk>, current: &mut String) {
    let trimmed = current.trim_end();
    if !trimmed.is_empty() {
        chunks.push(Chunk::element(trimmed));
    }
    current.clear();
}

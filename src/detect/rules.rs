//! Detection rules, in priority order
//!
//! Every rule returns `None` when it does not claim the cursor, letting the
//! chain in [`super::detect`] fall through to the next rule.

use super::Ctx;
use crate::env::{Detection, EnvKind};
use crate::scan;

/// Control keywords whose trailing parens are not a call
const CONTROL_KEYWORDS: [&str; 6] = ["if", "while", "for", "switch", "catch", "with"];

/// Rule 1: generic type-parameter list `<...>`
///
/// A `<` left of the cursor whose balanced `>` lies at or after it, accepted
/// only when it looks attached: an identifier or `]` right before the `<`
/// (`Generic<T, X>`), or a `(` right after the `>` (generic signature).
pub(super) fn type_params(ctx: &Ctx) -> Option<Detection> {
    let chars = &ctx.chars;
    if chars.is_empty() || ctx.cursor == 0 {
        return None;
    }
    let start = ctx.cursor.min(chars.len() - 1);
    for i in (0..=start).rev() {
        if ctx.mask[i] || chars[i] != '<' {
            continue;
        }
        let Some(j) = scan::match_forward(chars, &ctx.mask, i, '<', '>') else {
            continue;
        };
        if !(i < ctx.cursor && ctx.cursor <= j) {
            continue;
        }
        let attached = matches!(
            prev_non_space(chars, i),
            Some(c) if scan::is_word_char(c) || c == ']'
        );
        let generic_call = next_non_space(chars, j + 1) == Some('(');
        if attached || generic_call {
            return Some(Detection::scoped(EnvKind::TypeParams, interior(chars, i, j)));
        }
    }
    None
}

/// Rule 2: tag/attribute list `<name a={1} b="x">`
///
/// Claims the cursor when it sits inside an opening tag. A `>` inside a
/// quoted value, inside a bracketed value, or preceded by `=` does not
/// terminate the tag. Within the tag, a cursor inside a `class`/`className`
/// value refines to `ClassList`, and a cursor inside a nested bracketed
/// value refines to the value's own environment.
pub(super) fn tag_attributes(ctx: &Ctx) -> Option<Detection> {
    let chars = &ctx.chars;
    if !has_tag_open(chars) || chars.is_empty() {
        return None;
    }
    let start = ctx.cursor.min(chars.len() - 1);
    let lt = (0..=start).rev().find(|&i| chars[i] == '<' && !ctx.mask[i])?;

    // skip the tag name
    let mut i = lt + 1;
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }
    while i < chars.len() && is_tag_name_char(chars[i]) {
        i += 1;
    }
    let name_end = i;

    // find the terminating '>'
    let mut scanner = scan::Scanner::new();
    let mut gt = None;
    while i < chars.len() {
        let ch = chars[i];
        let prev = Some(chars[i - 1]);
        if scanner.at_top_level() && ch == '>' && prev != Some('=') {
            gt = Some(i);
            break;
        }
        scanner.step(ch, prev);
        i += 1;
    }
    let gt = gt?;
    if !(lt < ctx.cursor && ctx.cursor <= gt) {
        return None;
    }

    // attribute region between the tag name and '>', minus a self-closing '/'
    let mut s = name_end;
    while s < gt && chars[s].is_whitespace() {
        s += 1;
    }
    let mut e = gt - 1;
    while e > s && chars[e].is_whitespace() {
        e -= 1;
    }
    if e >= s && chars[e] == '/' {
        if e == s {
            e = 0; // lone '/': empty region, flagged via s > e below
            s = 1;
        } else {
            e -= 1;
            while e > s && chars[e].is_whitespace() {
                e -= 1;
            }
        }
    }
    let has_region = s <= e && s < gt;

    if has_region {
        if let Some(det) = class_list_at(ctx, s, e) {
            return Some(det);
        }
    }

    // nested bracketed value under the cursor takes precedence over the tag
    let nested = scan::find_enclosing_pair(chars, &ctx.mask, ctx.cursor, &['(', '[', '{', '<']);
    if let Some(p) = nested {
        if p.open != '<' && p.open_idx > s && p.close_idx < gt {
            let scope = interior(chars, p.open_idx, p.close_idx);
            match p.open {
                '[' => return Some(Detection::scoped(EnvKind::Array, scope)),
                '{' => {
                    // only object-shaped braces; a plain expression value
                    // stays with the surrounding tag
                    let colon = scan::has_top_level(
                        chars,
                        p.open_idx + 1..p.close_idx,
                        |c, _| c == ':',
                    );
                    if colon {
                        return Some(Detection::scoped(EnvKind::Object, scope));
                    }
                }
                '(' => {
                    if arrow_follows(chars, p.close_idx) {
                        return Some(Detection::scoped(EnvKind::FunctionParams, scope));
                    }
                    if has_top_level_logical(chars, p.open_idx + 1, p.close_idx) {
                        return Some(Detection::scoped(EnvKind::Logical, scope));
                    }
                }
                _ => {}
            }
        }
    }

    if has_region {
        Some(Detection::scoped(EnvKind::TagAttributes, Some((s, e))))
    } else {
        Some(Detection::bare(EnvKind::TagAttributes))
    }
}

/// Rule 3: nearest enclosing `()`, `[]` or `{}` pair
pub(super) fn enclosing_pair(ctx: &Ctx) -> Option<Detection> {
    let chars = &ctx.chars;
    let p = scan::find_enclosing_pair(chars, &ctx.mask, ctx.cursor, &['(', '[', '{'])?;
    let scope = interior(chars, p.open_idx, p.close_idx);
    match p.open {
        '[' => Some(Detection::scoped(EnvKind::Array, scope)),
        '{' => Some(Detection::scoped(EnvKind::Object, scope)),
        '(' => {
            // Logical only when the operator sits inside this pair; a pair
            // whose operators lie outside it falls through, usually to the
            // whole-line logical rule
            if arrow_follows(chars, p.close_idx) || call_precedes(chars, p.open_idx) {
                Some(Detection::scoped(EnvKind::FunctionParams, scope))
            } else if has_top_level_logical(chars, p.open_idx + 1, p.close_idx) {
                Some(Detection::scoped(EnvKind::Logical, scope))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Rule 4: naive nearest-pair probe
///
/// Plain last-index/first-index search, for lines where unbalanced quotes or
/// stray brackets confuse the depth-balanced scan.
pub(super) fn naive_pair(ctx: &Ctx) -> Option<Detection> {
    let chars = &ctx.chars;
    let cursor = ctx.cursor;
    if chars.is_empty() {
        return None;
    }
    let probe = |open: char, close: char| -> Option<(usize, usize)> {
        let from = cursor.min(chars.len() - 1);
        let open_idx = (0..=from).rev().find(|&i| chars[i] == open)?;
        let close_idx = (cursor..chars.len()).find(|&j| chars[j] == close)?;
        (open_idx < cursor && cursor <= close_idx).then_some((open_idx, close_idx))
    };
    if let Some((o, c)) = probe('[', ']') {
        return Some(Detection::scoped(EnvKind::Array, interior(chars, o, c)));
    }
    if let Some((o, c)) = probe('{', '}') {
        return Some(Detection::scoped(EnvKind::Object, interior(chars, o, c)));
    }
    if let Some((o, c)) = probe('(', ')') {
        if arrow_follows(chars, c) || call_precedes(chars, o) {
            return Some(Detection::scoped(
                EnvKind::FunctionParams,
                interior(chars, o, c),
            ));
        }
    }
    None
}

/// Rule 5: union type
///
/// A quoted-literal pipe pattern (`'a' | 'b'`) or a bare single-pipe pattern
/// (`A | B`). Scope runs from just after the last `=` (or line start) to the
/// end of the line, truncated before a `;` or a `//` comment.
pub(super) fn union_type(ctx: &Ctx) -> Option<Detection> {
    let chars = &ctx.chars;
    if !has_union_pipe(chars) {
        return None;
    }
    let s = chars
        .iter()
        .rposition(|&c| c == '=')
        .map_or(0, |i| i + 1);
    let mut e = chars.len() - 1;
    if let Some(semi) = (s..chars.len()).find(|&i| chars[i] == ';') {
        e = e.min(semi.saturating_sub(1));
    }
    if let Some(slashes) =
        (s..chars.len().saturating_sub(1)).find(|&i| chars[i] == '/' && chars[i + 1] == '/')
    {
        e = e.min(slashes.saturating_sub(1));
    }
    Some(Detection::scoped(EnvKind::Union, trimmed(chars, s, e)))
}

/// Rule 6: logical expression spanning the whole line
pub(super) fn logical(ctx: &Ctx) -> Option<Detection> {
    let chars = &ctx.chars;
    if chars.is_empty() || !has_top_level_logical(chars, 0, chars.len()) {
        return None;
    }
    Some(Detection::scoped(
        EnvKind::Logical,
        trimmed(chars, 0, chars.len() - 1),
    ))
}

// ---- shared predicates and range helpers ----

fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Tag-opening pattern: `<` immediately followed by a letter
fn has_tag_open(chars: &[char]) -> bool {
    chars
        .windows(2)
        .any(|w| w[0] == '<' && w[1].is_ascii_alphabetic())
}

/// `=>` after the closing paren, spaces allowed
fn arrow_follows(chars: &[char], close_idx: usize) -> bool {
    let mut k = close_idx + 1;
    while k < chars.len() && chars[k] == ' ' {
        k += 1;
    }
    chars.get(k) == Some(&'=') && chars.get(k + 1) == Some(&'>')
}

/// The token before `(` is an identifier that is not a control keyword
fn call_precedes(chars: &[char], open_idx: usize) -> bool {
    let mut k = open_idx;
    while k > 0 && chars[k - 1] == ' ' {
        k -= 1;
    }
    let end = k;
    while k > 0 && scan::is_word_char(chars[k - 1]) {
        k -= 1;
    }
    if k == end || chars[k].is_ascii_digit() {
        return false;
    }
    let word: String = chars[k..end].iter().collect();
    !CONTROL_KEYWORDS.contains(&word.as_str())
}

fn has_top_level_logical(chars: &[char], from: usize, to: usize) -> bool {
    scan::has_top_level(chars, from..to, |c, next| {
        (c == '&' && next == Some('&')) || (c == '|' && next == Some('|'))
    })
}

/// A single `|` (never `||`) flanked by identifier or quote characters
fn has_union_pipe(chars: &[char]) -> bool {
    for i in 0..chars.len() {
        if chars[i] != '|' {
            continue;
        }
        if chars.get(i + 1) == Some(&'|') || (i > 0 && chars[i - 1] == '|') {
            continue;
        }
        let wordish =
            |c: char| scan::is_word_char(c) || matches!(c, '\'' | '"' | '`');
        let left = prev_non_space(chars, i);
        let right = next_non_space(chars, i + 1);
        if left.is_some_and(wordish) && right.is_some_and(wordish) {
            return true;
        }
    }
    false
}

/// Cursor inside the quoted value of a `class=` / `className=` attribute
fn class_list_at(ctx: &Ctx, s: usize, e: usize) -> Option<Detection> {
    let chars = &ctx.chars;
    let mut i = s;
    while i <= e {
        let ch = chars[i];
        if scan::is_word_char(ch) || ch == '-' {
            let name_start = i;
            while i <= e && (scan::is_word_char(chars[i]) || chars[i] == '-') {
                i += 1;
            }
            let name: String = chars[name_start..i].iter().collect();
            if (name == "class" || name == "className")
                && i < e
                && chars[i] == '='
                && matches!(chars[i + 1], '"' | '\'' | '`')
            {
                let q = chars[i + 1];
                let open = i + 1;
                let mut j = open + 1;
                while j <= e && !(chars[j] == q && chars[j - 1] != '\\') {
                    j += 1;
                }
                if j <= e {
                    if open < ctx.cursor && ctx.cursor <= j {
                        return Some(Detection::scoped(
                            EnvKind::ClassList,
                            interior(chars, open, j),
                        ));
                    }
                    i = j + 1;
                }
            }
            continue;
        }
        // skip quoted values of other attributes wholesale
        if matches!(ch, '"' | '\'' | '`') {
            let mut j = i + 1;
            while j <= e && !(chars[j] == ch && chars[j - 1] != '\\') {
                j += 1;
            }
            i = j + 1;
            continue;
        }
        i += 1;
    }
    None
}

/// Trimmed interior of a pair, delimiters excluded; `None` when empty
fn interior(chars: &[char], open_idx: usize, close_idx: usize) -> Option<(usize, usize)> {
    if close_idx <= open_idx + 1 {
        return None;
    }
    trimmed(chars, open_idx + 1, close_idx - 1)
}

/// Shrink an inclusive range past surrounding whitespace; `None` when empty
fn trimmed(chars: &[char], mut s: usize, mut e: usize) -> Option<(usize, usize)> {
    if chars.is_empty() {
        return None;
    }
    e = e.min(chars.len() - 1);
    while s <= e && chars[s].is_whitespace() {
        s += 1;
    }
    if s > e {
        return None;
    }
    while e > s && chars[e].is_whitespace() {
        e -= 1;
    }
    Some((s, e))
}

fn prev_non_space(chars: &[char], i: usize) -> Option<char> {
    chars[..i].iter().rev().copied().find(|c| !c.is_whitespace())
}

fn next_non_space(chars: &[char], from: usize) -> Option<char> {
    if from >= chars.len() {
        return None;
    }
    chars[from..].iter().copied().find(|c| !c.is_whitespace())
}

//! Shared lexical scanning
//!
//! Both the environment detector and the scope splitter need the same two
//! facts about any position in a line: is it inside a quoted span, and how
//! deep is it in brackets. Keeping one scanner here guarantees that
//! escaped-quote and nested-bracket handling behaves identically everywhere.

/// Quote context of the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteState {
    Normal,
    InSingle,
    InDouble,
    InTemplate,
}

impl QuoteState {
    fn entered_by(ch: char) -> Option<Self> {
        match ch {
            '\'' => Some(QuoteState::InSingle),
            '"' => Some(QuoteState::InDouble),
            '`' => Some(QuoteState::InTemplate),
            _ => None,
        }
    }

    fn delimiter(self) -> Option<char> {
        match self {
            QuoteState::Normal => None,
            QuoteState::InSingle => Some('\''),
            QuoteState::InDouble => Some('"'),
            QuoteState::InTemplate => Some('`'),
        }
    }
}

/// Incremental quote-state and bracket-depth tracker
///
/// Feed characters left to right with [`Scanner::step`]; query the state
/// *before* feeding a character to know the context it appears in.
#[derive(Debug, Clone)]
pub struct Scanner {
    quote: QuoteState,
    stack: Vec<char>,
}

impl Scanner {
    pub fn new() -> Self {
        Scanner {
            quote: QuoteState::Normal,
            stack: Vec::new(),
        }
    }

    /// Advance over one character; `prev` is the character before it,
    /// needed to recognize backslash-escaped quotes.
    pub fn step(&mut self, ch: char, prev: Option<char>) {
        if let Some(delim) = self.quote.delimiter() {
            if ch == delim && prev != Some('\\') {
                self.quote = QuoteState::Normal;
            }
            return;
        }
        if let Some(state) = QuoteState::entered_by(ch) {
            self.quote = state;
            return;
        }
        if let Some(close) = matching_close(ch) {
            self.stack.push(close);
            return;
        }
        // mismatched closers are ignored rather than corrupting the stack
        if is_closing(ch) && self.stack.last() == Some(&ch) {
            self.stack.pop();
        }
    }

    pub fn in_quote(&self) -> bool {
        self.quote != QuoteState::Normal
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Outside quotes and at bracket depth zero
    pub fn at_top_level(&self) -> bool {
        !self.in_quote() && self.stack.is_empty()
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new()
    }
}

pub fn is_opening(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

pub fn is_closing(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Closing bracket for the three depth-tracked openers
pub fn matching_close(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Closing delimiter for any pair the detector searches, angles included
pub fn pair_close(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

/// Word characters for the generic fallback tokenizer and identifier probes
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Mark every character that lies inside a quoted span, delimiters included
pub fn quote_mask(chars: &[char]) -> Vec<bool> {
    let mut scanner = Scanner::new();
    let mut mask = vec![false; chars.len()];
    for (i, &ch) in chars.iter().enumerate() {
        let before = scanner.in_quote();
        scanner.step(ch, if i > 0 { Some(chars[i - 1]) } else { None });
        mask[i] = before || scanner.in_quote();
    }
    mask
}

/// An enclosing bracket pair around a cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub open: char,
    pub close: char,
    pub open_idx: usize,
    pub close_idx: usize,
}

/// Find the matching closer for the opener at `open_idx`, skipping quoted
/// spans. Returns `None` for an unbalanced pair.
pub fn match_forward(
    chars: &[char],
    mask: &[bool],
    open_idx: usize,
    open: char,
    close: char,
) -> Option<usize> {
    let mut depth = 0i32;
    for (j, &c) in chars.iter().enumerate().skip(open_idx) {
        if mask[j] {
            continue;
        }
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(j);
            }
        }
    }
    None
}

/// Nearest enclosing pair around the cursor, scanning left for an opener
/// from `opens` whose matching closer straddles the cursor.
///
/// A pair contains the cursor when `open_idx < cursor && cursor <= close_idx`;
/// candidates whose closer falls short are abandoned and the scan continues
/// further left. Quoted spans are skipped on both sides of the search.
pub fn find_enclosing_pair(
    chars: &[char],
    mask: &[bool],
    cursor: usize,
    opens: &[char],
) -> Option<Pair> {
    if chars.is_empty() {
        return None;
    }
    let start = cursor.min(chars.len() - 1);
    for i in (0..=start).rev() {
        if mask[i] || !opens.contains(&chars[i]) {
            continue;
        }
        let open = chars[i];
        let Some(close) = pair_close(open) else {
            continue;
        };
        if let Some(j) = match_forward(chars, mask, i, open, close) {
            if i < cursor && cursor <= j {
                return Some(Pair {
                    open,
                    close,
                    open_idx: i,
                    close_idx: j,
                });
            }
        }
    }
    None
}

/// True when `pred` matches at bracket depth zero outside quotes within
/// `range`. `pred` receives the character and its successor so two-character
/// operators can be recognized.
pub fn has_top_level(
    chars: &[char],
    range: std::ops::Range<usize>,
    pred: impl Fn(char, Option<char>) -> bool,
) -> bool {
    let mut scanner = Scanner::new();
    for i in range {
        if i >= chars.len() {
            break;
        }
        let ch = chars[i];
        let next = chars.get(i + 1).copied();
        if scanner.at_top_level() && pred(ch, next) {
            return true;
        }
        scanner.step(ch, if i > 0 { Some(chars[i - 1]) } else { None });
    }
    false
}

//! Test utilities
//! Shared helpers for cursor-marked fixtures

/// Split a `┇`-marked string into the plain text and the cursor's character
/// index. The marker itself is removed.
///
/// # Examples
/// ```
/// use shunt::test_utils::code_cursor;
///
/// let (code, cursor) = code_cursor("[1, ┇2, 3]");
/// assert_eq!(code, "[1, 2, 3]");
/// assert_eq!(cursor, 4);
/// ```
pub fn code_cursor(marked: &str) -> (String, usize) {
    let cursor = marked.chars().position(|c| c == '┇').unwrap_or(0);
    let code: String = marked.chars().filter(|&c| c != '┇').collect();
    (code, cursor)
}

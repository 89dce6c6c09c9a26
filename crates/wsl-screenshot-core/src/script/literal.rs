//! PowerShell string literals for caller-supplied values
//!
//! Window titles, process names, monitor selectors and paths all come from the
//! caller. They are embedded as single-quoted literals: inside `'...'`
//! PowerShell performs no variable expansion and no escape processing, and the
//! only way to end the literal is a quote character, which is doubled here.
//! PowerShell also accepts the typographic quotes U+2018..U+201B as single
//! quotes, so those are doubled too.

/// Characters PowerShell treats as a single quote
const SINGLE_QUOTES: [char; 5] = ['\'', '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'];

/// Renders `value` as a PowerShell single-quoted string literal
///
/// NUL characters are dropped; every other character is preserved.
///
/// # Examples
///
/// ```
/// use wsl_screenshot_core::script::ps_literal;
///
/// assert_eq!(ps_literal("Notepad"), "'Notepad'");
/// assert_eq!(ps_literal("it's"), "'it''s'");
/// assert_eq!(ps_literal(r"C:\Users\me\a.png"), r"'C:\Users\me\a.png'");
/// ```
pub fn ps_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');
    for ch in value.chars() {
        if ch == '\0' {
            continue;
        }
        if SINGLE_QUOTES.contains(&ch) {
            literal.push(ch);
        }
        literal.push(ch);
    }
    literal.push('\'');
    literal
}

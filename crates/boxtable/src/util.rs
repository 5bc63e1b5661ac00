//! Style-aware measurement and styling helpers.
//!
//! Cell values may already carry SGR escape sequences (`ESC [ <digits> m`),
//! e.g. a value that was made bold before it reached the table. Those
//! sequences occupy no space on screen, so every width calculation goes
//! through [`stripped_len`] instead of `str::len`.

use std::borrow::Cow;

const ESC: char = '\x1b';

/// Removes every well-formed `ESC [ <digits> m` sequence from `s`.
///
/// Anything else, including a bare `ESC`, an `ESC [` not followed by digits,
/// or a digit run not closed by `m`, is kept verbatim.
///
/// # Example
///
/// ```rust
/// use boxtable::strip_styles;
///
/// assert_eq!(strip_styles("\x1b[1mbold\x1b[0m"), "bold");
/// assert_eq!(strip_styles("plain"), "plain");
/// assert_eq!(strip_styles("\x1b[mkept"), "\x1b[mkept");
/// ```
pub fn strip_styles(s: &str) -> Cow<'_, str> {
    if !s.contains(ESC) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find(ESC) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match sequence_len(tail) {
            Some(len) => rest = &tail[len..],
            None => {
                out.push(ESC);
                rest = &tail[ESC.len_utf8()..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Length of `s` in characters, not counting SGR escape sequences.
///
/// ```rust
/// use boxtable::stripped_len;
///
/// assert_eq!(stripped_len("hello"), 5);
/// assert_eq!(stripped_len("\x1b[1mhello\x1b[0m"), 5);
/// ```
pub fn stripped_len(s: &str) -> usize {
    let mut len = 0;
    let mut rest = s;
    while let Some(pos) = rest.find(ESC) {
        len += rest[..pos].chars().count();
        let tail = &rest[pos..];
        match sequence_len(tail) {
            Some(seq) => rest = &tail[seq..],
            None => {
                len += 1;
                rest = &tail[ESC.len_utf8()..];
            }
        }
    }
    len + rest.chars().count()
}

/// If `s` starts with `ESC [ <digits> m`, returns its byte length.
fn sequence_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.len() < 4 || bytes[0] != 0x1b || bytes[1] != b'[' {
        return None;
    }
    let digits = bytes[2..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    match bytes.get(2 + digits) {
        Some(b'm') => Some(3 + digits),
        _ => None,
    }
}

/// Wraps `s` in `ESC[1m` … `ESC[0m`.
///
/// Styling is forced on: whether a header is bold is a table option, not a
/// property of the terminal the output ends up on.
pub fn bold(s: &str) -> String {
    console::style(s).bold().force_styling(true).to_string()
}

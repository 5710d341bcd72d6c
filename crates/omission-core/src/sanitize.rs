//! Input sanitizing for record phrases.
//!
//! Raw keystrokes are filtered down to a single line of non-pictographic
//! text before they ever reach the codec. Whitespace is only trimmed at
//! submission time.

use std::sync::LazyLock;

use regex::Regex;

use crate::MAX_TEXT_CHARS;

/// Emoji and pictographic ranges, joiners, variation selectors, tag
/// characters, and line breaks.
static STRIPPED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F1E0}-\x{1F1FF}",
        r"\x{2600}-\x{26FF}",
        r"\x{2700}-\x{27BF}",
        r"\x{FE00}-\x{FE0F}",
        r"\x{1F900}-\x{1F9FF}",
        r"\x{1FA00}-\x{1FA6F}",
        r"\x{1FA70}-\x{1FAFF}",
        r"\x{200D}\x{20E3}",
        r"\x{E0020}-\x{E007F}",
        r"\r\n",
        r"]",
    ))
    .expect("stripped character class is a valid pattern")
});

/// Length of `s` as a browser text input counts it (UTF-16 code units).
pub fn input_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Clean a raw input value against the last accepted one.
///
/// Emoji, pictographs and line breaks are removed. If what remains would
/// exceed [`MAX_TEXT_CHARS`], the edit is ignored and `current` is kept.
pub fn sanitize_input(raw: &str, current: &str) -> String {
    let cleaned = STRIPPED_RE.replace_all(raw, "");

    if input_len(&cleaned) <= MAX_TEXT_CHARS {
        cleaned.into_owned()
    } else {
        current.to_string()
    }
}

/// Trim a sanitized value for submission.
///
/// Returns `None` when nothing but whitespace is left, in which case
/// submitting is a no-op.
pub fn prepare_submission(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

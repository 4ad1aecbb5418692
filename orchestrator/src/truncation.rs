//! Character-bounded previews of request and response text.

use std::borrow::Cow;

/// Characters of a request echoed into log lines.
pub const LOG_PREVIEW_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Returns `text` unchanged when it has at most `max_chars` characters,
/// otherwise its first `max_chars` characters followed by `...`. Cuts on
/// character boundaries, never inside a UTF-8 sequence.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

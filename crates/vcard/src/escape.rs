use std::borrow::Cow;

/// Escape a TEXT value per RFC 2426: backslash, semicolon, comma and line breaks.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', ';', ',', '\r', '\n']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

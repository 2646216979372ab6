//! Reversible escape encoding for template-significant characters.
//!
//! A backslash-escaped character (`\[`, `\:`, `\ `, ...) must not be visible
//! to template recognition. Encoding rewrites each `\c` pair into an opaque
//! token built from a marker character and the hex codepoint of `c`, which
//! contains no bracket, colon, or whitespace. Decoding is the exact inverse
//! and restores the original `\c` pair.

/// Marker delimiting an encoded escape sequence. A control character so it
/// cannot collide with anything typed in a shell command.
const ESCAPE_MARKER: char = '\u{1f}';

/// Encode every `\c` pair as `MARKER hex(c) MARKER`.
///
/// A trailing lone backslash has nothing to escape and passes through.
pub fn encode_escaped_characters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(escaped) => {
                out.push(ESCAPE_MARKER);
                out.push_str(&format!("{:x}", escaped as u32));
                out.push(ESCAPE_MARKER);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Decode every `MARKER hex MARKER` token back to its original `\c` pair.
///
/// Text without markers is returned unchanged, so decoding is safe to apply
/// to every segment of a scanned command. A marker that does not open a
/// well-formed token (no closing marker, or non-hex between) passes through
/// unchanged, so stray marker characters in the raw input survive the round
/// trip. Raw text that happens to spell a complete token is
/// indistinguishable from encoder output and decodes as one.
pub fn decode_escaped_characters(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != ESCAPE_MARKER {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && chars[j] != ESCAPE_MARKER {
            j += 1;
        }

        let decoded = if j < chars.len() {
            let hex: String = chars[i + 1..j].iter().collect();
            u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
        } else {
            None
        };

        match decoded {
            Some(c) => {
                out.push('\\');
                out.push(c);
                i = j + 1;
            }
            None => {
                out.push(ESCAPE_MARKER);
                i += 1;
            }
        }
    }

    out
}

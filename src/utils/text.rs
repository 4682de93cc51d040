//! Small string helpers for notification bodies and log output.

/// Returns at most `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Shortens a device token for logs: `abcdefgh...`.
pub fn mask_token(token: &str) -> String {
    const VISIBLE: usize = 12;

    let prefix = truncate_chars(token, VISIBLE);
    if prefix.len() == token.len() {
        prefix.to_string()
    } else {
        format!("{prefix}...")
    }
}

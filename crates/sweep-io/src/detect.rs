//! Binary classification for candidate files.
//!
//! Head-byte heuristic: a file is binary when any leading byte falls outside
//! the printable-ASCII-plus-whitespace set.

/// Number of leading bytes inspected by [`is_binary`].
pub const CLASSIFY_HEAD_BYTES: usize = 1024;

/// Classify a file head as binary.
///
/// Inspects at most the first 1024 bytes of `head` and returns `true` when
/// any byte falls outside tab (0x09), LF (0x0A), CR (0x0D), or space through
/// tilde (0x20-0x7E). Empty input is text.
///
/// This is a heuristic, not a guarantee: content past the first 1024 bytes
/// never influences the verdict, so a file that only turns binary later is
/// classified as text. Multibyte UTF-8 text (bytes >= 0x80) trips the
/// classifier.
#[must_use]
pub fn is_binary(head: &[u8]) -> bool {
    let check_len = head.len().min(CLASSIFY_HEAD_BYTES);
    head[..check_len].iter().any(|&b| !is_text_byte(b))
}

fn is_text_byte(b: u8) -> bool {
    matches!(b, 0x09 | 0x0A | 0x0D | 0x20..=0x7E)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_is_text() {
        assert!(!is_binary(b"hello world\r\n\tdone"));
    }

    #[test]
    fn empty_input_is_text() {
        assert!(!is_binary(b""));
    }

    #[test]
    fn nul_byte_is_binary() {
        assert!(is_binary(b"hello\x00world"));
    }

    #[test]
    fn control_byte_is_binary() {
        assert!(is_binary(b"bell\x07"));
        assert!(is_binary(b"\x1b[31mred"));
    }

    #[test]
    fn multibyte_utf8_is_binary() {
        // Bytes >= 0x80 are outside the printable-ASCII set.
        assert!(is_binary("héllo".as_bytes()));
    }

    #[test]
    fn boundary_bytes_are_text() {
        assert!(!is_binary(&[0x20, 0x7E, 0x09, 0x0A, 0x0D]));
        assert!(is_binary(&[0x1F]));
        assert!(is_binary(&[0x7F]));
    }

    #[test]
    fn bytes_past_head_are_ignored() {
        let mut buf = vec![b'a'; CLASSIFY_HEAD_BYTES];
        buf.push(0x00);
        assert!(!is_binary(&buf));

        let mut buf = vec![b'a'; CLASSIFY_HEAD_BYTES - 1];
        buf.push(0x00);
        assert!(is_binary(&buf));
    }
}

//! ANSI escape sequence stripping.
//!
//! Version commands frequently colorize their output when they think they
//! are attached to a terminal. Stored versions must be plain text so that
//! two probes of the same tool compare equal.

use regex::bytes::Regex as BytesRegex;
use regex::Regex;
use std::sync::LazyLock;

/// A control sequence: ESC `[` or the C1 CSI byte, then parameter bytes
/// (0x30-0x3F), intermediate bytes (0x20-0x2F), and one final byte (0x40-0x7E).
static CSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\x1b\[|\x{9b})[\x30-\x3f]*[\x20-\x2f]*[\x40-\x7e]").unwrap()
});

/// The same grammar over raw bytes, where the C1 introducer is the single
/// byte 0x9B rather than the UTF-8 encoding of U+009B.
static CSI_BYTES_REGEX: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(r"(?-u:\x1b\[|\x9b)[\x30-\x3f]*[\x20-\x2f]*[\x40-\x7e]").unwrap()
});

/// Remove every CSI escape sequence from `text`.
pub fn strip_ansi(text: &str) -> String {
    CSI_REGEX.replace_all(text, "").into_owned()
}

/// Remove every CSI escape sequence from raw process output and decode it.
///
/// Valid UTF-8 goes through [`strip_ansi`], so a 0x9B continuation byte
/// inside a multi-byte character is never taken for an introducer. Only
/// output that is not UTF-8 is stripped byte-wise before lossy decoding.
pub fn strip_ansi_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => strip_ansi(text),
        Err(_) => {
            let stripped = CSI_BYTES_REGEX.replace_all(bytes, &b""[..]);
            String::from_utf8_lossy(&stripped).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_color_codes() {
        assert_eq!(strip_ansi("\u{1b}[31mhello\u{1b}[0m"), "hello");
    }

    #[test]
    fn strips_multi_parameter_sequences() {
        assert_eq!(strip_ansi("\u{1b}[1;32mv20.11.0\u{1b}[m"), "v20.11.0");
    }

    #[test]
    fn strips_c1_introducer() {
        assert_eq!(strip_ansi("\u{9b}4mnpm\u{9b}0m 10.2.4"), "npm 10.2.4");
    }

    #[test]
    fn strips_cursor_and_erase_sequences() {
        assert_eq!(strip_ansi("\u{1b}[2K\u{1b}[1Gyarn 1.22.19"), "yarn 1.22.19");
    }

    #[test]
    fn strips_private_mode_sequences() {
        assert_eq!(strip_ansi("\u{1b}[?25lbun 1.0.0\u{1b}[?25h"), "bun 1.0.0");
    }

    #[test]
    fn leaves_plain_text_untouched() {
        let text = "git version 2.34.1 [linux]";
        assert_eq!(strip_ansi(text), text);
    }

    #[test]
    fn leaves_bare_escape_without_bracket() {
        assert_eq!(strip_ansi("a\u{1b}b"), "a\u{1b}b");
    }

    #[test]
    fn only_escapes_becomes_empty() {
        assert_eq!(strip_ansi("\u{1b}[0m\u{1b}[K"), "");
    }

    #[test]
    fn strips_raw_c1_byte() {
        assert_eq!(strip_ansi_bytes(b"\x9b31mhello\x9b0m\n"), "hello\n");
    }

    #[test]
    fn strips_escape_sequences_in_raw_bytes() {
        assert_eq!(strip_ansi_bytes(b"\x1b[32mv1.2.3\x1b[0m"), "v1.2.3");
    }

    #[test]
    fn raw_bytes_keep_multibyte_characters() {
        // U+011B encodes as C4 9B; the 9B must not start a sequence.
        assert_eq!(strip_ansi_bytes("v\u{11b}a 1.0".as_bytes()), "v\u{11b}a 1.0");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        assert_eq!(strip_ansi_bytes(b"\x9b1mtool\xff 2"), "tool\u{fffd} 2");
    }
}

//! OSC 52 clipboard backend
//!
//! Writes an escape sequence that asks the terminal emulator itself to set
//! the clipboard. Works over SSH where the OS clipboard is unreachable.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);

    io::stdout()
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;

    io::stdout().flush().map_err(|_| ClipboardError::WriteError)
}

pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    #[test]
    fn test_encode_wraps_base64_payload() {
        let sequence = encode_osc52("# Plan");

        assert!(sequence.starts_with("\x1b]52;c;"));
        assert!(sequence.ends_with('\x07'));

        let payload = &sequence["\x1b]52;c;".len()..sequence.len() - 1];
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, b"# Plan");
    }

    #[test]
    fn test_encode_empty_text() {
        let sequence = encode_osc52("");
        assert_eq!(sequence, "\x1b]52;c;\x07");
    }

    #[test]
    fn test_encode_unicode_roundtrip() {
        let text = "計画 🚀";
        let sequence = encode_osc52(text);
        let payload = &sequence["\x1b]52;c;".len()..sequence.len() - 1];
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), text);
    }
}

//! Clipboard backend selection

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug)]
pub enum ClipboardError {
    /// System clipboard is not available
    SystemUnavailable,
    /// Error writing to clipboard
    WriteError,
}

/// Copy text to clipboard using the configured backend
///
/// `Auto` tries the system clipboard first and falls back to OSC 52 when
/// it is unavailable.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_backend_always_succeeds() {
        // OSC 52 writes an escape sequence to stdout
        let result = copy_to_clipboard("a marketing plan", ClipboardBackend::Osc52);
        assert!(result.is_ok());
    }

    #[test]
    fn test_system_backend_returns_result() {
        // The system clipboard may be unavailable in headless environments
        let result = copy_to_clipboard("a marketing plan", ClipboardBackend::System);
        assert!(result.is_ok() || matches!(result, Err(ClipboardError::SystemUnavailable)));
    }

    #[test]
    fn test_auto_backend_falls_back() {
        // Auto always succeeds because OSC 52 is the fallback
        let result = copy_to_clipboard("a marketing plan", ClipboardBackend::Auto);
        assert!(result.is_ok());
    }

    #[test]
    fn test_copy_markdown_content() {
        let plan = "# Executive Summary\n\n- **bold** point\n";
        let result = copy_to_clipboard(plan, ClipboardBackend::Osc52);
        assert!(result.is_ok());
    }
}

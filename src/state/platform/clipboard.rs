//! Clipboard access for copying contract addresses.
//!
//! On Linux the external tools (`wl-copy`, `xclip`, `xsel`) are tried first
//! because their selection outlives the process; `arboard` is the fallback
//! and the only path on macOS and Windows.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard tool or display server is reachable.
    #[error("Clipboard not available")]
    NotAvailable,
    /// The clipboard rejected the text.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error if no clipboard is reachable or the copy fails.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "linux")]
    if copy_with_external_tool(text) {
        return Ok(());
    }

    let mut clipboard = arboard::Clipboard::new().map_err(|e| {
        tracing::debug!("arboard unavailable: {e}");
        ClipboardError::NotAvailable
    })?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}

#[cfg(target_os = "linux")]
fn copy_with_external_tool(text: &str) -> bool {
    const TOOLS: [(&str, &[&str]); 3] = [
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];

    TOOLS.iter().any(|(tool, args)| try_tool(tool, args, text))
}

#[cfg(target_os = "linux")]
fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let Ok(mut child) = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    let Some(mut stdin) = child.stdin.take() else {
        return false;
    };
    if stdin.write_all(text.as_bytes()).is_err() {
        return false;
    }
    drop(stdin);

    child.wait().map(|s| s.success()).unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::NotAvailable.to_string(),
            "Clipboard not available"
        );
        assert_eq!(
            ClipboardError::CopyFailed("test".to_string()).to_string(),
            "Failed to copy: test"
        );
    }

    // Actual clipboard availability depends on the display server.
    #[test]
    fn test_copy_text_does_not_panic() {
        let _ = copy_text("0x1c7d4b196cb0c7b01d743fbc6116a902379c7238");
    }
}

//! Device capabilities the screens reach for: share sheet, clipboard and dialer.

use std::io::Write;
use std::process::{Command, Stdio};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

/// Content handed to the share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("Sharing is not available on this device")]
    ShareUnavailable,

    #[error("Share was cancelled")]
    ShareCancelled,

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Not a dialable number: '{0}'")]
    InvalidNumber(String),

    #[error("Could not start dialer: {0}")]
    Dial(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait Platform {
    /// Open the native share sheet
    fn share(&mut self, payload: &SharePayload) -> Result<(), PlatformError>;

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), PlatformError>;

    /// Hand a phone number to the system dialer
    fn dial(&mut self, number: &str) -> Result<(), PlatformError>;
}

/// Build a `tel:` URI. Whitespace is dropped; letters are allowed for vanity numbers.
pub fn tel_uri(number: &str) -> Result<Url, PlatformError> {
    let cleaned: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    let dialable = !cleaned.is_empty()
        && cleaned.chars().any(|c| c.is_ascii_alphanumeric())
        && cleaned
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-');
    if !dialable {
        return Err(PlatformError::InvalidNumber(number.to_string()));
    }

    Url::parse(&format!("tel:{}", cleaned)).map_err(|_| PlatformError::InvalidNumber(number.to_string()))
}

/// OSC 52 sequence that asks the terminal to put `text` on the system clipboard
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Platform backed by the terminal the app runs in
pub struct TerminalPlatform<W: Write> {
    writer: W,
    opener: Option<String>,
}

impl TerminalPlatform<std::io::Stdout> {
    pub fn new() -> Self {
        Self {
            writer: std::io::stdout(),
            opener: Some(default_opener().to_string()),
        }
    }
}

impl Default for TerminalPlatform<std::io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalPlatform<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            opener: Some(default_opener().to_string()),
        }
    }

    /// Validate numbers but never launch an external program
    pub fn without_opener(mut self) -> Self {
        self.opener = None;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> Platform for TerminalPlatform<W> {
    fn share(&mut self, payload: &SharePayload) -> Result<(), PlatformError> {
        debug!("Share requested for '{}', no share sheet in a terminal", payload.title);
        Err(PlatformError::ShareUnavailable)
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), PlatformError> {
        self.writer
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }

    fn dial(&mut self, number: &str) -> Result<(), PlatformError> {
        let uri = tel_uri(number)?;
        let Some(opener) = &self.opener else {
            info!("Dial {} (no opener configured)", uri);
            return Ok(());
        };

        Command::new(opener)
            .arg(uri.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PlatformError::Dial(e.to_string()))?;
        info!("Dialing {}", uri);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_tel_uri() {
        assert_eq!(tel_uri("108").unwrap().as_str(), "tel:108");
        assert_eq!(tel_uri("+91 98765 43210").unwrap().as_str(), "tel:+919876543210");
        assert_eq!(tel_uri("1800-AROGYA").unwrap().as_str(), "tel:1800-AROGYA");
        assert_matches!(tel_uri(""), Err(PlatformError::InvalidNumber(_)));
        assert_matches!(tel_uri("   "), Err(PlatformError::InvalidNumber(_)));
        assert_matches!(tel_uri("#"), Err(PlatformError::InvalidNumber(_)));
        assert_matches!(tel_uri("1; rm -rf"), Err(PlatformError::InvalidNumber(_)));
    }

    #[test]
    fn test_clipboard_writes_osc52() {
        let mut platform = TerminalPlatform::with_writer(Vec::new()).without_opener();
        platform.copy_to_clipboard("hi").unwrap();

        // "hi" base64 is "aGk="
        assert_eq!(platform.writer().as_slice(), b"\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_share_is_unavailable_in_terminal() {
        let mut platform = TerminalPlatform::with_writer(Vec::new()).without_opener();
        let result = platform.share(&SharePayload::new("Title", "Body"));
        assert_eq!(result, Err(PlatformError::ShareUnavailable));
    }

    #[test]
    fn test_dial_without_opener_still_validates() {
        let mut platform = TerminalPlatform::with_writer(Vec::new()).without_opener();
        assert!(platform.dial("108").is_ok());
        assert_matches!(platform.dial("abc def!"), Err(PlatformError::InvalidNumber(_)));
    }
}

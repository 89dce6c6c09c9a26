//! Caller-facing response text

use crate::{error::ScreenshotError, model::CaptureResult};

/// Prefix of every successful response
pub const SUCCESS_PREFIX: &str = "Screenshot saved successfully to: ";
/// Prefix of every failed response
pub const FAILURE_PREFIX: &str = "Failed to take screenshot: ";

/// Success text for an image saved at `display_path`
pub fn success_message(display_path: &str) -> String {
    format!("{SUCCESS_PREFIX}{display_path}")
}

/// Failure text carrying the error's display message
pub fn failure_message(error: &ScreenshotError) -> String {
    format!("{FAILURE_PREFIX}{error}")
}

/// Error text with its remediation hint, for callers outside the MCP tool
pub fn describe_failure(error: &ScreenshotError) -> String {
    format!("{} ({})", error, error.remediation_hint())
}

impl CaptureResult {
    /// A successful capture shown at `display_path`
    pub fn saved(display_path: &str) -> Self {
        Self {
            succeeded: true,
            message:   success_message(display_path),
        }
    }

    /// A failed capture
    pub fn failed(error: &ScreenshotError) -> Self {
        Self {
            succeeded: false,
            message:   failure_message(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_success_message() {
        assert_eq!(
            success_message("screenshots/test.png"),
            "Screenshot saved successfully to: screenshots/test.png"
        );
    }

    #[test]
    fn test_failure_message_uses_error_text() {
        let error = ScreenshotError::OutputMissing {
            path: PathBuf::from("/tmp/x.png"),
        };
        assert_eq!(
            failure_message(&error),
            "Failed to take screenshot: Screenshot file was not created at /tmp/x.png"
        );
    }

    #[test]
    fn test_describe_failure_appends_hint() {
        let error = ScreenshotError::OutputMissing {
            path: PathBuf::from("/tmp/x.png"),
        };
        let text = describe_failure(&error);
        assert!(text.starts_with("Screenshot file was not created at /tmp/x.png ("));
        assert!(text.ends_with(&format!("({})", error.remediation_hint())));
    }

    #[test]
    fn test_capture_result_constructors() {
        let saved = CaptureResult::saved(r"C:\shots\a.png");
        assert!(saved.succeeded);
        assert!(saved.message.ends_with(r"C:\shots\a.png"));

        let failed = CaptureResult::failed(&ScreenshotError::ScriptFailed {
            message: "Monitor 3 not found. Valid range: 1 to 2".to_string(),
            windows: None,
        });
        assert!(!failed.succeeded);
        assert!(failed.message.starts_with(FAILURE_PREFIX));
        assert!(failed.message.contains("1 to 2"));
    }
}

//! Error types for screenshot capture requests
//!
//! Every failure a single `take_screenshot` request can hit is one variant of
//! [`ScreenshotError`]. Errors never escape the request boundary: the MCP layer
//! turns each of them into an error-flagged text response, so the display
//! text of each variant is written for the caller to read.
//!
//! Each variant also carries an actionable remediation hint through
//! [`ScreenshotError::remediation_hint`].

use std::path::PathBuf;

/// Result type alias for screenshot operations
pub type ScreenshotResult<T> = Result<T, ScreenshotError>;

/// Failure taxonomy for a screenshot request
#[derive(Debug, thiserror::Error)]
pub enum ScreenshotError {
    /// A request parameter was rejected before any work started
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: String,
        /// Reason why it's invalid
        reason: String,
    },

    /// The destination directory could not be created
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The external script executor could not be started
    #[error("Failed to launch {program}: {source}")]
    LaunchFailed {
        /// Program that failed to launch
        program: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The capture script reported a real failure on its error stream
    #[error("{}", render_script_failure(.message, .windows.as_deref()))]
    ScriptFailed {
        /// Trimmed text of the diagnostic stream
        message: String,
        /// Enumerated window list, present when no window matched
        windows: Option<String>,
    },

    /// The script appeared to succeed but the image is missing on disk
    #[error("Screenshot file was not created at {}", .path.display())]
    OutputMissing {
        /// Host path that was checked
        path: PathBuf,
    },

    /// Window listing output could not be parsed
    #[error("Failed to parse window list: {0}")]
    WindowListParse(#[from] serde_json::Error),
}

fn render_script_failure(message: &str, windows: Option<&str>) -> String {
    match windows {
        Some(list) => format!("{message}\n\n{list}"),
        None => message.to_string(),
    }
}

impl ScreenshotError {
    /// Returns an actionable remediation hint for this error
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use wsl_screenshot_core::error::ScreenshotError;
    ///
    /// let error = ScreenshotError::OutputMissing {
    ///     path: PathBuf::from("/tmp/screenshots/shot.png"),
    /// };
    /// assert!(error.remediation_hint().contains("Windows"));
    /// ```
    pub fn remediation_hint(&self) -> &str {
        match self {
            ScreenshotError::InvalidParameter { parameter, .. } => match parameter.as_str() {
                "filename" => {
                    "Pass a plain file name such as 'screenshot.png'. Use the folder parameter \
                     to choose the directory."
                }
                _ => "Check the parameter value against the tool description.",
            },
            ScreenshotError::DirectoryCreation { .. } => {
                "Check that the destination folder is writable and that the drive is mounted \
                 inside WSL."
            }
            ScreenshotError::LaunchFailed { .. } => {
                "Ensure WSL interop is enabled and powershell.exe is reachable on PATH, or set \
                 WSL_SCREENSHOT_POWERSHELL to its full path."
            }
            ScreenshotError::ScriptFailed { windows, .. } => {
                if windows.is_some() {
                    "No window matched. Pick a title or process name from the listed windows."
                } else {
                    "PowerShell reported an error. Check the monitor number and that the target \
                     window is still open."
                }
            }
            ScreenshotError::OutputMissing { .. } => {
                "PowerShell finished without writing the image. Check that Windows can write \
                 to the destination path; folders outside /mnt/<drive> need a known WSL distro \
                 name."
            }
            ScreenshotError::WindowListParse(_) => {
                "The window listing script returned unexpected output. Run the list-windows \
                 command with RUST_LOG=debug to inspect it."
            }
        }
    }
}

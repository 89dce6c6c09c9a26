//! Data models for screenshot capture requests
//!
//! This module defines the values that flow through a single request:
//! - [`CaptureRequest`]: the parameter bag delivered by the MCP layer
//! - [`MonitorSelector`]: the normalized monitor parameter
//! - [`ResolvedDestination`]: the output path in both filesystem dialects
//! - [`ExecutionOutcome`]: what the external PowerShell process returned
//! - [`CaptureResult`]: the terminal success/failure value
//!
//! All of them are created fresh per request and dropped once the response
//! text is produced.

use std::{fmt, path::PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default output file name when the caller does not provide one
pub const DEFAULT_FILENAME: &str = "screenshot.png";

/// Raw monitor parameter as it arrives over the wire
///
/// Callers may send either a number (`2`, `2.0`) or a string (`"2"`,
/// `"primary"`, `"all"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MonitorParam {
    /// Numeric monitor index (1-based, left to right)
    Index(i64),
    /// Non-integer JSON number; whole values such as `2.0` still select a monitor
    Fractional(f64),
    /// `"all"`, `"primary"`, or a numeric string
    Name(String),
}

impl Default for MonitorParam {
    fn default() -> Self {
        MonitorParam::Name("all".to_string())
    }
}

/// Normalized monitor selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorSelector {
    /// The whole virtual desktop
    All,
    /// The OS-designated primary monitor
    Primary,
    /// The Nth monitor counting from the left, starting at 1
    Index(u32),
    /// Anything else; rejected by the capture script at run time
    Unrecognized(String),
}

impl MonitorSelector {
    /// Parses a monitor selector string
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. An
    /// empty string means "all".
    ///
    /// # Examples
    ///
    /// ```
    /// use wsl_screenshot_core::model::MonitorSelector;
    ///
    /// assert_eq!(MonitorSelector::parse("all"), MonitorSelector::All);
    /// assert_eq!(MonitorSelector::parse("Primary"), MonitorSelector::Primary);
    /// assert_eq!(MonitorSelector::parse("2"), MonitorSelector::Index(2));
    /// assert_eq!(
    ///     MonitorSelector::parse("left"),
    ///     MonitorSelector::Unrecognized("left".to_string())
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return MonitorSelector::All;
        }
        if trimmed.eq_ignore_ascii_case("primary") {
            return MonitorSelector::Primary;
        }
        match trimmed.parse::<u32>() {
            Ok(index) if index > 0 => MonitorSelector::Index(index),
            _ => MonitorSelector::Unrecognized(trimmed.to_string()),
        }
    }

    /// Returns the value embedded into the capture script
    pub fn script_value(&self) -> String {
        match self {
            MonitorSelector::All => "all".to_string(),
            MonitorSelector::Primary => "primary".to_string(),
            MonitorSelector::Index(index) => index.to_string(),
            MonitorSelector::Unrecognized(raw) => raw.clone(),
        }
    }
}

impl From<&MonitorParam> for MonitorSelector {
    fn from(param: &MonitorParam) -> Self {
        match param {
            MonitorParam::Index(index) => match u32::try_from(*index) {
                Ok(index) if index > 0 => MonitorSelector::Index(index),
                _ => MonitorSelector::Unrecognized(index.to_string()),
            },
            MonitorParam::Fractional(value) => {
                if value.fract() == 0.0 && *value >= 1.0 && *value <= f64::from(u32::MAX) {
                    MonitorSelector::Index(*value as u32)
                } else {
                    MonitorSelector::Unrecognized(value.to_string())
                }
            }
            MonitorParam::Name(name) => MonitorSelector::parse(name),
        }
    }
}

impl fmt::Display for MonitorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.script_value())
    }
}

/// Parameter bag for one screenshot request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    /// Output file name
    pub filename: String,
    /// Monitor selection (ignored when a window is targeted)
    pub monitor: MonitorSelector,
    /// Case-insensitive substring of the window title
    pub window_title: Option<String>,
    /// Case-insensitive substring of the owning process name
    pub process_name: Option<String>,
    /// Destination folder in WSL, Windows, or relative path syntax
    pub destination_folder: Option<String>,
}

impl Default for CaptureRequest {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            monitor: MonitorSelector::All,
            window_title: None,
            process_name: None,
            destination_folder: None,
        }
    }
}

impl CaptureRequest {
    /// Request for a window whose title contains `title`
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            window_title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Request for a window owned by a process whose name contains `name`
    pub fn by_process(name: impl Into<String>) -> Self {
        Self {
            process_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Request for a single monitor
    pub fn by_monitor(monitor: MonitorSelector) -> Self {
        Self {
            monitor,
            ..Default::default()
        }
    }

    /// Sets the output file name
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Sets the destination folder
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.destination_folder = Some(folder.into());
        self
    }
}

/// Output location in both filesystem dialects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    /// Path on the WSL side, checked for existence after capture
    pub host_path: PathBuf,
    /// Path handed to PowerShell
    pub foreign_path: String,
    /// Path shown to the caller, in the dialect they used
    pub display_path: String,
}

/// Raw result of running the external capture script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    /// Process exited with a non-zero status or was killed
    pub exited_abnormally: bool,
    /// Informational stream
    pub stdout: String,
    /// Diagnostic stream
    pub stderr: String,
}

impl ExecutionOutcome {
    /// Outcome of a clean run that printed `stdout`
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exited_abnormally: false,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Outcome of a run that failed with `stderr`
    pub fn failure(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exited_abnormally: true,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Terminal value of a screenshot request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResult {
    /// Whether the image was written
    pub succeeded: bool,
    /// Human-readable response text
    pub message: String,
}

/// A visible top-level window as reported by the listing script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct WindowInfo {
    /// Window title
    pub title: String,
    /// Owning process name, without the `.exe` suffix
    pub process_name: String,
}

impl fmt::Display for WindowInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.process_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_param_deserializes_number_and_string() {
        let number: MonitorParam = serde_json::from_str("2").unwrap();
        assert_eq!(number, MonitorParam::Index(2));

        let text: MonitorParam = serde_json::from_str(r#""primary""#).unwrap();
        assert_eq!(text, MonitorParam::Name("primary".to_string()));
    }

    #[test]
    fn test_monitor_param_accepts_fractional_numbers() {
        let whole: MonitorParam = serde_json::from_str("2.0").unwrap();
        assert_eq!(whole, MonitorParam::Fractional(2.0));
        assert_eq!(MonitorSelector::from(&whole), MonitorSelector::Index(2));

        let fractional: MonitorParam = serde_json::from_str("1.5").unwrap();
        assert_eq!(
            MonitorSelector::from(&fractional),
            MonitorSelector::Unrecognized("1.5".to_string())
        );
        assert_eq!(
            MonitorSelector::from(&MonitorParam::Fractional(0.0)),
            MonitorSelector::Unrecognized("0".to_string())
        );
    }

    #[test]
    fn test_monitor_param_default_is_all() {
        assert_eq!(MonitorSelector::from(&MonitorParam::default()), MonitorSelector::All);
    }

    #[test]
    fn test_monitor_selector_from_numeric_param() {
        assert_eq!(MonitorSelector::from(&MonitorParam::Index(3)), MonitorSelector::Index(3));
        assert_eq!(
            MonitorSelector::from(&MonitorParam::Index(0)),
            MonitorSelector::Unrecognized("0".to_string())
        );
        assert_eq!(
            MonitorSelector::from(&MonitorParam::Index(-1)),
            MonitorSelector::Unrecognized("-1".to_string())
        );
    }

    #[test]
    fn test_monitor_selector_parse_is_case_insensitive() {
        assert_eq!(MonitorSelector::parse("ALL"), MonitorSelector::All);
        assert_eq!(MonitorSelector::parse(" primary "), MonitorSelector::Primary);
        assert_eq!(MonitorSelector::parse(""), MonitorSelector::All);
    }

    #[test]
    fn test_monitor_selector_rejects_zero_and_garbage() {
        assert_eq!(MonitorSelector::parse("0"), MonitorSelector::Unrecognized("0".to_string()));
        assert_eq!(
            MonitorSelector::parse("second"),
            MonitorSelector::Unrecognized("second".to_string())
        );
    }

    #[test]
    fn test_monitor_selector_script_value() {
        assert_eq!(MonitorSelector::Index(2).script_value(), "2");
        assert_eq!(MonitorSelector::Primary.to_string(), "primary");
    }

    #[test]
    fn test_capture_request_defaults() {
        let request = CaptureRequest::default();
        assert_eq!(request.filename, "screenshot.png");
        assert_eq!(request.monitor, MonitorSelector::All);
        assert!(request.window_title.is_none());
        assert!(request.process_name.is_none());
        assert!(request.destination_folder.is_none());
    }

    #[test]
    fn test_capture_request_builders() {
        let request = CaptureRequest::by_title("Chrome").with_filename("a.png").with_folder("out");
        assert_eq!(request.window_title.as_deref(), Some("Chrome"));
        assert_eq!(request.filename, "a.png");
        assert_eq!(request.destination_folder.as_deref(), Some("out"));
    }

    #[test]
    fn test_window_info_deserializes_powershell_json() {
        let json = r#"{"Title":"Untitled - Notepad","ProcessName":"notepad"}"#;
        let window: WindowInfo = serde_json::from_str(json).unwrap();
        assert_eq!(window.title, "Untitled - Notepad");
        assert_eq!(window.process_name, "notepad");
        assert_eq!(window.to_string(), "Untitled - Notepad (notepad)");
    }
}

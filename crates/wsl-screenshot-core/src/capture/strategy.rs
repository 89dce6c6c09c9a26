//! Capture strategy selection
//!
//! Exactly one strategy applies to a request. Precedence is fixed: a window
//! title beats a process name, and either beats the monitor parameter.

use std::fmt;

use crate::model::{CaptureRequest, MonitorSelector};

/// What the capture script should photograph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureStrategy {
    /// First window whose title contains the term (case-insensitive)
    WindowByTitle(String),
    /// First window whose process name contains the term (case-insensitive)
    WindowByProcess(String),
    /// A single monitor; never [`MonitorSelector::All`]
    Monitor(MonitorSelector),
    /// The whole virtual desktop
    AllMonitors,
}

impl CaptureStrategy {
    /// Picks the strategy for a request
    ///
    /// # Examples
    ///
    /// ```
    /// use wsl_screenshot_core::{capture::CaptureStrategy, model::CaptureRequest};
    ///
    /// let mut request = CaptureRequest::by_title("Chrome");
    /// request.process_name = Some("notepad".to_string());
    ///
    /// assert_eq!(
    ///     CaptureStrategy::select(&request),
    ///     CaptureStrategy::WindowByTitle("Chrome".to_string())
    /// );
    /// ```
    pub fn select(request: &CaptureRequest) -> Self {
        select_strategy(
            request.window_title.as_deref(),
            request.process_name.as_deref(),
            &request.monitor,
        )
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            CaptureStrategy::WindowByTitle(_) => "window_by_title",
            CaptureStrategy::WindowByProcess(_) => "window_by_process",
            CaptureStrategy::Monitor(_) => "monitor",
            CaptureStrategy::AllMonitors => "all_monitors",
        }
    }
}

impl fmt::Display for CaptureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureStrategy::WindowByTitle(title) => write!(f, "window with title '{}'", title),
            CaptureStrategy::WindowByProcess(name) => write!(f, "window of process '{}'", name),
            CaptureStrategy::Monitor(selector) => write!(f, "monitor {}", selector),
            CaptureStrategy::AllMonitors => write!(f, "all monitors"),
        }
    }
}

/// Pure strategy selection over the raw parameters
pub fn select_strategy(
    window_title: Option<&str>,
    process_name: Option<&str>,
    monitor: &MonitorSelector,
) -> CaptureStrategy {
    if let Some(title) = window_title.filter(|t| !t.is_empty()) {
        return CaptureStrategy::WindowByTitle(title.to_string());
    }

    if let Some(name) = process_name.filter(|n| !n.is_empty()) {
        return CaptureStrategy::WindowByProcess(strip_exe_suffix(name).to_string());
    }

    match monitor {
        MonitorSelector::All => CaptureStrategy::AllMonitors,
        other => CaptureStrategy::Monitor(other.clone()),
    }
}

/// Drops a trailing `.exe` in any letter case
///
/// Process names reported by Windows never carry the suffix, so `notepad.exe`
/// and `notepad` must search for the same term.
pub fn strip_exe_suffix(name: &str) -> &str {
    let len = name.len();
    if len > 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".exe") {
        &name[..len - 4]
    } else {
        name
    }
}

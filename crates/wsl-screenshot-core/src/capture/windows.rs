//! Parsing of the window listing script's JSON output

use serde::Deserialize;

use crate::{error::ScreenshotResult, model::WindowInfo};

/// `ConvertTo-Json` emits a bare object instead of an array in some hosts
#[derive(Deserialize)]
#[serde(untagged)]
enum WindowListing {
    Many(Vec<WindowInfo>),
    One(WindowInfo),
}

/// Parses the JSON printed by the listing script
///
/// Empty output means no visible windows. Lines before the JSON payload are
/// ignored, since PowerShell hosts sometimes print banners ahead of it.
///
/// # Examples
///
/// ```
/// use wsl_screenshot_core::capture::parse_window_list;
///
/// let windows = parse_window_list(r#"[{"Title":"Untitled - Notepad","ProcessName":"notepad"}]"#).unwrap();
/// assert_eq!(windows[0].process_name, "notepad");
/// ```
pub fn parse_window_list(stdout: &str) -> ScreenshotResult<Vec<WindowInfo>> {
    let payload = stdout
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with('[') || line.starts_with('{'))
        .unwrap_or("");

    if payload.is_empty() {
        return Ok(Vec::new());
    }

    let listing: WindowListing = serde_json::from_str(payload)?;
    Ok(match listing {
        WindowListing::Many(windows) => windows,
        WindowListing::One(window) => vec![window],
    })
}

//! MCP service implementation with tool routing
//!
//! Exposes a single `take_screenshot` tool. All capture logic lives in
//! [`wsl_screenshot_core::capture::ScreenshotService`]; this layer only maps
//! tool parameters to a [`CaptureRequest`] and the result to tool content.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ErrorData as McpError, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wsl_screenshot_core::{
    capture::ScreenshotService,
    model::{CaptureRequest, DEFAULT_FILENAME, MonitorParam, MonitorSelector},
};

const INSTRUCTIONS: &str = "Takes screenshots of the Windows desktop from inside WSL. \
    Target a window with windowTitle or processName, or a monitor with monitor \
    ('all', 'primary', or a number counted left to right). Images are saved as PNG \
    under ./screenshots unless folder is given.";

/// Parameters for the take_screenshot tool
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TakeScreenshotParams {
    /// Output file name (default: screenshot.png)
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Monitor to capture: "all" (default), "primary", or a 1-based number
    /// counted from the leftmost monitor. Ignored when a window is targeted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorParam>,

    /// Capture the first window whose title contains this text
    /// (case-insensitive). Takes precedence over processName.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_title: Option<String>,

    /// Capture the first window whose process name contains this text
    /// (case-insensitive, ".exe" optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,

    /// Destination folder: a Windows path (C:\shots), a WSL path
    /// (/mnt/c/shots, ~/project/shots) or a path relative to the server's
    /// working directory. Default: ./screenshots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

impl Default for TakeScreenshotParams {
    fn default() -> Self {
        Self {
            filename:     default_filename(),
            monitor:      None,
            window_title: None,
            process_name: None,
            folder:       None,
        }
    }
}

impl From<TakeScreenshotParams> for CaptureRequest {
    fn from(params: TakeScreenshotParams) -> Self {
        Self {
            filename:           params.filename,
            monitor:            params
                .monitor
                .as_ref()
                .map(MonitorSelector::from)
                .unwrap_or(MonitorSelector::All),
            window_title:       params.window_title,
            process_name:       params.process_name,
            destination_folder: params.folder,
        }
    }
}

/// MCP server for Windows screenshots from WSL
#[derive(Clone)]
pub struct WslScreenshotMcpServer {
    /// Tool router for dispatching tool calls
    /// Note: This field is used by the #[tool_router] macro
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
    /// Capture pipeline shared by all requests
    service:     Arc<ScreenshotService>,
}

#[tool_router]
impl WslScreenshotMcpServer {
    /// Creates a server over a configured capture service
    pub fn new(service: Arc<ScreenshotService>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            service,
        }
    }

    /// Takes a screenshot and saves it as PNG
    ///
    /// Capture failures are reported as error-flagged tool results, never as
    /// protocol errors, so the host always gets a readable message.
    ///
    /// # Example Request
    ///
    /// ```json
    /// {
    ///   "jsonrpc": "2.0",
    ///   "id": 1,
    ///   "method": "tools/call",
    ///   "params": {
    ///     "name": "take_screenshot",
    ///     "arguments": { "filename": "code.png", "windowTitle": "Visual Studio Code" }
    ///   }
    /// }
    /// ```
    #[tool(
        description = "Take a screenshot of the Windows desktop, a single monitor, or a window \
                       (matched by title or process name) and save it as PNG. Returns the saved path."
    )]
    pub async fn take_screenshot(
        &self,
        Parameters(params): Parameters<TakeScreenshotParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = CaptureRequest::from(params);
        let result = self.service.take_screenshot(&request).await;

        let content = vec![Content::text(result.message)];
        Ok(if result.succeeded {
            CallToolResult::success(content)
        } else {
            CallToolResult::error(content)
        })
    }
}

#[tool_handler]
impl ServerHandler for WslScreenshotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

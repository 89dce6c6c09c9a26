//! wsl-screenshot-mcp-server: MCP protocol layer for WSL screenshots
//!
//! Thin protocol layer over `wsl-screenshot-core`. Exposes one tool,
//! `take_screenshot`, over the Model Context Protocol.

pub mod mcp;

pub use mcp::{TakeScreenshotParams, WslScreenshotMcpServer};

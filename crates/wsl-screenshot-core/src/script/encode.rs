//! Transport encoding for `powershell.exe -EncodedCommand`
//!
//! PowerShell expects the script as base64 over its UTF-16LE bytes. The
//! encoding keeps the whole script inside one command-line argument, so no
//! quoting rules of the WSL interop layer or of `CreateProcess` apply to it.

use base64::{Engine, engine::general_purpose::STANDARD};

/// Longest command line `CreateProcess` accepts, in UTF-16 units
pub const MAX_COMMAND_LINE: usize = 32_767;

/// Encodes a script for `-EncodedCommand`
///
/// # Examples
///
/// ```
/// use wsl_screenshot_core::script::encode_script;
///
/// assert_eq!(encode_script("dir"), "ZABpAHIA");
/// ```
pub fn encode_script(script: &str) -> String {
    let bytes: Vec<u8> = script.encode_utf16().flat_map(u16::to_le_bytes).collect();
    STANDARD.encode(bytes)
}

/// Reverses [`encode_script`]
///
/// Returns `None` for input that is not base64 of valid UTF-16LE text.
pub fn decode_script(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded.trim()).ok()?;
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

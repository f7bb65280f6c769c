//! Entry property inspection
//!
//! Reads per-entry presentation metadata that lives outside the tag
//! attribute. Currently that is custom-icon presence, which on macOS is a
//! flag bit in the Finder info attribute. Other platforms have no
//! custom-icon concept, so the probe reports false there.

use std::io;
use std::path::Path;

#[cfg(target_os = "macos")]
const FINDER_INFO_ATTR: &str = "com.apple.FinderInfo";

/// kHasCustomIcon bit of the Finder flags word (bytes 8-9, big endian)
const HAS_CUSTOM_ICON: u16 = 0x0400;

/// Whether the Finder info blob has the custom-icon flag set
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn finder_info_has_custom_icon(info: &[u8]) -> bool {
    if info.len() < 10 {
        return false;
    }
    let flags = u16::from_be_bytes([info[8], info[9]]);
    flags & HAS_CUSTOM_ICON != 0
}

/// Check whether an entry carries a custom icon
///
/// # Errors
///
/// Returns the underlying `io::Error` if the attribute read fails.
#[cfg(target_os = "macos")]
pub fn has_custom_icon(path: &Path) -> io::Result<bool> {
    match xattr::get(path, FINDER_INFO_ATTR)? {
        Some(info) => Ok(finder_info_has_custom_icon(&info)),
        None => Ok(false),
    }
}

/// Check whether an entry carries a custom icon
///
/// # Errors
///
/// Never fails on platforms without a custom-icon concept.
#[cfg(not(target_os = "macos"))]
pub fn has_custom_icon(path: &Path) -> io::Result<bool> {
    let _ = path;
    Ok(false)
}

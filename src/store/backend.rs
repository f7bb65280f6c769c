//! Metadata backend contract and the unified implementation
//!
//! All tag persistence goes through the [`MetadataBackend`] trait: read
//! the full tag list of one path, or replace it. The store never talks
//! to the attribute API directly, so the two on-disk formats (see
//! [`crate::store::compat`]) stay interchangeable behind this seam.
//!
//! # Backends
//!
//! - **`XattrBackend`**: the current format, a JSON string array stored
//!   under the `user.xtag.tags` attribute.
//! - **`CompatBackend`**: the newline-joined plain-text format written by
//!   pre-0.2 releases, mutated through the legacy batch-operation engine.
//!
//! The backend is chosen once at startup by [`detect`] and injected into
//! the store; version conditionals never appear in the tag logic itself.

use std::io;
use std::path::Path;

use crate::store::compat::{self, CompatBackend};

/// Extended attribute holding an entry's tag list
pub const TAG_ATTR: &str = "user.xtag.tags";

/// Uniform persistence contract for an entry's tag list
///
/// Both implementations must expose the same observable semantics:
/// absent attribute reads as `None`, writes replace the full list, and
/// writing an empty list removes the attribute entirely.
pub trait MetadataBackend: Send + Sync {
    /// Read the stored tag list, `None` if the entry has never been tagged
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the attribute cannot be read.
    fn read_tags(&self, path: &Path) -> io::Result<Option<Vec<String>>>;

    /// Replace the stored tag list
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the attribute cannot be
    /// written. A failed write leaves the previous list in place.
    fn write_tags(&self, path: &Path, tags: &[String]) -> io::Result<()>;
}

/// Backend using the unified attribute format (JSON string array)
pub struct XattrBackend;

impl MetadataBackend for XattrBackend {
    fn read_tags(&self, path: &Path) -> io::Result<Option<Vec<String>>> {
        match xattr::get(path, TAG_ATTR)? {
            None => Ok(None),
            Some(bytes) => {
                if let Ok(tags) = serde_json::from_slice::<Vec<String>>(&bytes) {
                    return Ok(Some(tags));
                }
                // Attribute written by an old release; decode its format
                // so shared volumes stay readable. The next write migrates
                // the entry to the JSON encoding.
                Ok(Some(compat::decode(&bytes)))
            }
        }
    }

    fn write_tags(&self, path: &Path, tags: &[String]) -> io::Result<()> {
        if tags.is_empty() {
            return remove_attr(path);
        }
        let value = serde_json::to_vec(tags)?;
        xattr::set(path, TAG_ATTR, &value)
    }
}

/// Remove the tag attribute, treating "never existed" as success
pub(crate) fn remove_attr(path: &Path) -> io::Result<()> {
    match xattr::remove(path, TAG_ATTR) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Whether the host exposes the extended-attribute API at all
#[must_use]
pub fn supported() -> bool {
    xattr::SUPPORTED_PLATFORM
}

/// Select the metadata backend once at startup
///
/// `legacy_format` pins the wire format written by pre-0.2 releases, for
/// volumes still shared with them; everything else gets the unified
/// JSON encoding.
#[must_use]
pub fn detect(legacy_format: bool) -> Box<dyn MetadataBackend> {
    if legacy_format {
        Box::new(CompatBackend)
    } else {
        Box::new(XattrBackend)
    }
}

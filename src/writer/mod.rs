//! Output persistence.
//!
//! Writes are plain overwrites: the output directory is a pure
//! regeneration target, existing files at the same path are replaced
//! unconditionally, and files from earlier runs that are no longer in the
//! rendered window are left in place.

use std::fs;
use std::path::Path;

use crate::app::Result;

/// Write `contents` to `path` as UTF-8, creating missing parent
/// directories first.
pub fn write_page(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("news").join("index.html");
        write_page(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        write_page(&path, "first").unwrap();
        write_page(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for building the gallery's media list.
//!
//! Scans a single directory (non-recursive) for supported media formats and
//! returns them in alphabetical order. The resulting order is significant:
//! the grid identifies items by their position in this list.

use crate::error::Result;
use crate::media::{self, MediaItem};
use std::path::Path;

/// Scans a directory for supported media files, sorted by file name.
///
/// Unsupported files and subdirectories are skipped silently. Returns an
/// error only if the directory itself cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<MediaItem>> {
    let mut media_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(kind) = media::detect_media_kind(&path) {
                media_files.push((path, kind));
            }
        }
    }

    media_files.sort_by(|(a, _), (b, _)| a.file_name().cmp(&b.file_name()));

    Ok(media_files
        .into_iter()
        .map(|(path, kind)| MediaItem::new(path.to_string_lossy().into_owned(), kind))
        .collect())
}

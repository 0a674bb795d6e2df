// SPDX-License-Identifier: MPL-2.0
//! Media descriptors consumed by the gallery grid.
//!
//! A [`MediaItem`] is a lightweight, display-oriented record: the path-like
//! title it was discovered under and whether it is an image or a video.
//! Decoding and playback are left to the presentation layer and the system
//! handler that opens activated items.

pub mod scanner;

use std::path::Path;

/// Represents different types of media formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image (JPEG, PNG, BMP, etc.)
    Image,
    /// Video (MP4, MKV, WebM, etc.)
    Video,
}

/// A single gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Path-like title; may use either forward or backward separators.
    pub title: String,
    /// Image or video.
    pub kind: MediaKind,
}

impl MediaItem {
    #[must_use]
    pub fn new(title: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }
}

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];
}

/// Detects the media kind from the file extension.
///
/// Returns `None` for unsupported or missing extensions.
pub fn detect_media_kind<P: AsRef<Path>>(path: P) -> Option<MediaKind> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)?;

    if extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Image)
    } else if extensions::VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_image_formats() {
        assert_eq!(detect_media_kind("photo.jpg"), Some(MediaKind::Image));
        assert_eq!(detect_media_kind("photo.PNG"), Some(MediaKind::Image));
        assert_eq!(detect_media_kind("scan.tiff"), Some(MediaKind::Image));
    }

    #[test]
    fn detects_video_formats() {
        assert_eq!(detect_media_kind("clip.mp4"), Some(MediaKind::Video));
        assert_eq!(detect_media_kind("clip.WebM"), Some(MediaKind::Video));
    }

    #[test]
    fn rejects_unsupported_formats() {
        assert_eq!(detect_media_kind("notes.txt"), None);
        assert_eq!(detect_media_kind("no_extension"), None);
    }

    #[test]
    fn extension_lists_do_not_overlap() {
        for ext in extensions::IMAGE_EXTENSIONS {
            assert!(!extensions::VIDEO_EXTENSIONS.contains(ext));
        }
    }
}

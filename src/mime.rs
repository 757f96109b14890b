//! Image MIME type inference from file extensions.
//!
//! Only a closed set of image formats is accepted. The lookup is a static
//! table so the allow-list lives in one place.

use std::path::Path;

use crate::error::Error;

/// Supported image extensions (lower case, no dot) and their MIME types.
pub const SUPPORTED_IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

/// Returns the MIME type for an image path based on its extension.
///
/// The comparison is case-insensitive, so `photo.JPG` resolves to `image/jpeg`.
/// A dot-file named only by its extension (`.png`) still matches.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the extension is missing or not in
/// [`SUPPORTED_IMAGE_TYPES`].
pub fn image_mime_type(path: impl AsRef<Path>) -> Result<&'static str, Error> {
    let file_name = path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let lowered = file_name.to_ascii_lowercase();

    SUPPORTED_IMAGE_TYPES
        .iter()
        .find(|(ext, _)| {
            lowered
                .strip_suffix(*ext)
                .is_some_and(|stem| stem.ends_with('.'))
        })
        .map(|(_, mime)| *mime)
        .ok_or_else(|| Error::UnsupportedFormat {
            extension: extension_of(&file_name).to_string(),
        })
}

/// The extension of a file name including its dot, as written.
///
/// Leading dots belong to the stem, so `.bashrc` has no extension while
/// `photo.` has the bare extension `.`.
fn extension_of(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    file_name[stem_start..]
        .rfind('.')
        .map(|dot| &file_name[stem_start + dot..])
        .unwrap_or("")
}

/// Renders the supported extensions as `.jpg, .jpeg, .png, .gif, .webp`.
pub fn supported_extensions() -> String {
    SUPPORTED_IMAGE_TYPES
        .iter()
        .map(|(ext, _)| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

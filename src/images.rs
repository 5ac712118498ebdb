//! Image reference rewriting.
//!
//! Lesson pages embed screenshots with site-relative `src` attributes. Two
//! rewriting modes exist: absolutization (point the reference at the live
//! site, the default) and localization (download every image next to the
//! Markdown output and point the reference at the local file).
//!
//! Localization is best-effort per image: a failed download or write is
//! reported as a warning and the generated local path is assigned anyway, so
//! a single broken image never aborts a module export.

use std::fs;
use std::path::Path;

use log::warn;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::client::Session;
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::url_utils;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8];
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";

/// Length of generated image file basenames.
const BASENAME_LEN: usize = 12;

/// Image format identified from leading magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    /// Unrecognized content; stored without a file extension.
    Other,
}

impl ImageKind {
    /// Classify a byte buffer by its signature.
    #[must_use]
    pub fn detect(data: &[u8]) -> Self {
        if data.starts_with(PNG_MAGIC) {
            Self::Png
        } else if data.starts_with(JPEG_MAGIC) {
            Self::Jpeg
        } else if data.starts_with(GIF87_MAGIC) || data.starts_with(GIF89_MAGIC) {
            Self::Gif
        } else {
            Self::Other
        }
    }

    /// File extension for this format, dot included. Empty for [`Self::Other`].
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Jpeg => ".jpg",
            Self::Gif => ".gif",
            Self::Other => "",
        }
    }
}

/// Rewrite every `img` src in the document to an absolute URL.
///
/// Relative references are resolved against the service origin; absolute
/// URLs and `data:` URIs stay as they are.
pub fn absolutize_images(doc: &Document) {
    for img in doc.select("img").iter() {
        if let Some(src) = dom::get_attribute(&img, "src") {
            let fixed = url_utils::absolutize(&src);
            if fixed != src {
                dom::set_attribute(&img, "src", &fixed);
            }
        }
    }
}

/// Download every image referenced by `pages` and rewrite the references to
/// local file paths.
///
/// Pages are processed in order, one image at a time; repeated URLs are
/// fetched repeatedly. Per-image failures are logged and the generated path
/// is assigned regardless, so callers must not assume every referenced file
/// exists on disk.
///
/// # Errors
/// [`Error::ImageDir`] if `dir` cannot be created.
pub fn localize_images(session: &Session, pages: &[String], dir: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(dir).map_err(|source| Error::ImageDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut rewritten = Vec::with_capacity(pages.len());

    for page in pages {
        let doc = dom::parse(page);

        for img in doc.select("img").iter() {
            if let Some(src) = dom::get_attribute(&img, "src") {
                let local = download_image(session, &src, dir);
                dom::set_attribute(&img, "src", &local);
            }
        }

        rewritten.push(dom::inner_html(&doc.select("body")).to_string());
    }

    Ok(rewritten)
}

/// Fetch one image and store it under a generated name.
///
/// Always returns the local path the image node should reference; when the
/// fetch or write fails the path is still returned (with no extension for
/// unfetched content) and the failure is only warned about.
fn download_image(session: &Session, url: &str, dir: &Path) -> String {
    let basename = random_basename();

    let bytes = match session.get_bytes(url) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("could not download image {url}: {err}");
            return dir.join(basename).display().to_string();
        }
    };

    let kind = ImageKind::detect(&bytes);
    let path = dir.join(format!("{basename}{}", kind.extension()));

    if let Err(err) = fs::write(&path, &bytes) {
        warn!("could not write image {}: {err}", path.display());
    }

    path.display().to_string()
}

/// A fresh 12-character alphanumeric basename.
fn random_basename() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BASENAME_LEN)
        .map(char::from)
        .collect()
}

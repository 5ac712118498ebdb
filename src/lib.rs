//! # academy-md
//!
//! Downloads HackTheBox Academy modules and renders them as Markdown.
//!
//! A module is fetched page by page through an authenticated session. Each
//! lesson page is reduced to its teaching content (site chrome stripped,
//! interactive widgets removed, image references made absolute), the pages
//! are converted to Markdown, and the result is written as a single
//! document named after the module title. Images can optionally be
//! downloaded into a local directory instead of staying remote links.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use academy_md::{export_module, Options, Session};
//!
//! let session = Session::authenticate("name=value; other=value")?;
//! let path = export_module(
//!     &session,
//!     "https://academy.hackthebox.com/module/18/section/77",
//!     &Options::default(),
//! )?;
//! println!("wrote {}", path.display());
//! # Ok::<(), academy_md::Error>(())
//! ```

use std::fs;
use std::path::PathBuf;

mod error;
mod options;

/// Authenticated HTTP session against the learning platform.
pub mod client;

/// Thin adapter over the HTML parser.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Image reference rewriting and optional local download.
pub mod images;

/// Tag/class/id markers and depth-first element search.
pub mod locate;

/// Markdown rendering and site-specific cleanups.
pub mod markdown;

/// Module index handling: title, lesson page list, full fetch.
pub mod module;

/// Lesson page extraction and sanitization.
pub mod page;

/// URL constants, validation, and resolution.
pub mod url_utils;

// Public API - re-exports
pub use client::Session;
pub use error::{Error, Result};
pub use module::{fetch_module, Module};
pub use options::Options;

/// Downloads a module and writes it to disk as Markdown.
///
/// This is the whole pipeline: fetch the module and its lesson pages,
/// optionally download embedded images into `options.image_dir`, render
/// everything to Markdown, and write `<title>.md` under
/// `options.output_dir` (created when missing).
///
/// # Returns
///
/// The path of the written Markdown file.
///
/// # Example
///
/// ```rust,no_run
/// use academy_md::{export_module, Options, Session};
///
/// let session = Session::authenticate("name=value")?;
/// let options = Options {
///     image_dir: Some("images".into()),
///     ..Options::default()
/// };
/// export_module(
///     &session,
///     "https://academy.hackthebox.com/module/18/section/77",
///     &options,
/// )?;
/// # Ok::<(), academy_md::Error>(())
/// ```
pub fn export_module(
    session: &Session,
    module_url: &str,
    options: &Options,
) -> Result<PathBuf> {
    let Module { title, pages, .. } = fetch_module(session, module_url)?;

    let pages = match &options.image_dir {
        Some(dir) => images::localize_images(session, &pages, dir)?,
        None => pages,
    };

    let markdown = markdown::render_module(&pages);

    fs::create_dir_all(&options.output_dir).map_err(|source| Error::Write {
        path: options.output_dir.clone(),
        source,
    })?;
    let path = options.output_dir.join(format!("{title}.md"));
    fs::write(&path, markdown).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

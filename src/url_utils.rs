//! URL utility functions.
//!
//! Helpers for the URL conventions the platform uses: the fixed service
//! origin, module index URLs, and the shared prefix that ties a module's
//! lesson pages to its index page.

use std::sync::LazyLock;
use url::Url;

use crate::error::{Error, Result};

/// Scheme and host of the learning platform.
pub const ACADEMY_ORIGIN: &str = "https://academy.hackthebox.com";

/// Every module index URL starts with this prefix.
pub const MODULE_URL_PREFIX: &str = "https://academy.hackthebox.com/module/";

/// Parsed form of [`ACADEMY_ORIGIN`], used as the base for resolving
/// relative references.
#[allow(clippy::expect_used)]
static ACADEMY_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(ACADEMY_ORIGIN).expect("valid origin URL"));

/// The service origin as a parsed URL.
#[must_use]
pub fn academy_base() -> &'static Url {
    &ACADEMY_BASE
}

/// Check if a string is a valid absolute URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether the URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Resolve a URL reference against the service origin.
///
/// Absolute URLs and inline `data:` URIs are returned unchanged; relative
/// references are joined onto [`ACADEMY_ORIGIN`]. Resolution failures fall
/// back to the original string.
#[must_use]
pub fn absolutize(url_str: &str) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    // Inline images stay as they are
    if url_str.starts_with("data:") {
        return url_str.to_string();
    }

    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    match ACADEMY_BASE.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Check whether a string looks like a module index URL.
#[must_use]
pub fn is_module_url(s: &str) -> bool {
    s.trim().starts_with(MODULE_URL_PREFIX)
}

/// Parse and validate a module index URL.
///
/// # Returns
/// * The parsed URL, or [`Error::InvalidModuleUrl`] if the string does not
///   start with [`MODULE_URL_PREFIX`] or does not parse
pub fn parse_module_url(s: &str) -> Result<Url> {
    let s = s.trim();

    if !is_module_url(s) {
        return Err(Error::InvalidModuleUrl(s.to_string()));
    }

    Url::parse(s).map_err(|_| Error::InvalidModuleUrl(s.to_string()))
}

/// Derive the prefix shared by a module's lesson-page URLs.
///
/// Lesson pages live alongside the index page, so the prefix is the module
/// URL with its trailing path segment removed, normalized to end in `/`.
/// Query and fragment parts are dropped before truncation.
#[must_use]
pub fn module_prefix(module_url: &Url) -> String {
    let mut base = module_url.clone();
    base.set_query(None);
    base.set_fragment(None);

    if let Ok(mut segments) = base.path_segments_mut() {
        segments.pop_if_empty().pop();
    }

    let mut prefix = base.to_string();
    if !prefix.ends_with('/') {
        prefix.push('/');
    }
    prefix
}

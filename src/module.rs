//! Module index handling.
//!
//! A module is addressed by the URL of one of its pages. Fetching that page
//! yields both the module title and, through the table-of-contents links it
//! carries, the URL of every lesson page in the module. The links are
//! recognized by a shared prefix derived from the module URL itself, so the
//! coupling survives changes to the site's host or path layout.

use log::{debug, info};
use url::Url;

use crate::client::Session;
use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::page;
use crate::url_utils;

/// Characters that must not appear in a filename derived from a title.
const BAD_TITLE_CHARS: [char; 10] =
    ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// A fully fetched module: its title plus the sanitized content of every
/// lesson page, in reading order.
#[derive(Debug, Clone)]
pub struct Module {
    /// Filesystem-safe module title.
    pub title: String,
    /// Lesson page URLs in document order, index link excluded.
    pub page_urls: Vec<String>,
    /// Sanitized HTML fragment of each lesson page, parallel to `page_urls`.
    pub pages: Vec<String>,
}

/// Fetches a whole module: index page, title, and every lesson page.
pub fn fetch_module(session: &Session, module_url: &str) -> Result<Module> {
    let url = url_utils::parse_module_url(module_url)?;

    info!("fetching module index {url}");
    let index_html = session.get_text(url.as_str())?;

    let title = module_title(&index_html, module_url)?;
    let page_urls = lesson_page_urls(&index_html, &url)?;
    info!("module \"{title}\": {} lesson pages", page_urls.len());

    let mut pages = Vec::with_capacity(page_urls.len());
    for page_url in &page_urls {
        debug!("extracting lesson page {page_url}");
        pages.push(page::extract_page(session, page_url)?);
    }

    Ok(Module {
        title,
        page_urls,
        pages,
    })
}

/// Extracts the sanitized module title from index page HTML.
///
/// # Errors
///
/// Returns [`Error::TitleNotFound`] when the page has no title element or
/// the title is blank.
pub fn module_title(index_html: &str, module_url: &str) -> Result<String> {
    let doc = dom::parse(index_html);
    let titles = doc.select("title");
    let Some(node) = titles.nodes().first() else {
        return Err(Error::TitleNotFound(module_url.to_string()));
    };

    let raw = dom::text_content(&Selection::from(*node));
    let title = raw.trim();
    if title.is_empty() {
        return Err(Error::TitleNotFound(module_url.to_string()));
    }

    Ok(sanitize_title(title))
}

/// Replaces characters that are unsafe in filenames with `-`.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if BAD_TITLE_CHARS.contains(&c) { '-' } else { c })
        .collect()
}

/// Collects the lesson page URLs linked from a module index page.
///
/// Anchors are visited in document order; one qualifies when its `href`
/// contains the prefix shared by all of the module's pages (the module URL
/// up to and excluding its trailing path segment). Anchors without an
/// `href` are skipped. The first qualifying link points back at the index
/// itself and is dropped from the result.
///
/// # Errors
///
/// Returns [`Error::NoLessonPages`] when no anchor qualifies.
pub fn lesson_page_urls(index_html: &str, module_url: &Url) -> Result<Vec<String>> {
    let prefix = url_utils::module_prefix(module_url);
    let doc = dom::parse(index_html);

    let mut urls = Vec::new();
    let anchors = doc.select("a");
    for node in anchors.nodes() {
        if let Some(href) = dom::node_attr(node, "href") {
            if href.contains(prefix.as_str()) {
                urls.push(href);
            }
        }
    }

    if urls.is_empty() {
        return Err(Error::NoLessonPages(module_url.to_string()));
    }
    urls.remove(0);
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_PAGE: &str = r#"<html>
    <head><title>Linux Fundamentals</title></head>
    <body>
        <a href="https://academy.hackthebox.com/dashboard">Dashboard</a>
        <a>Bare anchor</a>
        <div class="toc">
            <a href="https://academy.hackthebox.com/module/18/section/77">Introduction</a>
            <a class="active" href="https://academy.hackthebox.com/module/18/section/78">The Shell</a>
            <a href="https://academy.hackthebox.com/module/18/section/79">System Information</a>
        </div>
        <a href="https://other.example.com/module/18/section/80">elsewhere</a>
    </body></html>"#;

    fn module_url() -> Url {
        url_utils::parse_module_url("https://academy.hackthebox.com/module/18/section/77").unwrap()
    }

    #[test]
    fn test_module_title_is_sanitized() {
        let html = "<html><head><title>Windows: Attacks / Defense</title></head><body></body></html>";
        let title = module_title(html, "https://academy.hackthebox.com/module/18/section/77").unwrap();
        assert_eq!(title, "Windows- Attacks - Defense");
    }

    #[test]
    fn test_module_title_trims_whitespace() {
        let html = "<html><head><title>\n  Linux Fundamentals\n </title></head><body></body></html>";
        let title = module_title(html, "https://academy.hackthebox.com/module/18/section/77").unwrap();
        assert_eq!(title, "Linux Fundamentals");
    }

    #[test]
    fn test_module_title_missing_is_an_error() {
        let html = "<html><body><h1>no document title</h1></body></html>";
        let err = module_title(html, "https://academy.hackthebox.com/module/18/section/77").unwrap_err();
        assert!(matches!(err, Error::TitleNotFound(_)));
    }

    #[test]
    fn test_module_title_blank_is_an_error() {
        let html = "<html><head><title>   </title></head><body></body></html>";
        assert!(module_title(html, "https://academy.hackthebox.com/module/18/section/77").is_err());
    }

    #[test]
    fn test_sanitize_title_replaces_every_bad_char() {
        assert_eq!(sanitize_title(r#"a/b\c?d%e*f:g|h"i<j>k"#), "a-b-c-d-e-f-g-h-i-j-k");
    }

    #[test]
    fn test_sanitize_title_leaves_clean_titles_alone() {
        assert_eq!(sanitize_title("Intro to Networking"), "Intro to Networking");
    }

    #[test]
    fn test_lesson_page_urls_drops_the_index_link() {
        let urls = lesson_page_urls(INDEX_PAGE, &module_url()).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://academy.hackthebox.com/module/18/section/78".to_string(),
                "https://academy.hackthebox.com/module/18/section/79".to_string(),
            ]
        );
    }

    #[test]
    fn test_lesson_page_urls_ignores_foreign_and_bare_anchors() {
        let urls = lesson_page_urls(INDEX_PAGE, &module_url()).unwrap();
        assert!(urls.iter().all(|u| u.starts_with("https://academy.hackthebox.com/module/18/")));
    }

    #[test]
    fn test_lesson_page_urls_without_matches_is_an_error() {
        let html = r#"<html><body><a href="https://academy.hackthebox.com/dashboard">x</a></body></html>"#;
        let err = lesson_page_urls(html, &module_url()).unwrap_err();
        assert!(matches!(err, Error::NoLessonPages(_)));
    }

    #[test]
    fn test_lesson_page_urls_single_match_yields_empty_list() {
        let html = r#"<html><body>
            <a href="https://academy.hackthebox.com/module/18/section/77">self</a>
        </body></html>"#;
        let urls = lesson_page_urls(html, &module_url()).unwrap();
        assert!(urls.is_empty());
    }
}

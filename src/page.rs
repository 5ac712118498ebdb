//! Lesson page extraction.
//!
//! A lesson page embeds its teaching content in a `div` whose class list
//! contains `training-module`; everything around it is site chrome. This
//! module pulls that container out of the full page, strips the interactive
//! widgets that have no meaning outside the browser, and rewrites image
//! references so the fragment stands on its own.

use crate::client::Session;
use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::images;
use crate::locate::{self, Marker};

/// Class fragment identifying the lesson content container.
const CONTENT_CLASS: &str = "training-module";

/// Class fragment identifying the VPN switch widget.
const SWITCH_WIDGET_CLASS: &str = "vpn-switch-card";

/// Id fragment identifying the embedded terminal widget.
const TERMINAL_WIDGET_ID: &str = "screen";

/// Fetches a lesson page and returns its sanitized content fragment.
///
/// The returned HTML contains the lesson body only, with interactive
/// widgets removed and image sources rewritten to absolute URLs.
pub fn extract_page(session: &Session, url: &str) -> Result<String> {
    let raw = session.get_text(url)?;
    extract_content(&raw, url)
}

/// Extracts the sanitized lesson content from raw page HTML.
///
/// `url` is only used to annotate the error when the page carries no
/// recognizable lesson container.
pub fn extract_content(raw: &str, url: &str) -> Result<String> {
    let doc = dom::parse(raw);

    let content_marker = Marker::by_class("div", CONTENT_CLASS);
    let Some(content) = locate::find_in(&doc, &content_marker) else {
        return Err(Error::ContentNotFound {
            url: url.to_string(),
            page: raw.to_string(),
        });
    };

    // Re-parse the container so widget removal and image rewriting work on
    // a tree that holds nothing but the lesson itself.
    let fragment_html = dom::outer_html(&Selection::from(content));
    let fragment = dom::parse(&fragment_html);

    let widget_marker =
        Marker::by_class_or_id("div", SWITCH_WIDGET_CLASS, TERMINAL_WIDGET_ID);
    while let Some(widget) = locate::find_in(&fragment, &widget_marker) {
        dom::detach(&widget);
    }

    images::absolutize_images(&fragment);

    Ok(dom::inner_html(&fragment.select("body")).to_string())
}

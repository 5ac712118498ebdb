//! Markdown rendering for extracted lesson content.
//!
//! Each lesson page converts to Markdown independently; the pages then join
//! into one document, and a few site-specific cleanups run across the whole
//! text so terminal transcripts come out as fenced blocks with language tags
//! ordinary Markdown viewers understand.

/// Text replacements applied to the joined Markdown document.
const CLEANUPS: [(&str, &str); 3] = [
    ("shell-session", "shell"),
    ("powershell-session", "powershell"),
    ("[!bash!]$ ", ""),
];

/// Renders sanitized lesson fragments into one Markdown document.
///
/// Pages are converted in order, each followed by a blank-line separator.
/// The cleanups in [`cleanup_markdown`] run on the combined text, so every
/// page gets them regardless of where the markers appear.
#[must_use]
pub fn render_module(pages: &[String]) -> String {
    let mut markdown = String::new();
    for page in pages {
        markdown.push_str(&html2md::parse_html(page));
        markdown.push_str("\n\n\n");
    }
    cleanup_markdown(&markdown)
}

/// Applies the site-specific cleanups to rendered Markdown.
///
/// `shell-session` and `powershell-session` are the highlighter classes the
/// site uses for terminal transcripts. The `[!bash!]$ ` marker is a prompt
/// decoration with no meaning outside the site.
///
/// ```
/// use academy_md::markdown::cleanup_markdown;
///
/// let cleaned = cleanup_markdown("[!bash!]$ id\nshell-session");
/// assert_eq!(cleaned, "id\nshell");
/// ```
#[must_use]
pub fn cleanup_markdown(markdown: &str) -> String {
    let mut out = markdown.to_string();
    for (from, to) in CLEANUPS {
        out = out.replace(from, to);
    }
    out
}

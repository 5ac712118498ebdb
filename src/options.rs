//! Configuration options for module export.

use std::path::PathBuf;

/// Configuration options for module export.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use academy_md::Options;
/// use std::path::PathBuf;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     image_dir: Some(PathBuf::from("images")),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory the per-module Markdown files are written to.
    ///
    /// Default: `"."` (current directory)
    pub output_dir: PathBuf,

    /// Directory embedded images are downloaded into.
    ///
    /// When set, every image referenced by a lesson page is fetched into
    /// this directory and the Markdown references the local copy. When
    /// `None`, image references stay as absolute URLs pointing at the site.
    ///
    /// Default: `None`
    pub image_dir: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            image_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.output_dir, PathBuf::from("."));
        assert!(opts.image_dir.is_none());
    }

    #[test]
    fn test_options_can_be_customized() {
        let opts = Options {
            image_dir: Some(PathBuf::from("images")),
            ..Options::default()
        };
        assert_eq!(opts.image_dir.as_deref(), Some(Path::new("images")));
        assert_eq!(opts.output_dir, PathBuf::from("."));
    }
}

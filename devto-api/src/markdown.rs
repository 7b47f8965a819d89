//! Markdown body sources for article and listing writes.

use std::path::{Path, PathBuf};

use tracing::debug;

use devto_core::constants::MARKDOWN_EXTENSIONS;
use devto_core::error::{DevError, DevResult};

/// Where the markdown body of a create or update comes from.
///
/// `Inline` sends the text unchanged. `FromFile` reads it from disk before
/// the request is built. `None` leaves the body field out of the payload
/// entirely, which keeps the server-side body untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MarkdownSource {
    Inline(String),
    FromFile(PathBuf),
    #[default]
    None,
}

impl MarkdownSource {
    /// Resolve to the markdown text to send, if any.
    pub fn resolve(&self) -> DevResult<Option<String>> {
        match self {
            MarkdownSource::Inline(text) => Ok(Some(text.clone())),
            MarkdownSource::FromFile(path) => load_markdown_file(path).map(Some),
            MarkdownSource::None => Ok(None),
        }
    }
}

impl From<&str> for MarkdownSource {
    fn from(text: &str) -> Self {
        MarkdownSource::Inline(text.to_string())
    }
}

impl From<String> for MarkdownSource {
    fn from(text: String) -> Self {
        MarkdownSource::Inline(text)
    }
}

impl From<PathBuf> for MarkdownSource {
    fn from(path: PathBuf) -> Self {
        MarkdownSource::FromFile(path)
    }
}

/// Read a markdown file.
///
/// The path must end in `.md` or `.markdown`, compared case-sensitively on
/// the whole path, so `.md` alone qualifies and `post.MD` does not. The check
/// runs first: a wrong suffix is a [`DevError::Validation`] even if the file
/// does not exist. Read failures surface as [`DevError::Io`].
pub fn load_markdown_file(path: &Path) -> DevResult<String> {
    let name = path.as_os_str().to_string_lossy();
    let valid = MARKDOWN_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(*ext).is_some_and(|stem| stem.ends_with('.')));
    if !valid {
        return Err(DevError::Validation(format!(
            "not a markdown file: {}",
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path)?;
    debug!("Loaded {} bytes of markdown from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_md_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "hello").unwrap();
        assert_eq!(load_markdown_file(&path).unwrap(), "hello");
    }

    #[test]
    fn test_long_extension_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.markdown");
        fs::write(&path, "# Title\n\nbody").unwrap();
        assert_eq!(load_markdown_file(&path).unwrap(), "# Title\n\nbody");
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        for name in ["post.MarkDown", "post.MD", "post.Md"] {
            let path = dir.path().join(name);
            fs::write(&path, "body").unwrap();
            assert!(
                matches!(load_markdown_file(&path), Err(DevError::Validation(_))),
                "{name}"
            );
        }
    }

    #[test]
    fn test_dot_md_file_name_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".md");
        fs::write(&path, "hidden").unwrap();
        assert_eq!(load_markdown_file(&path).unwrap(), "hidden");

        let suffix_only = dir.path().join("notes-md");
        assert!(matches!(load_markdown_file(&suffix_only), Err(DevError::Validation(_))));
    }

    #[test]
    fn test_wrong_extension_rejected_before_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.txt");
        fs::write(&path, "hello").unwrap();
        assert!(matches!(load_markdown_file(&path), Err(DevError::Validation(_))));

        // Missing file with a bad extension is still a validation error.
        let missing = dir.path().join("missing.txt");
        assert!(matches!(load_markdown_file(&missing), Err(DevError::Validation(_))));

        let bare = dir.path().join("README");
        assert!(matches!(load_markdown_file(&bare), Err(DevError::Validation(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");
        assert!(matches!(load_markdown_file(&path), Err(DevError::Io(_))));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(MarkdownSource::None.resolve().unwrap(), None);
        assert_eq!(
            MarkdownSource::from("inline body").resolve().unwrap(),
            Some("inline body".to_string())
        );

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "from disk").unwrap();
        assert_eq!(
            MarkdownSource::from(path).resolve().unwrap(),
            Some("from disk".to_string())
        );
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(MarkdownSource::default(), MarkdownSource::None);
    }
}

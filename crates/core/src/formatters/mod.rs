//! Output formatters for FTL documents.
//!
//! Each format has a free function ([`render_markdown`], [`render_json`],
//! [`render_yaml`]); [`render`] and [`save_to_file`] dispatch on
//! [`OutputFormat`].

pub mod json;
pub mod markdown;
pub mod yaml;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::document::FtlDocument;
use crate::{FtlError, Result};

pub use json::{JsonFormatter, render_json};
pub use markdown::{MarkdownFormatter, render_markdown};
pub use yaml::{YamlFormatter, render_yaml};

/// Output format for rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FtlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(FtlError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Renders a document in the given format.
pub fn render(doc: &FtlDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(doc)),
        OutputFormat::Json => render_json(doc),
        OutputFormat::Yaml => render_yaml(doc),
    }
}

/// Renders a document and writes it to `path` as UTF-8.
///
/// The format name is checked before anything is written.
pub fn save_to_file<P: AsRef<Path>>(doc: &FtlDocument, path: P, format: &str) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let content = render(doc, format)?;
    let path = path.as_ref();

    debug!(path = %path.display(), %format, bytes = content.len(), "writing document");
    fs::write(path, content)?;

    Ok(())
}

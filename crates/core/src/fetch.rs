//! Input loading from URLs, files, and stdin.
//!
//! This module retrieves the raw documentation that gets transformed into an
//! FTL document: HTTP/HTTPS URLs, local text files, and standard input. HTML
//! input is reduced to plain text before it is handed on.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::preprocess::{html_to_text, looks_like_html};
use crate::{FtlError, Result};

/// File extensions of binary document formats that are not parsed.
const BINARY_EXTENSIONS: &[&str] = &["docx", "doc", "pdf", "odt", "rtf"];

/// HTTP client configuration for fetching input documents.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; ftl-document/0.1)".to_string() }
    }
}

/// Where a piece of input text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Stdin,
    Url(String),
    File(PathBuf),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Input text ready for transformation.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub origin: Origin,
    pub text: String,
}

impl SourceText {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self { origin, text: text.into() }
    }
}

/// Loads input from `-` (stdin), an `http(s)://` URL, or a file path.
#[cfg(feature = "fetch")]
pub async fn load_input(input: &str, config: &FetchConfig) -> Result<SourceText> {
    let source = if input == "-" {
        SourceText::new(Origin::Stdin, fetch_stdin()?)
    } else if is_url(input) {
        SourceText::new(Origin::Url(input.to_string()), fetch_url(input, config).await?)
    } else {
        SourceText::new(Origin::File(PathBuf::from(input)), fetch_file(input)?)
    };

    debug!(origin = %source.origin, bytes = source.text.len(), "loaded input");
    Ok(normalize(source))
}

/// True for inputs that should be fetched over HTTP.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Fetches a document from a URL as text.
///
/// This function performs an HTTP GET request and returns the response body.
/// It follows redirects and respects the configured timeout. A 404 or 410 is
/// reported as [`FtlError::NotFound`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use reqwest::{Client, StatusCode};
    use std::time::Duration;
    use url::Url;

    let parsed_url = Url::parse(url).map_err(|e| FtlError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(FtlError::InvalidUrl("URL must use http:// or https://".to_string()));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(FtlError::HttpError)?;

    let request_error =
        |e: reqwest::Error| if e.is_timeout() { FtlError::Timeout { timeout: config.timeout } } else { FtlError::HttpError(e) };

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/plain,text/markdown,text/html;q=0.9,*/*;q=0.8")
        .send()
        .await
        .map_err(request_error)?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
        return Err(FtlError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(FtlError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content = response.text().await.map_err(request_error)?;
    debug!(url, status = status.as_u16(), bytes = content.len(), "fetched url");

    Ok(content)
}

/// Reads a text document from a local file.
///
/// Binary document formats are rejected with [`FtlError::NotImplemented`].
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if let Some(ext) = binary_extension(&path_buf) {
        return Err(FtlError::NotImplemented(format!("{} parsing", ext.to_uppercase())));
    }

    if !path_buf.exists() {
        Err(FtlError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(FtlError::from)
    }
}

/// Reads input from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(FtlError::from)?;

    Ok(buffer)
}

fn binary_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    BINARY_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Reduces HTML input to plain text; other input passes through unchanged.
pub fn normalize(source: SourceText) -> SourceText {
    if looks_like_html(&source.text) {
        debug!(origin = %source.origin, "converting html input to text");
        SourceText { text: html_to_text(&source.text), origin: source.origin }
    } else {
        source
    }
}

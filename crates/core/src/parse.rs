//! Section parser for FTL-structured text.
//!
//! The input is the section-delimited markdown produced by the LLM
//! transformation (or written by hand): a `# Title` line, then bold section
//! headers such as `**Tools Required**` followed by bullet or numbered lines.
//!
//! Parsing never fails. Unrecognized content is dropped and the result is
//! simply sparse; it is the validator's job to flag what is missing.
//!
//! # Example
//!
//! ```rust
//! use ftl_core::parse;
//!
//! let doc = parse("# My Title\n**Tools**\n- foo\n**Implementation**\n1. Do X");
//! assert_eq!(doc.title, "My Title");
//! assert_eq!(doc.tools_required, vec!["foo"]);
//! assert_eq!(doc.implementation_steps, vec!["Do X"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{FtlDocument, UNTITLED};

static STEP_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("step pattern is valid"));

const BULLET: &str = "- ";

/// Options for [`parse_with_config`].
#[derive(Debug, Clone, Default)]
pub struct ParseConfig {
    /// Also treat `## Heading` lines as section headers, and accept a plain
    /// line under Produces. This is what [`render_markdown`] emits, so
    /// enabling it lets rendered documents be parsed back. Items are read one
    /// per line: a multi-line step splits into several steps, and only the
    /// last line of a multi-line Produces survives. Metadata is not rendered.
    ///
    /// [`render_markdown`]: crate::render_markdown
    pub heading_sections: bool,
}

impl ParseConfig {
    /// Config that understands the renderer's markdown layout.
    pub fn rendered() -> Self {
        Self { heading_sections: true }
    }
}

/// The schema field subsequent lines populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dependencies,
    Tools,
    Questions,
    Implementation,
    Verification,
    Produces,
}

impl Section {
    /// Selects a section from header text.
    ///
    /// Keywords are checked in a fixed order, so "Implementation Requirements"
    /// resolves to [`Section::Dependencies`].
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.to_lowercase();

        if header.contains("requirement") || header.contains("dependencies") {
            Some(Self::Dependencies)
        } else if header.contains("tool") {
            Some(Self::Tools)
        } else if header.contains("question") {
            Some(Self::Questions)
        } else if header.contains("implementation") {
            Some(Self::Implementation)
        } else if header.contains("verification") {
            Some(Self::Verification)
        } else if header.contains("produce") {
            Some(Self::Produces)
        } else {
            None
        }
    }

    fn is_steps(self) -> bool {
        matches!(self, Self::Implementation | Self::Verification)
    }
}

/// Parses section-delimited text with the default [`ParseConfig`].
pub fn parse(text: &str) -> FtlDocument {
    parse_with_config(text, &ParseConfig::default())
}

/// Parses section-delimited text into an [`FtlDocument`].
pub fn parse_with_config(text: &str, config: &ParseConfig) -> FtlDocument {
    let mut title: Option<String> = None;
    let mut doc = FtlDocument::default();
    let mut current: Option<Section> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(heading) = line.strip_prefix("# ") {
            title = Some(heading.trim().to_string());
            continue;
        }

        if let Some(header) = section_header(line, config) {
            current = Section::from_header(header);
            continue;
        }

        let Some(section) = current else {
            continue;
        };

        if section.is_steps() {
            let step = strip_step_prefix(line).to_string();
            match section {
                Section::Implementation => doc.implementation_steps.push(step),
                _ => doc.verification_steps.push(step),
            }
            continue;
        }

        let item = match line.strip_prefix(BULLET) {
            Some(item) => item.trim().to_string(),
            None if section == Section::Produces && config.heading_sections => line.to_string(),
            None => continue,
        };

        match section {
            Section::Dependencies => doc.dependencies.push(item),
            Section::Tools => doc.tools_required.push(item),
            Section::Questions => doc.questions.push(item),
            _ => doc.produces = Some(item),
        }
    }

    doc.title = title.unwrap_or_else(|| UNTITLED.to_string());
    doc
}

/// Returns the header text if the line is a section header.
fn section_header<'a>(line: &'a str, config: &ParseConfig) -> Option<&'a str> {
    if let Some(inner) = line.strip_prefix("**").and_then(|l| l.strip_suffix("**")) {
        let inner = inner.trim();
        if !inner.is_empty() && !inner.contains("**") {
            return Some(inner);
        }
    }

    if config.heading_sections {
        return line.strip_prefix("## ").map(str::trim);
    }

    None
}

/// Strips a `1. ` or `- ` prefix; any other line is a step verbatim.
fn strip_step_prefix(line: &str) -> &str {
    if let Some(m) = STEP_NUMBER.find(line) {
        return &line[m.end()..];
    }
    match line.strip_prefix(BULLET) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

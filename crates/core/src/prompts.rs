//! Prompt loading for the LLM transformation.
//!
//! Two prompts drive the transformation: the system prompt describing the FTL
//! layout (`ftl_document.md`) and the tool-description prompt (`tools.md`).
//! Both ship compiled into the crate; a prompt directory can override them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{FtlError, Result};

/// File name of the system prompt.
pub const SYSTEM_PROMPT_FILE: &str = "ftl_document.md";
/// File name of the tool-description prompt.
pub const TOOLS_PROMPT_FILE: &str = "tools.md";

const BUILTIN_SYSTEM_PROMPT: &str = include_str!("../prompts/ftl_document.md");
const BUILTIN_TOOLS_PROMPT: &str = include_str!("../prompts/tools.md");

/// The loaded prompt pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    pub system: String,
    pub tools: String,
}

impl PromptSet {
    /// The full system message: layout instructions followed by tool guidance.
    pub fn system_message(&self) -> String {
        format!("{}\n\n{}", self.system.trim(), self.tools.trim())
    }
}

/// Wraps raw input in the user message sent alongside the prompts.
pub fn compose_user_message(input: &str) -> String {
    format!("Input document to transform:\n\n{}", input)
}

/// Loads prompts from a directory, or the built-in copies.
#[derive(Debug, Clone, Default)]
pub struct PromptLoader {
    dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Loader that uses the built-in prompts.
    pub fn new() -> Self {
        Self { dir: None }
    }

    /// Loader that reads both prompt files from `dir`.
    pub fn with_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: Some(dir.into()) }
    }

    /// The per-user prompt directory, `<config dir>/ftl-document/prompts`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ftl-document").join("prompts"))
    }

    /// Loader for the per-user directory when it exists, built-in otherwise.
    pub fn discover() -> Self {
        match Self::default_dir() {
            Some(dir) if dir.is_dir() => Self::with_dir(dir),
            _ => Self::new(),
        }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Loads a single prompt by file name.
    pub fn load_prompt(&self, name: &str) -> Result<String> {
        let Some(dir) = &self.dir else {
            return match name {
                SYSTEM_PROMPT_FILE => Ok(BUILTIN_SYSTEM_PROMPT.to_string()),
                TOOLS_PROMPT_FILE => Ok(BUILTIN_TOOLS_PROMPT.to_string()),
                other => Err(FtlError::FileNotFound(PathBuf::from(other))),
            };
        };

        let path = dir.join(name);
        if !path.exists() {
            return Err(FtlError::FileNotFound(path));
        }

        debug!(path = %path.display(), "loading prompt");
        Ok(fs::read_to_string(&path)?)
    }

    /// Loads the system and tool-description prompts.
    pub fn load(&self) -> Result<PromptSet> {
        Ok(PromptSet { system: self.load_prompt(SYSTEM_PROMPT_FILE)?, tools: self.load_prompt(TOOLS_PROMPT_FILE)? })
    }
}

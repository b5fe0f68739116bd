//! The FTL document schema.
//!
//! [`FtlDocument`] is the single record this crate produces and consumes: the
//! parser builds it, the validator reads it and the formatters serialize it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Title used by the parser when the input carries no `# heading`.
pub const UNTITLED: &str = "Untitled Document";

/// A structured procedure: what it needs, how to do it, and how to check it.
///
/// Sequence order is meaningful and preserved from parse to render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FtlDocument {
    /// The title of the document.
    pub title: String,

    /// Prerequisites needed before starting.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Automation tools the procedure relies on.
    #[serde(default)]
    pub tools_required: Vec<String>,

    /// Questions to ask the user before running the procedure.
    #[serde(default)]
    pub questions: Vec<String>,

    /// Ordered implementation steps.
    #[serde(default)]
    pub implementation_steps: Vec<String>,

    /// Ordered verification procedures.
    #[serde(default)]
    pub verification_steps: Vec<String>,

    /// What the document creates or achieves.
    #[serde(default)]
    pub produces: Option<String>,

    /// Free-form extension data, passed through untouched.
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl FtlDocument {
    /// Creates a document with the two required sections set.
    pub fn new(title: impl Into<String>, implementation_steps: Vec<String>) -> Self {
        Self { title: title.into(), implementation_steps, ..Default::default() }
    }

    /// The produces statement, with an empty string treated as absent.
    pub fn produces(&self) -> Option<&str> {
        self.produces.as_deref().filter(|p| !p.is_empty())
    }

    /// The example document emitted by the `template` command.
    pub fn template() -> Self {
        Self {
            title: "Example FTL Document".to_string(),
            dependencies: vec!["A prerequisite system or tool".to_string()],
            tools_required: vec!["example_tool".to_string(), "another_tool".to_string()],
            questions: vec![
                "What is the target system?".to_string(),
                "What configuration is needed?".to_string(),
            ],
            implementation_steps: vec![
                "Install required tools".to_string(),
                "Configure the system".to_string(),
                "Apply settings".to_string(),
                "Verify installation".to_string(),
            ],
            verification_steps: vec![
                "Test the configuration".to_string(),
                "Verify expected behavior".to_string(),
            ],
            produces: Some("A configured system ready for use".to_string()),
            metadata: BTreeMap::new(),
        }
    }
}

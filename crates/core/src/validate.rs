//! Completeness checks and quality scoring for FTL documents.
//!
//! Validation is pure: it reads a document and reports what is missing. Only
//! the required sections (`title`, `implementation_steps`) affect validity;
//! every other finding is a warning that lowers the score.

use serde::{Deserialize, Serialize};

use crate::document::FtlDocument;
use crate::{FtlError, Result};

/// Points removed per error.
const ERROR_PENALTY: i64 = 20;
/// Points removed per warning.
const WARNING_PENALTY: i64 = 5;
/// Points added per completeness bonus.
const BONUS: i64 = 5;

/// Steps with fewer words than this are checked against the vague keywords.
const VAGUE_WORD_LIMIT: usize = 4;

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Quality score in `0..=100`.
    pub score: u8,
}

/// Document fields the validator knows how to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Dependencies,
    ToolsRequired,
    Questions,
    ImplementationSteps,
    VerificationSteps,
    Produces,
}

impl Field {
    /// The serialized field name, as used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Dependencies => "dependencies",
            Self::ToolsRequired => "tools_required",
            Self::Questions => "questions",
            Self::ImplementationSteps => "implementation_steps",
            Self::VerificationSteps => "verification_steps",
            Self::Produces => "produces",
        }
    }

    fn has_content(self, doc: &FtlDocument) -> bool {
        match self {
            Self::Title => !doc.title.trim().is_empty(),
            Self::Dependencies => !doc.dependencies.is_empty(),
            Self::ToolsRequired => !doc.tools_required.is_empty(),
            Self::Questions => !doc.questions.is_empty(),
            Self::ImplementationSteps => !doc.implementation_steps.is_empty(),
            Self::VerificationSteps => !doc.verification_steps.is_empty(),
            Self::Produces => doc.produces.as_deref().is_some_and(|p| !p.trim().is_empty()),
        }
    }
}

/// Validator rules: which sections are required, which recommended, and
/// which words make a short step suspicious.
#[derive(Debug, Clone)]
pub struct DocumentValidator {
    pub required: Vec<Field>,
    pub recommended: Vec<Field>,
    pub vague_keywords: Vec<String>,
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self {
            required: vec![Field::Title, Field::ImplementationSteps],
            recommended: vec![Field::Dependencies, Field::ToolsRequired, Field::VerificationSteps],
            vague_keywords: ["configure", "setup", "install", "run"].map(String::from).to_vec(),
        }
    }
}

impl DocumentValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a document and computes its quality score.
    pub fn validate(&self, doc: &FtlDocument) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for field in &self.required {
            if !field.has_content(doc) {
                errors.push(format!("Missing required section: {}", field.name()));
            }
        }

        for field in &self.recommended {
            if !field.has_content(doc) {
                warnings.push(format!("Missing recommended section: {}", field.name()));
            }
        }

        if !doc.implementation_steps.is_empty() {
            warnings.extend(self.check_steps(&doc.implementation_steps));
        }

        let score = score(doc, errors.len(), warnings.len());

        ValidationResult { valid: errors.is_empty(), errors, warnings, score }
    }

    /// Validates and fails with [`FtlError::Validation`] when invalid.
    pub fn validate_strict(&self, doc: &FtlDocument) -> Result<ValidationResult> {
        let result = self.validate(doc);
        if result.valid { Ok(result) } else { Err(FtlError::Validation { errors: result.errors }) }
    }

    fn check_steps(&self, steps: &[String]) -> Vec<String> {
        let mut warnings = Vec::new();

        if steps.len() < 2 {
            warnings.push("Implementation steps should have at least 2 steps".to_string());
        }

        for (i, step) in steps.iter().enumerate() {
            if self.is_vague(step) {
                warnings.push(format!("Step {} may be too vague: '{}'", i + 1, step));
            }
        }

        warnings
    }

    fn is_vague(&self, step: &str) -> bool {
        if step.split_whitespace().count() >= VAGUE_WORD_LIMIT {
            return false;
        }
        let lower = step.to_lowercase();
        self.vague_keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

fn score(doc: &FtlDocument, errors: usize, warnings: usize) -> u8 {
    let mut score = 100 - errors as i64 * ERROR_PENALTY - warnings as i64 * WARNING_PENALTY;

    if doc.implementation_steps.len() >= 5 {
        score += BONUS;
    }
    if doc.verification_steps.len() >= 3 {
        score += BONUS;
    }
    if doc.produces().is_some() {
        score += BONUS;
    }

    score.clamp(0, 100) as u8
}

/// Validates with the default rules.
pub fn validate(doc: &FtlDocument) -> ValidationResult {
    DocumentValidator::default().validate(doc)
}

/// Validates with the default rules, failing when the document is invalid.
pub fn validate_strict(doc: &FtlDocument) -> Result<ValidationResult> {
    DocumentValidator::default().validate_strict(doc)
}

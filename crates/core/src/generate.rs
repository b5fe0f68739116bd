//! Document generation pipeline.
//!
//! [`Generator`] runs one input through the whole flow: transform the raw
//! text with the LLM collaborator, parse the section-delimited result, and
//! optionally validate it. Nothing is retried; the first failure is returned.
//!
//! # Example
//!
//! ```rust
//! use ftl_core::{Generator, Origin, SourceText};
//!
//! # tokio_test_block_on(async {
//! let source = SourceText::new(Origin::Stdin, "# Tiny\n**Implementation**\n1. Clone the repo\n2. Build it");
//! let generated = Generator::without_transform().generate(&source).await.unwrap();
//! assert_eq!(generated.document.implementation_steps.len(), 2);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

use serde_json::Value;
use tracing::debug;

use crate::document::FtlDocument;
use crate::fetch::SourceText;
use crate::llm::{NoTransform, Transformer};
use crate::parse::{ParseConfig, parse_with_config};
use crate::validate::{DocumentValidator, ValidationResult};
use crate::{FtlError, Result};

/// Pipeline switches.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Send the input through the transformer before parsing (default: true).
    pub transform: bool,
    /// Fail on validation errors (default: true).
    pub validate: bool,
    /// Parser options.
    pub parse: ParseConfig,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { transform: true, validate: true, parse: ParseConfig::default() }
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub document: FtlDocument,
    /// Present when validation ran.
    pub validation: Option<ValidationResult>,
}

/// Runs input text through transform → parse → validate.
pub struct Generator<T: Transformer> {
    transformer: T,
    config: GenerateConfig,
    validator: DocumentValidator,
}

impl<T: Transformer> Generator<T> {
    pub fn new(transformer: T, config: GenerateConfig) -> Self {
        Self { transformer, config, validator: DocumentValidator::default() }
    }

    /// Replaces the default validation rules.
    pub fn with_validator(mut self, validator: DocumentValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Generates a document from loaded input.
    ///
    /// With validation enabled an invalid document is an
    /// [`FtlError::Validation`] error.
    pub async fn generate(&self, source: &SourceText) -> Result<Generated> {
        if source.text.trim().is_empty() {
            return Err(FtlError::NotFound(format!("no content in {}", source.origin)));
        }

        let structured = if self.config.transform {
            debug!(origin = %source.origin, model = self.transformer.model(), "transforming input");
            self.transformer.transform(&source.text).await?
        } else {
            source.text.clone()
        };

        let mut document = parse_with_config(&structured, &self.config.parse);
        debug!(
            title = %document.title,
            steps = document.implementation_steps.len(),
            "parsed document"
        );

        document.metadata.insert("source".to_string(), Value::String(source.origin.to_string()));
        if self.config.transform {
            document.metadata.insert("model".to_string(), Value::String(self.transformer.model().to_string()));
        }

        let validation = if self.config.validate {
            let result = self.validator.validate_strict(&document)?;
            debug!(score = result.score, warnings = result.warnings.len(), "validated document");
            Some(result)
        } else {
            None
        };

        Ok(Generated { document, validation })
    }
}

impl Generator<NoTransform> {
    /// Generator for input that is already section-delimited.
    pub fn without_transform() -> Self {
        Self::new(NoTransform, GenerateConfig { transform: false, ..Default::default() })
    }
}

//! Turn free-form technical documentation into structured FTL documents.
//!
//! An FTL document is a fixed-schema record of a procedure: a title, its
//! dependencies, the tools it needs, questions for the user, numbered
//! implementation and verification steps, and what it produces.
//!
//! # Example
//!
//! ```rust
//! use ftl_core::{parse, render_markdown, validate};
//!
//! let doc = parse("# Set Up CI\n**Tools Required**\n- git\n**Implementation Steps**\n1. Add the workflow file\n2. Push the branch");
//! let result = validate(&doc);
//! assert!(result.valid);
//! assert!(render_markdown(&doc).starts_with("# Set Up CI"));
//! ```
//!
//! With the `llm` feature, [`AnthropicTransformer`] and [`Generator`] run the
//! whole flow from raw input:
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "fetch", feature = "llm"))]
//! # async fn run() -> ftl_core::Result<()> {
//! use ftl_core::{AnthropicTransformer, FetchConfig, GenerateConfig, Generator, LlmConfig, PromptLoader, load_input};
//!
//! let config = LlmConfig::builder().api_key("sk-ant-...").build();
//! let transformer = AnthropicTransformer::new(config, PromptLoader::discover().load()?)?;
//! let source = load_input("docs/deploy.md", &FetchConfig::default()).await?;
//! let generated = Generator::new(transformer, GenerateConfig::default()).generate(&source).await?;
//! println!("{}", generated.document.title);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod generate;
pub mod llm;
pub mod parse;
pub mod preprocess;
pub mod prompts;
pub mod validate;

pub use document::{FtlDocument, UNTITLED};
pub use error::{ErrorCategory, FtlError, Result};
pub use fetch::{FetchConfig, Origin, SourceText, fetch_file, fetch_stdin, is_url, normalize};
#[cfg(feature = "fetch")]
pub use fetch::{fetch_url, load_input};
pub use formatters::json::{JsonConfig, parse_json};
pub use formatters::markdown::{MarkdownConfig, render_markdown_with_config};
pub use formatters::yaml::parse_yaml;
pub use formatters::{JsonFormatter, MarkdownFormatter, OutputFormat, YamlFormatter};
pub use formatters::{render, render_json, render_markdown, render_yaml, save_to_file};
pub use generate::{GenerateConfig, Generated, Generator};
#[cfg(feature = "llm")]
pub use llm::AnthropicTransformer;
pub use llm::{DEFAULT_MODEL, LlmConfig, LlmConfigBuilder, LlmError, NoTransform, Transformer};
pub use parse::{ParseConfig, Section, parse, parse_with_config};
pub use preprocess::{html_to_text, looks_like_html};
pub use prompts::{PromptLoader, PromptSet, compose_user_message};
pub use validate::{DocumentValidator, Field, ValidationResult, validate, validate_strict};

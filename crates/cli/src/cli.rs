// Command-line definition shared by the binary and build.rs (completions).
// Keep it free of crate-local imports so it can be `include!`d from the build script.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Generate and validate FTL documents from human documentation
#[derive(Parser, Debug)]
#[command(name = "ftl-document")]
#[command(author = "FTL Document Contributors")]
#[command(version)]
#[command(about = "Turn human documentation into structured FTL documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an FTL document from a URL, file, or stdin
    Generate(GenerateArgs),
    /// Validate an existing FTL document
    Validate(ValidateArgs),
    /// Print an example FTL document
    Template(TemplateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// URL to fetch, local text file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value = "markdown", value_name = "FORMAT")]
    pub format: FormatArg,

    /// Validate the generated document (default)
    #[arg(long, overrides_with = "no_validate")]
    pub validate: bool,

    /// Skip validation of the generated document
    #[arg(long, overrides_with = "validate")]
    pub no_validate: bool,

    /// Model used for the transformation [default: claude-sonnet-4-20250514]
    #[arg(long, env = "FTL_MODEL", value_name = "MODEL")]
    pub model: Option<String>,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Directory holding ftl_document.md and tools.md prompt overrides
    #[arg(long, value_name = "DIR")]
    pub prompt_dir: Option<PathBuf>,

    /// Parse the input as an already section-delimited document
    #[arg(long)]
    pub skip_transform: bool,

    /// HTTP timeout in seconds for fetching the input
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// FTL document to check (markdown, .json or .yaml)
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Print the validation result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value = "markdown", value_name = "FORMAT")]
    pub format: FormatArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    #[value(alias = "md")]
    Markdown,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

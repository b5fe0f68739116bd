mod cli;
mod echo;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, FormatArg, GenerateArgs, TemplateArgs, ValidateArgs};
use ftl_core::{
    AnthropicTransformer, FetchConfig, FtlDocument, FtlError, GenerateConfig, Generated, Generator, LlmConfig,
    NoTransform, OutputFormat, ParseConfig, PromptLoader, Transformer, fetch_file, load_input, parse_json,
    parse_with_config, parse_yaml, render, save_to_file, validate,
};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "warn,ftl_core=debug,ftl_document=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print a rendered document to stdout, newline terminated
fn print_output(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

fn build_transformer(args: &GenerateArgs) -> anyhow::Result<AnthropicTransformer> {
    let loader = match &args.prompt_dir {
        Some(dir) => PromptLoader::with_dir(dir),
        None => PromptLoader::discover(),
    };
    let prompts = loader.load().context("Failed to load prompts")?;

    let mut config = LlmConfig::builder().api_key(args.api_key.clone().unwrap_or_default());
    if let Some(model) = &args.model {
        config = config.model(model);
    }

    AnthropicTransformer::new(config.build(), prompts)
        .map_err(FtlError::from)
        .context("Set ANTHROPIC_API_KEY or pass --api-key")
}

async fn run_generate(args: GenerateArgs, verbose: bool) -> anyhow::Result<ExitCode> {
    let total = if args.skip_transform { 3 } else { 4 };
    let mut step = 0;
    let mut next_step = |message: &str| {
        step += 1;
        if verbose {
            echo::print_step(step, total, message);
        }
    };

    let format = OutputFormat::from(args.format);
    debug!(input = %args.input, %format, "starting generate");

    let transformer = if args.skip_transform { None } else { Some(build_transformer(&args)?) };

    next_step(&format!("Loading {}", args.input.bright_white()));
    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
    };
    let source = load_input(&args.input, &fetch_config)
        .await
        .with_context(|| format!("Failed to load input: {}", args.input))?;

    if verbose {
        echo::print_detail("Source", &source.origin.to_string());
        echo::print_detail("Size", &echo::format_size(source.text.len()));
        eprintln!();
    }

    let validate_output = args.validate || !args.no_validate;
    let generated: Generated = match transformer {
        Some(transformer) => {
            next_step(&format!("Transforming with {}", transformer.model().bright_white()));
            let config = GenerateConfig { transform: true, validate: validate_output, parse: ParseConfig::default() };
            Generator::new(transformer, config).generate(&source).await
        }
        None => {
            next_step("Parsing section-delimited input");
            let config = GenerateConfig { transform: false, validate: validate_output, parse: ParseConfig::rendered() };
            Generator::new(NoTransform, config).generate(&source).await
        }
    }
    .context("Failed to generate document")?;

    if verbose {
        echo::print_detail("Title", &generated.document.title);
        echo::print_detail("Steps", &generated.document.implementation_steps.len().to_string());
        eprintln!();
    }

    if let Some(result) = &generated.validation {
        echo::print_quality(result);
    }

    next_step("Writing output");
    if verbose {
        echo::print_detail("Format", format.as_str());
    }

    match &args.output {
        Some(path) => {
            save_to_file(&generated.document, path, format.as_str())
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => print_output(&render(&generated.document, format)?),
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads a document in whichever layout its extension suggests.
fn load_document(path: &Path) -> anyhow::Result<FtlDocument> {
    let display = path.display().to_string();
    let text = fetch_file(&display).with_context(|| format!("Failed to read file: {}", display))?;

    let doc = match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
        Some("json") => parse_json(&text).with_context(|| format!("Failed to parse JSON document: {}", display))?,
        Some("yaml" | "yml") => {
            parse_yaml(&text).with_context(|| format!("Failed to parse YAML document: {}", display))?
        }
        _ => parse_with_config(&text, &ParseConfig::rendered()),
    };

    Ok(doc)
}

fn run_validate(args: ValidateArgs, verbose: bool) -> anyhow::Result<ExitCode> {
    if verbose {
        echo::print_step(1, 1, &format!("Validating {}", args.input_file.display().bright_white()));
    }

    let doc = load_document(&args.input_file)?;
    let result = validate(&doc);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        echo::print_validation_report(&result);
    }

    Ok(if result.valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn run_template(args: TemplateArgs) -> anyhow::Result<ExitCode> {
    print_output(&render(&FtlDocument::template(), args.format.into())?);
    Ok(ExitCode::SUCCESS)
}

fn report_error(err: &anyhow::Error) {
    let category = err
        .chain()
        .find_map(|e| e.downcast_ref::<FtlError>())
        .map(FtlError::category);
    echo::print_categorized_error(category, &format!("{:#}", err));
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let result = match cli.command {
        Command::Generate(args) => run_generate(args, cli.verbose).await,
        Command::Validate(args) => run_validate(args, cli.verbose),
        Command::Template(args) => run_template(args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

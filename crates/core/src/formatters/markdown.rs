use crate::document::FtlDocument;
use serde_json::Value;

/// Configuration for Markdown rendering
#[derive(Debug, Clone, Default)]
pub struct MarkdownConfig {
    /// Prepend TOML frontmatter built from the document metadata
    pub include_frontmatter: bool,
}

/// Render a document with the fixed FTL section template
pub fn render_markdown(doc: &FtlDocument) -> String {
    render_markdown_with_config(doc, &MarkdownConfig::default())
}

/// Render a document, optionally with metadata frontmatter
pub fn render_markdown_with_config(doc: &FtlDocument, config: &MarkdownConfig) -> String {
    let body = format!(
        "# {title}\n\n\
         ## Requirements\n{dependencies}\n\n\
         ## Tools Needed\n{tools}\n\n\
         ## User Questions\n{questions}\n\n\
         ## Implementation Steps\n{implementation}\n\n\
         ## Verification Steps\n{verification}\n\n\
         ## Produces\n{produces}\n",
        title = doc.title,
        dependencies = bullet_list(&doc.dependencies),
        tools = bullet_list(&doc.tools_required),
        questions = bullet_list(&doc.questions),
        implementation = numbered_list(&doc.implementation_steps),
        verification = numbered_list(&doc.verification_steps),
        produces = doc.produces().unwrap_or_default(),
    );

    match generate_frontmatter(doc).filter(|_| config.include_frontmatter) {
        Some(frontmatter) => format!("{}\n{}", frontmatter, body.trim()),
        None => body.trim().to_string(),
    }
}

/// Format items as `- item` lines
fn bullet_list(items: &[String]) -> String {
    items.iter().map(|item| format!("- {}", item)).collect::<Vec<_>>().join("\n")
}

/// Format items as `1. item` lines
fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate TOML frontmatter from document metadata
///
/// Null values have no TOML form and are left out, as is the whole block
/// when nothing remains.
fn generate_frontmatter(doc: &FtlDocument) -> Option<String> {
    let entries: Vec<String> = doc
        .metadata
        .iter()
        .filter_map(|(key, value)| toml_value(value).map(|v| format!("{} = {}", toml_key(key), v)))
        .collect();

    if entries.is_empty() {
        return None;
    }
    Some(format!("+++\n{}\n+++\n", entries.join("\n")))
}

/// Bare key when TOML allows one, quoted otherwise
fn toml_key(key: &str) -> String {
    let bare = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if bare { key.to_string() } else { toml_escape_string(key) }
}

/// Arrays become TOML arrays and objects inline tables
fn toml_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(toml_escape_string(s)),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().filter_map(toml_value).collect();
            Some(format!("[{}]", items.join(", ")))
        }
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .filter_map(|(k, v)| toml_value(v).map(|v| format!("{} = {}", toml_key(k), v)))
                .collect();
            if fields.is_empty() { Some("{}".to_string()) } else { Some(format!("{{ {} }}", fields.join(", "))) }
        }
    }
}

/// Escape a string for TOML format
fn toml_escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('"');
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

/// Markdown formatter with configurable options
pub struct MarkdownFormatter {
    config: MarkdownConfig,
}

impl MarkdownFormatter {
    pub fn new(config: MarkdownConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, doc: &FtlDocument) -> String {
        render_markdown_with_config(doc, &self.config)
    }
}

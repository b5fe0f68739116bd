use crate::Result;
use crate::document::FtlDocument;

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Pretty print with 2-space indentation
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Render a document as 2-space indented JSON
pub fn render_json(doc: &FtlDocument) -> Result<String> {
    render_json_with_config(doc, &JsonConfig::default())
}

/// Render a document as JSON with the given options
pub fn render_json_with_config(doc: &FtlDocument, config: &JsonConfig) -> Result<String> {
    if config.pretty { Ok(serde_json::to_string_pretty(doc)?) } else { Ok(serde_json::to_string(doc)?) }
}

/// Parse a document previously rendered as JSON
pub fn parse_json(json: &str) -> Result<FtlDocument> {
    Ok(serde_json::from_str(json)?)
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, doc: &FtlDocument) -> Result<String> {
        render_json_with_config(doc, &self.config)
    }
}

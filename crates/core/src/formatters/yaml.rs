use crate::Result;
use crate::document::FtlDocument;

/// Render a document as block-style YAML
pub fn render_yaml(doc: &FtlDocument) -> Result<String> {
    Ok(serde_yaml::to_string(doc)?)
}

/// Parse a document previously rendered as YAML
pub fn parse_yaml(yaml: &str) -> Result<FtlDocument> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// YAML formatter for documents
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, doc: &FtlDocument) -> Result<String> {
        render_yaml(doc)
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

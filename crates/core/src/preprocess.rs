//! HTML to plain text reduction for fetched pages.
//!
//! Documentation fetched from the web usually arrives as HTML. The LLM only
//! needs the prose, so markup is dropped, block elements become line breaks,
//! headings and list items keep a markdown-ish prefix, and non-content
//! elements are skipped entirely.

use scraper::{ElementRef, Html};

/// Elements whose content never reaches the output.
const SKIPPED: &[&str] = &["script", "style", "noscript", "nav", "footer", "template", "svg", "head"];

/// Elements surrounded by line breaks.
const BLOCK: &[&str] = &[
    "p", "div", "section", "article", "main", "header", "ul", "ol", "li", "pre", "blockquote", "table", "tr", "br",
    "h1", "h2", "h3", "h4", "h5", "h6", "dl", "dt", "dd",
];

/// True when the text looks like an HTML document rather than markdown/text.
pub fn looks_like_html(text: &str) -> bool {
    let head: String = text.trim_start().chars().take(14).collect::<String>().to_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

/// Converts an HTML document to plain text lines.
pub fn html_to_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(doc.root_element(), &mut raw);

    let mut output: Vec<String> = Vec::new();
    for line in raw.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() && output.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        output.push(line);
    }

    output.join("\n").trim().to_string()
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }

        let Some(el) = ElementRef::wrap(child) else {
            continue;
        };
        let name = el.value().name();
        if SKIPPED.contains(&name) {
            continue;
        }

        let block = BLOCK.contains(&name);
        if block {
            out.push('\n');
        }
        if let Some(prefix) = line_prefix(name) {
            out.push_str(prefix);
        }

        collect_text(el, out);

        if block {
            out.push('\n');
        }
    }
}

fn line_prefix(name: &str) -> Option<&'static str> {
    match name {
        "h1" => Some("# "),
        "h2" => Some("## "),
        "h3" | "h4" | "h5" | "h6" => Some("### "),
        "li" => Some("- "),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<!DOCTYPE html><html></html>"));
        assert!(looks_like_html("\n  <html lang=\"en\"><body></body></html>"));
        assert!(!looks_like_html("# Markdown title"));
        assert!(!looks_like_html("Use <b>bold</b> in text"));
    }

    #[test]
    fn test_html_to_text_structure() {
        let html = r#"
            <html><body>
                <h1>Deploy Guide</h1>
                <p>Before you begin:</p>
                <ul><li>Docker</li><li>kubectl</li></ul>
            </body></html>
        "#;

        let text = html_to_text(html);
        assert_eq!(text, "# Deploy Guide\n\nBefore you begin:\n\n- Docker\n\n- kubectl");
    }

    #[test]
    fn test_html_to_text_skips_non_content() {
        let html = r#"
            <html>
            <head><title>Ignored</title><style>p { color: red; }</style></head>
            <body>
                <nav>Home | Docs</nav>
                <p>Real content.</p>
                <script>console.log("hidden");</script>
                <footer>Copyright</footer>
            </body>
            </html>
        "#;

        let text = html_to_text(html);
        assert_eq!(text, "Real content.");
    }

    #[test]
    fn test_html_to_text_collapses_whitespace() {
        let html = "<html><body><p>  spaced    out\n   words </p></body></html>";
        assert_eq!(html_to_text(html), "spaced out\nwords");
    }
}

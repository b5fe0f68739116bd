//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ftl-document");
    cmd.env_remove("ANTHROPIC_API_KEY").env_remove("FTL_MODEL").env_remove("RUST_LOG");
    cmd
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_template_markdown() {
    cmd()
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Example FTL Document"))
        .stdout(predicate::str::contains("## Tools Needed\n- example_tool\n- another_tool"))
        .stdout(predicate::str::contains("1. Install required tools"));
}

#[test]
fn test_cli_template_json() {
    let output = cmd().args(["template", "-f", "json"]).assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["title"], "Example FTL Document");
    assert_eq!(json["implementation_steps"].as_array().unwrap().len(), 4);
}

#[test]
fn test_cli_template_yaml() {
    cmd()
        .args(["template", "--format", "yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Example FTL Document"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["template", "-f", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"))
        .stderr(predicate::str::contains("markdown"));
}

#[test]
fn test_cli_validate_valid_file() {
    cmd()
        .args(["validate", &get_fixture_path("sectioned.md")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document is valid"))
        .stdout(predicate::str::contains("100/100"))
        .stderr(predicate::str::contains("Document is").not());
}

#[test]
fn test_cli_validate_rendered_file() {
    cmd().args(["validate", &get_fixture_path("rendered.md")]).assert().success();
}

#[test]
fn test_cli_validate_invalid_file() {
    cmd()
        .args(["validate", &get_fixture_path("sparse.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document is invalid"))
        .stderr(predicate::str::contains("Missing required section: implementation_steps"))
        .stdout(predicate::str::contains("Document quality score:"))
        .stdout(predicate::str::contains("Missing required section").not());
}

#[test]
fn test_cli_validate_json_output() {
    let output = cmd()
        .args(["validate", "--json", &get_fixture_path("sparse.txt")])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0], "Missing required section: implementation_steps");
    assert!(json["score"].as_u64().unwrap() < 100);
}

#[test]
fn test_cli_validate_json_document() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("template.json");

    let output = cmd().args(["template", "-f", "json"]).assert().success().get_output().stdout.clone();
    std::fs::write(&path, output).unwrap();

    cmd().args(["validate", path.to_str().unwrap()]).assert().success();
}

#[test]
fn test_cli_validate_missing_file() {
    cmd()
        .args(["validate", "/nonexistent/guide.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_cli_generate_skip_transform() {
    cmd()
        .args(["generate", "--skip-transform", &get_fixture_path("sectioned.md")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Deploy the Web Service"))
        .stdout(predicate::str::contains("## Implementation Steps\n1. Build the container image"))
        .stderr(predicate::str::contains("Document quality score:"));
}

#[test]
fn test_cli_generate_skip_transform_json() {
    let output = cmd()
        .args(["generate", "--skip-transform", "-f", "json", &get_fixture_path("sectioned.md")])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["tools_required"], serde_json::json!(["kubectl", "helm"]));
    assert!(json["metadata"]["source"].as_str().unwrap().ends_with("sectioned.md"));
    assert!(json["metadata"].get("model").is_none());
}

#[test]
fn test_cli_generate_skip_transform_yaml() {
    cmd()
        .args(["generate", "--skip-transform", "-f", "yaml", &get_fixture_path("sectioned.md")])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Deploy the Web Service"));
}

#[test]
fn test_cli_generate_stdin() {
    cmd()
        .args(["generate", "--skip-transform", "-"])
        .write_stdin("# From Stdin\n**Implementation**\n1. Open the settings page\n2. Save the new value")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# From Stdin"));
}

#[test]
fn test_cli_generate_html_input() {
    cmd()
        .args(["generate", "--skip-transform", &get_fixture_path("page.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Mount the backup volume"))
        .stdout(predicate::str::contains("track()").not());
}

#[test]
fn test_cli_generate_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output.md");

    cmd()
        .args(["generate", "--skip-transform", "-o", output.to_str().unwrap()])
        .arg(get_fixture_path("sectioned.md"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output written to"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("# Deploy the Web Service"));
}

#[test]
fn test_cli_generate_validation_failure() {
    cmd()
        .args(["generate", "--skip-transform", &get_fixture_path("sparse.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Content error"))
        .stderr(predicate::str::contains("Document validation failed"));
}

#[test]
fn test_cli_generate_no_validate() {
    cmd()
        .args(["generate", "--skip-transform", "--no-validate", &get_fixture_path("sparse.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Untitled Document"))
        .stderr(predicate::str::contains("quality score").not());
}

#[test]
fn test_cli_generate_requires_api_key() {
    cmd()
        .args(["generate", &get_fixture_path("sectioned.md")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ANTHROPIC_API_KEY"))
        .stderr(predicate::str::contains("No API key configured"));
}

#[test]
fn test_cli_generate_missing_file() {
    cmd()
        .args(["generate", "--skip-transform", "/nonexistent/guide.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_cli_generate_docx_not_implemented() {
    cmd()
        .args(["generate", "--skip-transform", "/nonexistent/guide.docx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not implemented: DOCX parsing"));
}

#[test]
fn test_cli_generate_custom_prompt_dir_missing() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["generate", "--api-key", "test-key", "--prompt-dir", tmp.path().to_str().unwrap()])
        .arg(get_fixture_path("sectioned.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load prompts"))
        .stderr(predicate::str::contains("ftl_document.md"));
}

#[test]
fn test_cli_verbose_banner() {
    cmd()
        .args(["-v", "template"])
        .assert()
        .success()
        .stderr(predicate::str::contains("FTL Document"))
        .stderr(predicate::str::contains("Debug logging enabled"));
}

#[test]
fn test_cli_verbose_generate_steps() {
    cmd()
        .args(["generate", "--verbose", "--skip-transform", &get_fixture_path("sectioned.md")])
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/3]"))
        .stderr(predicate::str::contains("[3/3]"));
}

#[test]
fn test_cli_generate_help_kebab_flags() {
    cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-validate"))
        .stdout(predicate::str::contains("--skip-transform"))
        .stdout(predicate::str::contains("--prompt-dir"))
        .stdout(predicate::str::contains("--no_validate").not());
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn test_cli_missing_subcommand() {
    cmd().assert().failure();
}

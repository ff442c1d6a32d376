//! Tests for declaration file loading.

use acore::{ToolBinding, ValidationError};
use adagency_agents::{DEFAULT_MODEL, load_agents_dir, load_manifest, parse_agent_md, parse_manifest};

#[test]
fn parse_agent_md_fields() {
    let md = r#"---
name: copy_generator
model: gemini-2.5-pro
description: Writes ad copy
tools:
  - kind: mcp
    server: web
    name: search
  - kind: agent
    name: campaign_brainstormer
    description: Campaign ideas
---

You are an expert advertising copywriter.
Write several variations.
"#;
    let agent = parse_agent_md(md).unwrap();
    assert_eq!(agent.name(), "copy_generator");
    assert_eq!(agent.model(), "gemini-2.5-pro");
    assert_eq!(agent.description(), "Writes ad copy");
    assert_eq!(agent.tools().len(), 2);
    assert_eq!(agent.tools()[0], ToolBinding::mcp("web", "search"));
    assert_eq!(agent.tools()[1].name(), "campaign_brainstormer");
    assert_eq!(
        agent.instruction(),
        "You are an expert advertising copywriter.\nWrite several variations."
    );
}

#[test]
fn parse_agent_md_defaults_model() {
    let agent = parse_agent_md("---\nname: helper\n---\nYou are helpful.\n").unwrap();
    assert_eq!(agent.model(), DEFAULT_MODEL);
    assert_eq!(agent.description(), "");
    assert!(agent.tools().is_empty());
}

#[test]
fn parse_agent_md_rejects_empty_body() {
    let err = parse_agent_md("---\nname: helper\n---\n\n").unwrap_err();
    assert!(err.to_string().contains("instruction"));
}

#[test]
fn parse_agent_md_rejects_duplicate_tools() {
    let md = "---\nname: helper\ntools:\n  - kind: mcp\n    server: a\n    name: search\n  - kind: agent\n    name: search\n---\nHelp.\n";
    let err = parse_agent_md(md).unwrap_err();
    assert!(err.to_string().contains("duplicate tool binding 'search'"));
}

#[test]
fn load_agents_dir_sorted_by_filename() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("b_writer.md"),
        "---\nname: writer\n---\nYou write copy.\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("a_planner.md"),
        "---\nname: planner\n---\nYou plan campaigns.\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("README.txt"), "not an agent").unwrap();

    let agents = load_agents_dir(dir.path()).unwrap();
    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].name(), "planner");
    assert_eq!(agents[1].name(), "writer");
}

#[test]
fn load_agents_dir_names_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.md"), "no frontmatter here").unwrap();
    let err = load_agents_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("broken.md"));
}

#[test]
fn load_agents_dir_keeps_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("blank.md"), "---\nname: blank\n---\n\n").unwrap();
    let err = load_agents_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("blank.md"));
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::EmptyInstruction)
    );
}

#[test]
fn load_agents_dir_missing_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let agents = load_agents_dir(dir.path().join("nonexistent")).unwrap();
    assert!(agents.is_empty());
}

#[test]
fn parse_manifest_agents() {
    let manifest = r#"
[[agents]]
name = "ad_agency_agent"
model = "gemini-2.0-flash"
description = "Main agent for the Ad Agency AI Assistant."
instruction = "You are a helpful AI assistant."
tools = [
    { kind = "agent", name = "copy_generator", description = "Writes copy" },
]

[[agents]]
name = "copy_generator"
model = "gemini-2.0-flash"
instruction = "You write ad copy."
"#;
    let agents = parse_manifest(manifest).unwrap();
    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].name(), "ad_agency_agent");
    assert_eq!(
        agents[0].tools(),
        [ToolBinding::agent("copy_generator", "Writes copy")]
    );
    assert_eq!(agents[1].description(), "");
}

#[test]
fn parse_manifest_rejects_invalid_agent() {
    let manifest = "[[agents]]\nname = \"writer\"\nmodel = \"gemini-2.0-flash\"\ninstruction = \"\"\n";
    assert!(parse_manifest(manifest).is_err());
}

#[test]
fn parse_manifest_empty() {
    assert!(parse_manifest("").unwrap().is_empty());
}

#[test]
fn load_manifest_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agents.toml");
    std::fs::write(
        &path,
        "[[agents]]\nname = \"writer\"\nmodel = \"gemini-2.0-flash\"\ninstruction = \"Write.\"\n",
    )
    .unwrap();
    let agents = load_manifest(&path).unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].instruction(), "Write.");
}

#[test]
fn load_manifest_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));
}

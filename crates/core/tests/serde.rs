//! Tests for the serialized shape handed to runtimes.

use adagency_core::{AgentDescriptor, ToolBinding, create_agent};
use serde_json::json;

#[test]
fn serializes_exactly_five_fields() {
    let agent = create_agent(
        "ad_agency_agent",
        "gemini-2.0-flash",
        "Main agent for the Ad Agency AI Assistant.",
        "Generate ad campaigns.",
        vec![],
    )
    .unwrap();
    let value = serde_json::to_value(&agent).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "ad_agency_agent",
            "model": "gemini-2.0-flash",
            "description": "Main agent for the Ad Agency AI Assistant.",
            "instruction": "Generate ad campaigns.",
            "tools": [],
        })
    );
}

#[test]
fn tools_are_tagged_by_kind() {
    let agent = AgentDescriptor::builder("lead")
        .model("gemini-2.0-flash")
        .instruction("Coordinate.")
        .tool(ToolBinding::mcp("web", "search"))
        .tool(ToolBinding::agent("copywriter", "Writes copy"))
        .build()
        .unwrap();
    let value = serde_json::to_value(&agent).unwrap();
    assert_eq!(
        value["tools"],
        json!([
            { "kind": "mcp", "server": "web", "name": "search" },
            { "kind": "agent", "name": "copywriter", "description": "Writes copy" },
        ])
    );
}

#[test]
fn deserialize_validates() {
    let doc = json!({
        "name": "",
        "model": "gemini-2.0-flash",
        "instruction": "Write copy.",
    });
    let err = serde_json::from_value::<AgentDescriptor>(doc).unwrap_err();
    assert!(err.to_string().contains("agent name must not be empty"));
}

#[test]
fn deserialize_rejects_duplicate_tools() {
    let doc = json!({
        "name": "writer",
        "model": "gemini-2.0-flash",
        "instruction": "Write copy.",
        "tools": [
            { "kind": "mcp", "server": "a", "name": "search" },
            { "kind": "mcp", "server": "b", "name": "search" },
        ],
    });
    assert!(serde_json::from_value::<AgentDescriptor>(doc).is_err());
}

#[test]
fn deserialize_defaults_optional_fields() {
    let doc = json!({
        "name": "writer",
        "model": "gemini-2.0-flash",
        "instruction": "Write copy.",
    });
    let agent: AgentDescriptor = serde_json::from_value(doc).unwrap();
    assert_eq!(agent.description(), "");
    assert!(agent.tools().is_empty());
}

#[test]
fn function_parameters_default_to_object() {
    let doc = json!({
        "name": "writer",
        "model": "gemini-2.0-flash",
        "instruction": "Write copy.",
        "tools": [{ "kind": "function", "name": "score_headline" }],
    });
    let agent: AgentDescriptor = serde_json::from_value(doc).unwrap();
    let ToolBinding::Function { parameters, .. } = &agent.tools()[0] else {
        panic!("expected a function binding");
    };
    assert_eq!(parameters.get("type"), Some(&json!("object")));
}

#[test]
fn unknown_fields_rejected() {
    let doc = json!({
        "name": "writer",
        "model": "gemini-2.0-flash",
        "instruction": "Write copy.",
        "temperature": 0.2,
    });
    assert!(serde_json::from_value::<AgentDescriptor>(doc).is_err());
}

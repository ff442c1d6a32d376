//! Declaration files for agents.
//!
//! Two formats are supported:
//!
//! - Markdown with YAML frontmatter, one agent per file. The frontmatter
//!   holds `name`, `model`, `description`, and `tools`; the markdown body
//!   becomes the instruction.
//! - A TOML manifest with one `[[agents]]` table per agent.
//!
//! Every parsed agent goes through the same validation as
//! [`create_agent`](acore::create_agent).

use crate::DEFAULT_MODEL;
use acore::{AgentDescriptor, ToolBinding};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// YAML frontmatter for agent markdown files.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AgentFrontmatter {
    name: String,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tools: Vec<ToolBinding>,
}

/// A TOML agent manifest.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    agents: Vec<AgentDescriptor>,
}

/// Parse an agent markdown file (YAML frontmatter + body) into a descriptor.
///
/// The trimmed body becomes the instruction. `model` falls back to
/// [`DEFAULT_MODEL`] when the frontmatter omits it.
pub fn parse_agent_md(content: &str) -> anyhow::Result<AgentDescriptor> {
    let (frontmatter, body) = split_yaml_frontmatter(content)?;
    let fm: AgentFrontmatter = serde_yml::from_str(frontmatter)?;

    let agent = AgentDescriptor::builder(fm.name)
        .model(fm.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned()))
        .description(fm.description)
        .instruction(body.trim())
        .tools(fm.tools)
        .build()?;
    Ok(agent)
}

/// Load all agent markdown files from a directory.
///
/// Non-`.md` files are skipped and entries are sorted by filename. A
/// missing directory yields no agents.
pub fn load_agents_dir(path: impl AsRef<Path>) -> anyhow::Result<Vec<AgentDescriptor>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!("agent directory does not exist: {}", path.display());
        return Ok(Vec::new());
    }

    let mut entries: Vec<_> = std::fs::read_dir(path)
        .with_context(|| format!("failed to read agent directory {}", path.display()))?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut agents = Vec::with_capacity(entries.len());
    for entry in entries {
        let file = entry.path();
        let content = std::fs::read_to_string(&file)
            .with_context(|| format!("failed to read agent file {}", file.display()))?;
        let agent = parse_agent_md(&content)
            .with_context(|| format!("invalid agent file {}", file.display()))?;
        tracing::debug!("loaded agent '{}' from {}", agent.name(), file.display());
        agents.push(agent);
    }

    Ok(agents)
}

/// Parse a TOML manifest of `[[agents]]` tables.
pub fn parse_manifest(content: &str) -> anyhow::Result<Vec<AgentDescriptor>> {
    let manifest: Manifest = toml::from_str(content)?;
    Ok(manifest.agents)
}

/// Read and parse a TOML manifest.
pub fn load_manifest(path: impl AsRef<Path>) -> anyhow::Result<Vec<AgentDescriptor>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let agents = parse_manifest(&content)
        .with_context(|| format!("invalid manifest {}", path.display()))?;
    tracing::debug!("loaded {} agent(s) from {}", agents.len(), path.display());
    Ok(agents)
}

/// Split YAML frontmatter from the body. Frontmatter is delimited by `---`.
///
/// Handles CRLF line endings and trailing whitespace on delimiter lines.
fn split_yaml_frontmatter(content: &str) -> anyhow::Result<(&str, &str)> {
    let content = content.trim_start();
    let Some(rest) = content.strip_prefix("---") else {
        anyhow::bail!("missing YAML frontmatter delimiter (---)");
    };
    let rest = rest.trim_start_matches(['\n', '\r']);

    let mut pos = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim() == "---" {
            let frontmatter = rest[..pos].trim_end();
            let body = &rest[pos + line.len()..];
            return Ok((frontmatter, body));
        }
        pos += line.len();
    }

    anyhow::bail!("missing closing YAML frontmatter delimiter (---)")
}

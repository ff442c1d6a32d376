//! Tool bindings carried by an agent declaration.
//!
//! A [`ToolBinding`] only names a capability. Handlers and invocation
//! live in the runtime.

use crate::AgentDescriptor;
use compact_str::CompactString;
use schemars::{Schema, json_schema};
use serde::{Deserialize, Serialize};

/// A reference to a capability the runtime may invoke for an agent.
///
/// Every variant is identified by its name. An agent never holds two
/// bindings with the same name, whatever their variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolBinding {
    /// A function tool exposed to the model with a JSON schema.
    Function {
        /// The name of the function.
        name: CompactString,
        /// What the function does, as shown to the model.
        #[serde(default)]
        description: String,
        /// JSON schema of the function arguments.
        #[serde(default = "object_schema")]
        parameters: Schema,
    },

    /// A tool served by an MCP server known to the runtime.
    Mcp {
        /// The MCP server the tool is served by.
        server: CompactString,
        /// The tool name on that server.
        name: CompactString,
    },

    /// Delegation to another registered agent.
    Agent {
        /// The name of the delegate agent.
        name: CompactString,
        /// When the delegate should be called.
        #[serde(default)]
        description: String,
    },
}

impl ToolBinding {
    /// Bind a function tool.
    pub fn function(
        name: impl Into<CompactString>,
        description: impl Into<String>,
        parameters: Schema,
    ) -> Self {
        Self::Function {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Bind a tool served by an MCP server.
    pub fn mcp(server: impl Into<CompactString>, name: impl Into<CompactString>) -> Self {
        Self::Mcp {
            server: server.into(),
            name: name.into(),
        }
    }

    /// Bind another agent as a delegate.
    pub fn agent(name: impl Into<CompactString>, description: impl Into<String>) -> Self {
        Self::Agent {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The identity of this binding.
    pub fn name(&self) -> &str {
        match self {
            Self::Function { name, .. } | Self::Mcp { name, .. } | Self::Agent { name, .. } => {
                name.as_str()
            }
        }
    }

    /// Human-readable description, empty for MCP tools.
    pub fn description(&self) -> &str {
        match self {
            Self::Function { description, .. } | Self::Agent { description, .. } => {
                description.as_str()
            }
            Self::Mcp { .. } => "",
        }
    }

    /// The serialized `kind` tag of this binding.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Function { .. } => "function",
            Self::Mcp { .. } => "mcp",
            Self::Agent { .. } => "agent",
        }
    }
}

impl From<&AgentDescriptor> for ToolBinding {
    fn from(agent: &AgentDescriptor) -> Self {
        Self::agent(agent.name(), agent.description())
    }
}

fn object_schema() -> Schema {
    json_schema!({ "type": "object" })
}

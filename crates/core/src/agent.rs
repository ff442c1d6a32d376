//! Agent declarations.
//!
//! An [`AgentDescriptor`] is pure config: name, target model, description,
//! instruction, and tool bindings. It says *what* an agent is. Sessions,
//! tool handlers, and inference live in the runtime it is registered with.

use crate::{ToolBinding, ValidationError};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A validated, immutable agent declaration.
///
/// The only way to obtain one is through [`AgentBuilder::build`] (or
/// [`create_agent`], or deserialization, which both go through it), so a
/// descriptor always has a name, a model and an instruction, and never
/// holds two tools with the same name. To change an agent, build a new
/// descriptor from [`AgentDescriptor::to_builder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AgentBuilder")]
pub struct AgentDescriptor {
    name: CompactString,
    model: CompactString,
    description: CompactString,
    instruction: String,
    tools: Vec<ToolBinding>,
}

impl AgentDescriptor {
    /// Start declaring an agent with the given name.
    pub fn builder(name: impl Into<CompactString>) -> AgentBuilder {
        AgentBuilder::new(name)
    }

    /// Agent identifier, unique within a registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target model identifier. Opaque here; the runtime resolves it.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Human-readable description, possibly empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Behavioral directive passed to the runtime.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Tool bindings in registration order.
    pub fn tools(&self) -> &[ToolBinding] {
        &self.tools
    }

    /// Look up a tool binding by name.
    pub fn tool(&self, name: &str) -> Option<&ToolBinding> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// A builder seeded with this declaration's fields.
    pub fn to_builder(&self) -> AgentBuilder {
        AgentBuilder {
            name: self.name.clone(),
            model: self.model.clone(),
            description: self.description.clone(),
            instruction: self.instruction.clone(),
            tools: self.tools.clone(),
        }
    }
}

impl TryFrom<AgentBuilder> for AgentDescriptor {
    type Error = ValidationError;

    fn try_from(builder: AgentBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Unvalidated agent fields.
///
/// Also the deserialization shape of a declaration: `name`, `model` and
/// `instruction` are required by [`build`](AgentBuilder::build),
/// `description` and `tools` default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentBuilder {
    name: CompactString,
    model: CompactString,
    description: CompactString,
    instruction: String,
    tools: Vec<ToolBinding>,
}

impl AgentBuilder {
    /// Create a builder for an agent with the given name.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<CompactString>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the target model.
    pub fn model(mut self, model: impl Into<CompactString>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, desc: impl Into<CompactString>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set the instruction.
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Append a tool binding.
    pub fn tool(mut self, tool: ToolBinding) -> Self {
        self.tools.push(tool);
        self
    }

    /// Replace the tool bindings.
    pub fn tools(mut self, tools: Vec<ToolBinding>) -> Self {
        self.tools = tools;
        self
    }

    /// Validate the fields and produce a descriptor.
    ///
    /// Checks run in field order and the first violation is returned.
    pub fn build(self) -> Result<AgentDescriptor, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.model.is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if self.instruction.is_empty() {
            return Err(ValidationError::EmptyInstruction);
        }

        check_tools(&self.tools)?;

        Ok(AgentDescriptor {
            name: self.name,
            model: self.model,
            description: self.description,
            instruction: self.instruction,
            tools: self.tools,
        })
    }
}

/// Declare an agent in one call.
///
/// Equivalent to setting every field on an [`AgentBuilder`] and calling
/// [`build`](AgentBuilder::build). Pure: no I/O and no shared state.
pub fn create_agent(
    name: impl Into<CompactString>,
    model: impl Into<CompactString>,
    description: impl Into<CompactString>,
    instruction: impl Into<String>,
    tools: Vec<ToolBinding>,
) -> Result<AgentDescriptor, ValidationError> {
    AgentBuilder::new(name)
        .model(model)
        .description(description)
        .instruction(instruction)
        .tools(tools)
        .build()
}

/// Every tool needs a non-empty name, and names are unique across kinds.
fn check_tools(tools: &[ToolBinding]) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for (index, tool) in tools.iter().enumerate() {
        let name = tool.name();
        if name.is_empty() {
            return Err(ValidationError::EmptyToolName { index });
        }
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateTool { name: name.into() });
        }
    }
    Ok(())
}

//! In-memory agent registry.

use acore::{AgentDescriptor, Registrar};
use compact_str::CompactString;
use std::collections::BTreeMap;

/// Registered agent declarations, keyed and ordered by name.
///
/// A name is registered at most once. Replacing an agent means building a
/// registry without it; there is no in-place update.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    agents: BTreeMap<CompactString, AgentDescriptor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every agent in order, stopping at the first rejection.
    ///
    /// Agents registered before the failure stay registered.
    pub fn register_all(
        &mut self,
        agents: impl IntoIterator<Item = AgentDescriptor>,
    ) -> anyhow::Result<()> {
        for agent in agents {
            self.register(agent)?;
        }
        Ok(())
    }

    /// Get a registered agent by name.
    pub fn get(&self, name: &str) -> Option<&AgentDescriptor> {
        self.agents.get(name)
    }

    /// Whether an agent with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Registered agents, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &AgentDescriptor> {
        self.agents.values()
    }

    /// Registered agent names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(CompactString::as_str)
    }
}

impl Registrar for Registry {
    type Error = anyhow::Error;

    fn register(&mut self, agent: AgentDescriptor) -> anyhow::Result<()> {
        if self.agents.contains_key(agent.name()) {
            anyhow::bail!("agent '{}' already registered", agent.name());
        }
        tracing::info!("registered agent '{}' ({})", agent.name(), agent.model());
        self.agents.insert(CompactString::from(agent.name()), agent);
        Ok(())
    }
}

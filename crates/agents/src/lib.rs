//! Ad Agency AI agents.
//!
//! The host side of agent declarations:
//!
//! - [`presets`]: the agency's built-in agents, constructed on demand.
//! - [`loader`]: declaration files (markdown with YAML frontmatter, TOML
//!   manifests) parsed into validated descriptors.
//! - [`Registry`]: an in-memory [`Registrar`](acore::Registrar) keyed by
//!   agent name.
//!
//! # Example
//!
//! ```
//! use acore::Registrar;
//! use adagency_agents::{Registry, presets};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut registry = Registry::new();
//!     registry.register(presets::ad_agency_agent()?)?;
//!     assert!(registry.contains("ad_agency_agent"));
//!     Ok(())
//! }
//! ```

pub use {
    loader::{load_agents_dir, load_manifest, parse_agent_md, parse_manifest},
    presets::DEFAULT_MODEL,
    registry::Registry,
};

pub mod loader;
pub mod presets;
mod registry;

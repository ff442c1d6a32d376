//! Startup example: declare the agency and register it.
//!
//! Builds the built-in team, optionally adds agents from a directory of
//! markdown declarations, registers everything, and prints the registered
//! declarations as JSON. Run with:
//! ```sh
//! cargo run -p adagency-agents --example startup -- [agents-dir]
//! ```

use acore::Registrar;
use adagency_agents::{Registry, load_agents_dir, presets};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut registry = Registry::new();
    registry.register_all(presets::ad_agency_team()?)?;

    if let Some(dir) = std::env::args().nth(1) {
        for agent in load_agents_dir(&dir)? {
            registry.register(agent)?;
        }
    }

    for agent in registry.iter() {
        println!("{}", serde_json::to_string_pretty(agent)?);
    }
    Ok(())
}

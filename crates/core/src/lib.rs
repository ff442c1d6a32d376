//! Core agent declaration types.
//!
//! - [`AgentDescriptor`]: immutable declaration (name, model, description,
//!   instruction, tools) handed to an agent runtime.
//! - [`AgentBuilder`] / [`create_agent`]: validating construction.
//! - [`ToolBinding`]: name-identified reference to a runtime capability.
//! - [`Registrar`]: the runtime's registration entry point.

pub use {
    agent::{AgentBuilder, AgentDescriptor, create_agent},
    error::ValidationError,
    registrar::Registrar,
    tool::ToolBinding,
};

mod agent;
mod error;
mod registrar;
mod tool;

//! Registration seam.

use crate::AgentDescriptor;

/// An agent runtime's registration entry point.
///
/// Registration takes ownership of the descriptor. Whatever the runtime
/// does with it afterwards (sessions, tool dispatch, inference) is outside
/// this crate.
pub trait Registrar {
    /// Error returned when the runtime refuses a declaration.
    type Error;

    /// Register an agent declaration.
    fn register(&mut self, agent: AgentDescriptor) -> Result<(), Self::Error>;
}

//! Declaration errors.

use compact_str::CompactString;
use thiserror::Error;

/// Raised when an agent declaration is rejected during construction.
///
/// Validation is all-or-nothing: when this is returned, no
/// [`AgentDescriptor`](crate::AgentDescriptor) exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The agent name is empty.
    #[error("agent name must not be empty")]
    EmptyName,

    /// The model identifier is empty.
    #[error("agent model must not be empty")]
    EmptyModel,

    /// The instruction is empty.
    #[error("agent instruction must not be empty")]
    EmptyInstruction,

    /// A tool binding has an empty name.
    #[error("tool binding at position {index} has an empty name")]
    EmptyToolName {
        /// Position of the binding in the tool list.
        index: usize,
    },

    /// Two tool bindings share a name.
    #[error("duplicate tool binding '{name}'")]
    DuplicateTool {
        /// The repeated tool name.
        name: CompactString,
    },
}

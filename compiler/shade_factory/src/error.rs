//! Contract violations reported by the factory.
//!
//! These signal a bug in the calling transform: a symbol the compiler
//! injected itself is missing, or a variable handed to a temporary helper is
//! not a temporary. They are never produced for malformed shader input;
//! [`zero_node`](crate::zero_node) handles that case by building a
//! placeholder instead of failing.

use shade_ir::{Qualifier, ShaderVersion, VariableId};

/// Misuse of a factory function by its caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("global `{name}` is not declared")]
    MissingGlobal { name: String },

    #[error("builtin `{name}` is not available in shader version {version}")]
    MissingBuiltin {
        name: String,
        version: ShaderVersion,
    },

    #[error("`{name}` resolves to a function, expected a variable")]
    NotAVariable { name: String },

    #[error("`{name}` resolves to a variable, expected a function")]
    NotAFunction { name: String },

    #[error("variable {variable:?} is not an internal temporary")]
    NotInternalTemporary { variable: VariableId },

    #[error("temporary {variable:?} has qualifier {qualifier:?}, expected temporary, const or global")]
    InvalidTemporaryQualifier {
        variable: VariableId,
        qualifier: Qualifier,
    },

    #[error("qualifier {qualifier:?} is not allowed on a temporary, expected temporary, const or global")]
    UnsupportedTemporaryQualifier { qualifier: Qualifier },
}

impl ContractError {
    /// Log the violation and hand it back for returning.
    pub(crate) fn report(self) -> Self {
        tracing::error!(error = %self, "IR factory contract violation");
        self
    }
}

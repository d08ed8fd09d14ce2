//! Typed IR node constructors for Shade AST transforms.
//!
//! Transforms that rewrite the IR tree build their replacement subtrees
//! through this crate, so every synthesised node is correctly typed:
//!
//! - **Constants**: [`zero_node`] for any type, [`index_node`],
//!   [`bool_node`] and friends for scalars
//! - **Temporaries**: [`create_temp`], [`declare_temp`] and the
//!   `temp_*_node` builders for their references, declarations and
//!   assignments
//! - **Structure**: [`ensure_block`], [`function_prototype_node`],
//!   [`function_definition_node`]
//! - **Symbols**: [`reference_global`], [`reference_builtin`],
//!   [`builtin_call`]
//!
//! # Failure modes
//!
//! Constructors are synchronous and keep no state. Two kinds of bad input
//! are handled differently:
//!
//! - A caller bug (missing compiler-declared symbol, a user variable passed
//!   as a temporary) is a [`ContractError`].
//! - A malformed type reached during parser error recovery is not an error:
//!   [`zero_node`] returns a well-typed placeholder.

mod block;
mod builtin;
mod error;
mod function;
mod reference;
mod scalar;
mod temp;
mod zero;

use std::sync::Once;

pub use block::ensure_block;
pub use builtin::builtin_call;
pub use error::ContractError;
pub use function::{function_definition_node, function_prototype_node};
pub use reference::{reference_builtin, reference_global};
pub use scalar::{bool_node, float_node, index_node, uint_node};
pub use temp::{
    create_temp, create_temp_with, declare_temp, declare_temp_init, temp_assignment_node,
    temp_declaration_node, temp_init_declaration_node, temp_symbol_node,
};
pub use zero::{zero_node, RECOVERY_PLACEHOLDER};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=shade_factory=debug`
/// or `RUST_LOG=shade_factory=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

//! Shade IR - Intermediate Representation Types
//!
//! This crate contains the data structures shared by the Shade AST
//! transforms:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Type descriptors (basic kinds, arrays, structs, qualifiers)
//! - IR nodes (blocks, declarations, typed expressions)
//! - The symbol table arena for variables and functions
//! - Mangled function signatures for builtin lookup
//!
//! # Design Philosophy
//!
//! - **Own the tree, index the symbols**: nodes own their children; symbols
//!   live in the [`SymbolTable`] arena and are referenced by `Copy` handles
//!   ([`VariableId`], [`FunctionId`])
//! - **Clone, then modify**: a [`TypeDesc`] is never mutated in place once
//!   shared; the `with_*` methods return adjusted copies
//!
//! Constant floats are stored as `u32` bits so every node is `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod constant;
mod interner;
mod mangle;
mod name;
pub mod node;
mod op;
mod span;
mod symbol;
mod types;

pub use constant::ConstantUnion;
pub use interner::StringInterner;
pub use mangle::{mangled_name, mangled_type};
pub use name::Name;
pub use node::{
    Block, Declaration, Expr, ExprKind, FunctionDefinition, FunctionPrototype, Node,
};
pub use op::Operator;
pub use span::Span;
pub use symbol::{
    Function, FunctionId, ShaderVersion, SymbolId, SymbolKind, SymbolTable, Variable, VariableId,
};
pub use types::{ArraySizes, BasicType, Field, Precision, Qualifier, StructDef, TypeDesc, TypeKind};

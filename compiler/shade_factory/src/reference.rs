//! References to compiler-declared symbols.
//!
//! Transforms use these to reach globals and builtins the compiler itself
//! declared (`gl_FragCoord`, a uniform block it injected, ...). Absence is
//! a caller bug, reported as a [`ContractError`].

use shade_ir::{Expr, ExprKind, ShaderVersion, SymbolId, SymbolTable, Variable};

use crate::ContractError;

/// Reference node for `variable`, typed with the variable's type.
pub(crate) fn variable_reference(variable: &Variable) -> Expr {
    Expr::new(ExprKind::Symbol(variable.id), variable.ty.clone())
}

fn reference_symbol(
    name: &str,
    symbol: Option<SymbolId>,
    table: &SymbolTable,
    missing: impl FnOnce() -> ContractError,
) -> Result<Expr, ContractError> {
    match symbol {
        Some(SymbolId::Variable(id)) => Ok(variable_reference(table.variable(id))),
        Some(SymbolId::Function(_)) => Err(ContractError::NotAVariable {
            name: name.to_owned(),
        }
        .report()),
        None => Err(missing().report()),
    }
}

/// Reference a global variable by name.
pub fn reference_global(name: &str, table: &SymbolTable) -> Result<Expr, ContractError> {
    reference_symbol(name, table.find_global(name), table, || {
        ContractError::MissingGlobal {
            name: name.to_owned(),
        }
    })
}

/// Reference a builtin variable visible at `version`.
pub fn reference_builtin(
    name: &str,
    table: &SymbolTable,
    version: ShaderVersion,
) -> Result<Expr, ContractError> {
    reference_symbol(name, table.find_builtin(name, version), table, || {
        ContractError::MissingBuiltin {
            name: name.to_owned(),
            version,
        }
    })
}

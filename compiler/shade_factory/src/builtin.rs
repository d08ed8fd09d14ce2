//! Synthetic calls to builtin functions.
//!
//! A transform asks for `name(args...)`; the builtin is resolved by the
//! mangled signature of the argument types at the shader version being
//! compiled. Builtins that are primitive unary operations (`sin`, `abs`,
//! `normalize`, ...) come back as [`ExprKind::Unary`] so later passes can
//! match the operator directly; everything else is an
//! [`ExprKind::Aggregate`] call.

use shade_ir::{
    mangled_name, Expr, ExprKind, Function, Qualifier, ShaderVersion, SymbolId, SymbolTable,
};
use tracing::debug;

use crate::ContractError;

fn lookup_builtin_function<'t>(
    name: &str,
    arguments: &[Expr],
    table: &'t SymbolTable,
    version: ShaderVersion,
) -> Result<&'t Function, ContractError> {
    let mangled = mangled_name(name, arguments.iter().map(|arg| &arg.ty));
    match table.find_builtin(&mangled, version) {
        Some(SymbolId::Function(id)) => Ok(table.function(id)),
        Some(SymbolId::Variable(_)) => Err(ContractError::NotAFunction { name: mangled }.report()),
        None => Err(ContractError::MissingBuiltin {
            name: mangled,
            version,
        }
        .report()),
    }
}

/// Build a call to the builtin `name` with `arguments`.
///
/// The result is typed with the builtin's return type.
#[tracing::instrument(level = "debug", skip(arguments, table), fields(args = arguments.len()))]
pub fn builtin_call(
    name: &str,
    arguments: Vec<Expr>,
    table: &SymbolTable,
    version: ShaderVersion,
) -> Result<Expr, ContractError> {
    let function = lookup_builtin_function(name, &arguments, table, version)?;
    let ty = function.return_type.with_qualifier(Qualifier::Temporary);
    let op = function.op;

    let arguments = if op.is_unary() {
        match <[Expr; 1]>::try_from(arguments) {
            Ok([operand]) => {
                debug!(?op, "builtin folds to unary operation");
                return Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                        function: Some(function.id),
                    },
                    ty,
                ));
            }
            Err(arguments) => arguments,
        }
    } else {
        arguments
    };

    debug!(?op, "builtin call");
    Ok(Expr::new(
        ExprKind::Aggregate {
            op,
            args: arguments,
            function: Some(function.id),
        },
        ty,
    ))
}

#[cfg(test)]
mod tests;

//! Internal temporary variables.
//!
//! Transforms introduce temporaries to hold intermediate values: the result
//! of a hoisted expression, a copy that must survive a side effect, a
//! zero-initialised out-parameter. Temporaries are anonymous variables
//! tagged [`SymbolKind::Internal`](shade_ir::SymbolKind::Internal) and carry
//! one of the qualifiers in [`Qualifier::TEMPORARY_QUALIFIERS`].
//!
//! The `temp_*_node` builders check both properties and return
//! [`ContractError`] for variables that were not created here.

use shade_ir::{
    Declaration, Expr, ExprKind, Operator, Qualifier, SymbolTable, TypeDesc, Variable, VariableId,
};

use crate::reference::variable_reference;
use crate::ContractError;

/// Create a temporary of type `ty`.
pub fn create_temp(table: &mut SymbolTable, ty: &TypeDesc) -> VariableId {
    table.new_internal_variable(ty.clone())
}

/// Create a temporary of type `ty` re-qualified as `qualifier`.
pub fn create_temp_with(
    table: &mut SymbolTable,
    ty: &TypeDesc,
    qualifier: Qualifier,
) -> VariableId {
    if ty.qualifier == qualifier {
        return create_temp(table, ty);
    }
    table.new_internal_variable(ty.with_qualifier(qualifier))
}

/// Reference node for a temporary.
pub fn temp_symbol_node(temp: &Variable) -> Result<Expr, ContractError> {
    if !temp.is_internal() {
        return Err(ContractError::NotInternalTemporary { variable: temp.id }.report());
    }
    if !temp.ty.qualifier.is_valid_for_temporary() {
        return Err(ContractError::InvalidTemporaryQualifier {
            variable: temp.id,
            qualifier: temp.ty.qualifier,
        }
        .report());
    }
    Ok(variable_reference(temp))
}

fn check_qualifier(qualifier: Qualifier) -> Result<(), ContractError> {
    if qualifier.is_valid_for_temporary() {
        Ok(())
    } else {
        Err(ContractError::UnsupportedTemporaryQualifier { qualifier }.report())
    }
}

fn binary(op: Operator, left: Expr, right: Expr) -> Expr {
    let ty = left.ty.with_qualifier(Qualifier::Temporary);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        ty,
    )
}

/// `T temp;`
pub fn temp_declaration_node(temp: &Variable) -> Result<Declaration, ContractError> {
    let mut declaration = Declaration::new();
    declaration.push(temp_symbol_node(temp)?);
    Ok(declaration)
}

/// `T temp = initializer;`
pub fn temp_init_declaration_node(
    temp: &Variable,
    initializer: Expr,
) -> Result<Declaration, ContractError> {
    let symbol = temp_symbol_node(temp)?;
    let mut declaration = Declaration::new();
    declaration.push(binary(Operator::Initialize, symbol, initializer));
    Ok(declaration)
}

/// `temp = rhs`
pub fn temp_assignment_node(temp: &Variable, rhs: Expr) -> Result<Expr, ContractError> {
    let symbol = temp_symbol_node(temp)?;
    Ok(binary(Operator::Assign, symbol, rhs))
}

/// Create a temporary of type `ty` with `qualifier` and its bare
/// declaration.
///
/// A rejected `qualifier` leaves `table` untouched.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %ty, ?qualifier))]
pub fn declare_temp(
    table: &mut SymbolTable,
    ty: &TypeDesc,
    qualifier: Qualifier,
) -> Result<(VariableId, Declaration), ContractError> {
    check_qualifier(qualifier)?;
    let id = create_temp_with(table, ty, qualifier);
    let declaration = temp_declaration_node(table.variable(id))?;
    Ok((id, declaration))
}

/// Create a temporary typed like `initializer`, qualified as `qualifier`,
/// and the declaration that initialises it.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %initializer.ty, ?qualifier))]
pub fn declare_temp_init(
    table: &mut SymbolTable,
    initializer: Expr,
    qualifier: Qualifier,
) -> Result<(VariableId, Declaration), ContractError> {
    check_qualifier(qualifier)?;
    let id = create_temp_with(table, &initializer.ty, qualifier);
    let declaration = temp_init_declaration_node(table.variable(id), initializer)?;
    Ok((id, declaration))
}

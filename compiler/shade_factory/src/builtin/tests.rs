use pretty_assertions::assert_eq;
use shade_ir::{BasicType, FunctionId, Operator, TypeDesc};

use super::*;
use crate::{create_temp, float_node, temp_symbol_node, zero_node};

fn float() -> TypeDesc {
    TypeDesc::scalar(BasicType::Float)
}

fn vec(n: u8) -> TypeDesc {
    TypeDesc::vector(BasicType::Float, n)
}

struct Builtins {
    table: SymbolTable,
    sin: FunctionId,
    sin_vec3: FunctionId,
    pow: FunctionId,
    texture: FunctionId,
    dfdx: FunctionId,
    inverse: FunctionId,
}

fn builtins() -> Builtins {
    let mut table = SymbolTable::new();
    let v100 = ShaderVersion::ESSL_100;
    let sin = table.declare_builtin_function("sin", vec![float()], float(), Operator::Sin, v100);
    let sin_vec3 = table.declare_builtin_function("sin", vec![vec(3)], vec(3), Operator::Sin, v100);
    let pow = table.declare_builtin_function(
        "pow",
        vec![float(), float()],
        float(),
        Operator::Pow,
        v100,
    );
    let texture = table.declare_builtin_function(
        "texture",
        vec![TypeDesc::scalar(BasicType::Sampler2D), vec(2)],
        vec(4),
        Operator::CallBuiltInFunction,
        ShaderVersion::ESSL_300,
    );
    let dfdx = table.declare_builtin_function(
        "dFdx",
        vec![float()],
        float(),
        Operator::CallBuiltInFunction,
        v100,
    );
    let inverse = table.declare_builtin_function(
        "inverse",
        vec![TypeDesc::matrix(2, 2)],
        TypeDesc::matrix(2, 2),
        Operator::Inverse,
        ShaderVersion::ESSL_300,
    );
    table.declare_builtin_variable("gl_FragCoord", vec(4), v100);
    Builtins {
        table,
        sin,
        sin_vec3,
        pow,
        texture,
        dfdx,
        inverse,
    }
}

#[test]
fn primitive_unary_builtin_folds_to_unary() {
    let b = builtins();
    let x = float_node(0.25);
    let call = builtin_call("sin", vec![x.clone()], &b.table, ShaderVersion::ESSL_100);
    let Ok(call) = call else {
        panic!("expected call, got {call:?}");
    };
    assert_eq!(
        call.kind,
        ExprKind::Unary {
            op: Operator::Sin,
            operand: Box::new(x),
            function: Some(b.sin),
        }
    );
    assert_eq!(call.ty, float());
}

#[test]
fn overload_is_selected_by_argument_type() {
    let b = builtins();
    let v = zero_node(&vec(3));
    let call = builtin_call("sin", vec![v], &b.table, ShaderVersion::ESSL_100);
    match call.map(|c| c.kind) {
        Ok(ExprKind::Unary { function, .. }) => assert_eq!(function, Some(b.sin_vec3)),
        other => panic!("expected Unary, got {other:?}"),
    }
}

#[test]
fn two_argument_builtin_is_aggregate_in_order() {
    let b = builtins();
    let args = vec![float_node(2.0), float_node(3.0)];
    let call = builtin_call("pow", args.clone(), &b.table, ShaderVersion::ESSL_100);
    let Ok(call) = call else {
        panic!("expected call, got {call:?}");
    };
    assert_eq!(
        call.kind,
        ExprKind::Aggregate {
            op: Operator::Pow,
            args,
            function: Some(b.pow),
        }
    );
}

#[test]
fn generic_single_argument_builtin_stays_a_call() {
    let b = builtins();
    let mut table = b.table;
    let temp = create_temp(&mut table, &float());
    let arg = temp_symbol_node(table.variable(temp));
    let Ok(arg) = arg else {
        panic!("expected symbol, got {arg:?}");
    };
    let call = builtin_call("dFdx", vec![arg.clone()], &table, ShaderVersion::ESSL_300);
    match call.map(|c| c.kind) {
        Ok(ExprKind::Aggregate { op, args, function }) => {
            assert_eq!(op, Operator::CallBuiltInFunction);
            assert_eq!(args, vec![arg]);
            assert_eq!(function, Some(b.dfdx));
        }
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn generic_builtin_call_type_is_return_type() {
    let mut b = builtins();
    b.table
        .declare_global_variable("s_albedo", TypeDesc::scalar(BasicType::Sampler2D));
    let sampler = crate::reference_global("s_albedo", &b.table);
    let Ok(sampler) = sampler else {
        panic!("expected sampler reference, got {sampler:?}");
    };
    let call = builtin_call(
        "texture",
        vec![sampler, zero_node(&vec(2))],
        &b.table,
        ShaderVersion::ESSL_300,
    );
    let Ok(call) = call else {
        panic!("expected call, got {call:?}");
    };
    assert_eq!(call.ty, vec(4));
    assert_eq!(
        call.as_aggregate().map(|(op, args)| (op, args.len())),
        Some((Operator::CallBuiltInFunction, 2))
    );
    assert!(matches!(
        call.kind,
        ExprKind::Aggregate { function: Some(f), .. } if f == b.texture
    ));
}

#[test]
fn builtin_is_version_gated() {
    let b = builtins();
    let m = zero_node(&TypeDesc::matrix(2, 2));
    assert_eq!(
        builtin_call("inverse", vec![m.clone()], &b.table, ShaderVersion::ESSL_100),
        Err(ContractError::MissingBuiltin {
            name: "inverse(f2x2;)".to_owned(),
            version: ShaderVersion::ESSL_100,
        })
    );
    match builtin_call("inverse", vec![m], &b.table, ShaderVersion::ESSL_300).map(|c| c.kind) {
        Ok(ExprKind::Unary { op, function, .. }) => {
            assert_eq!(op, Operator::Inverse);
            assert_eq!(function, Some(b.inverse));
        }
        other => panic!("expected Unary, got {other:?}"),
    }
}

#[test]
fn unknown_signature_is_contract_error() {
    let b = builtins();
    let call = builtin_call(
        "sin",
        vec![float_node(1.0), float_node(2.0)],
        &b.table,
        ShaderVersion::ESSL_320,
    );
    assert_eq!(
        call,
        Err(ContractError::MissingBuiltin {
            name: "sin(f1;f1;)".to_owned(),
            version: ShaderVersion::ESSL_320,
        })
    );
}

#[test]
fn builtin_variable_is_not_callable() {
    let mut table = SymbolTable::new();
    table.declare_builtin_variable("gl_FragCoord()", vec(4), ShaderVersion::ESSL_100);
    assert_eq!(
        builtin_call("gl_FragCoord", vec![], &table, ShaderVersion::ESSL_100),
        Err(ContractError::NotAFunction {
            name: "gl_FragCoord()".to_owned(),
        })
    );
}

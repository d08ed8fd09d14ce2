use super::*;
use crate::{BasicType, Qualifier};
use pretty_assertions::assert_eq;

fn float() -> TypeDesc {
    TypeDesc::scalar(BasicType::Float)
}

#[test]
fn internal_variables_are_distinct() {
    let mut table = SymbolTable::new();
    let a = table.new_internal_variable(float());
    let b = table.new_internal_variable(float());
    assert_ne!(a, b);
    assert!(table.variable(a).is_internal());
    assert!(table.variable(b).is_internal());
    assert_eq!(table.variable(a).name, Name::EMPTY);
    assert_eq!(table.variable_count(), 2);
}

#[test]
fn find_global_variable() {
    let mut table = SymbolTable::new();
    let id = table.declare_global_variable("u_time", float().with_qualifier(Qualifier::Uniform));
    assert_eq!(table.find_global("u_time"), Some(SymbolId::Variable(id)));
    assert_eq!(table.find_global("u_missing"), None);
    assert_eq!(table.name(table.variable(id).name), "u_time");
    assert_eq!(table.variable(id).kind, SymbolKind::UserDefined);
}

#[test]
fn user_functions_are_keyed_by_mangled_name() {
    let mut table = SymbolTable::new();
    let id = table.declare_user_function("shade", vec![float()], float());
    assert_eq!(table.function(id).mangled_name.as_ref(), "shade(f1;)");
    assert_eq!(table.find_global("shade(f1;)"), Some(SymbolId::Function(id)));
    assert_eq!(table.find_global("shade"), None);
    assert_eq!(table.function(id).op, Operator::CallFunctionInAst);
}

#[test]
fn builtin_lookup_is_version_gated() {
    let mut table = SymbolTable::new();
    let id = table.declare_builtin_variable(
        "gl_FragDepth",
        float(),
        ShaderVersion::ESSL_300,
    );
    assert_eq!(table.find_builtin("gl_FragDepth", ShaderVersion::ESSL_100), None);
    assert_eq!(
        table.find_builtin("gl_FragDepth", ShaderVersion::ESSL_300),
        Some(SymbolId::Variable(id))
    );
    assert_eq!(
        table.find_builtin("gl_FragDepth", ShaderVersion::ESSL_320),
        Some(SymbolId::Variable(id))
    );
    // Builtins are not globals.
    assert_eq!(table.find_global("gl_FragDepth"), None);
}

#[test]
fn newest_visible_builtin_wins() {
    let mut table = SymbolTable::new();
    let old = table.declare_builtin_variable(
        "gl_MaxDrawBuffers",
        TypeDesc::scalar(BasicType::Int),
        ShaderVersion::ESSL_100,
    );
    let new = table.declare_builtin_variable(
        "gl_MaxDrawBuffers",
        TypeDesc::scalar(BasicType::Int).with_precision(crate::Precision::Medium),
        ShaderVersion::ESSL_300,
    );
    assert_eq!(
        table.find_builtin("gl_MaxDrawBuffers", ShaderVersion::ESSL_100),
        Some(SymbolId::Variable(old))
    );
    assert_eq!(
        table.find_builtin("gl_MaxDrawBuffers", ShaderVersion::ESSL_310),
        Some(SymbolId::Variable(new))
    );
}

#[test]
fn builtin_functions_resolve_by_signature() {
    let mut table = SymbolTable::new();
    let scalar = table.declare_builtin_function(
        "sin",
        vec![float()],
        float(),
        Operator::Sin,
        ShaderVersion::ESSL_100,
    );
    let vec3 = table.declare_builtin_function(
        "sin",
        vec![TypeDesc::vector(BasicType::Float, 3)],
        TypeDesc::vector(BasicType::Float, 3),
        Operator::Sin,
        ShaderVersion::ESSL_100,
    );
    assert_eq!(
        table.find_builtin("sin(f1;)", ShaderVersion::ESSL_100),
        Some(SymbolId::Function(scalar))
    );
    assert_eq!(
        table.find_builtin("sin(f3;)", ShaderVersion::ESSL_100),
        Some(SymbolId::Function(vec3))
    );
    assert_eq!(table.find_builtin("sin(i1;)", ShaderVersion::ESSL_100), None);
    assert_eq!(table.function(vec3).kind, SymbolKind::BuiltIn);
}

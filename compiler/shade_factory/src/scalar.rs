//! Single-scalar constants.
//!
//! Each constructor returns a `const` non-array scalar with undefined
//! precision.

use shade_ir::{ConstantUnion, Expr, ExprKind, Qualifier, TypeDesc};

fn scalar_node(value: ConstantUnion) -> Expr {
    let ty = TypeDesc::scalar(value.basic_type()).with_qualifier(Qualifier::Const);
    Expr::new(ExprKind::Constant(vec![value]), ty)
}

/// `int` constant, typically an index into an array or vector.
pub fn index_node(index: i32) -> Expr {
    scalar_node(ConstantUnion::Int(index))
}

pub fn bool_node(value: bool) -> Expr {
    scalar_node(ConstantUnion::Bool(value))
}

pub fn uint_node(value: u32) -> Expr {
    scalar_node(ConstantUnion::UInt(value))
}

pub fn float_node(value: f32) -> Expr {
    scalar_node(ConstantUnion::float(value))
}

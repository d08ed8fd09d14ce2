//! Zero-value synthesis.
//!
//! [`zero_node`] builds the constant a variable of a given type holds when
//! it is default-initialised. Scalars, vectors and matrices become a flat
//! constant; arrays and structs become a `Construct` aggregate over the zero
//! values of their elements or fields.
//!
//! # Error recovery
//!
//! The parser keeps going after reporting an error, and may ask for the
//! zero value of a type that has none (a sampler, `void`, an array of
//! `void`). `zero_node` must still return an expression of the right type
//! so type checking can continue, so it never fails:
//!
//! - kinds without a zero value are filled with [`RECOVERY_PLACEHOLDER`]
//! - arrays of `void` lose their dimensions, since there is no `void[]`
//!   constructor

use shade_ir::{BasicType, ConstantUnion, Expr, ExprKind, Operator, Qualifier, TypeDesc, TypeKind};
use tracing::trace;

/// Slot value used for kinds that have no zero. Its only guarantee is that
/// the surrounding expression is well-typed.
pub const RECOVERY_PLACEHOLDER: i32 = 42;

fn zero_slot(basic: BasicType) -> ConstantUnion {
    match basic {
        BasicType::Float => ConstantUnion::float(0.0),
        BasicType::Int => ConstantUnion::Int(0),
        BasicType::UInt => ConstantUnion::UInt(0),
        BasicType::Bool => ConstantUnion::Bool(false),
        BasicType::Void
        | BasicType::Sampler2D
        | BasicType::SamplerCube
        | BasicType::Image2D
        | BasicType::AtomicCounter => {
            tracing::debug!(?basic, "no zero value, using recovery placeholder");
            ConstantUnion::Int(RECOVERY_PLACEHOLDER)
        }
    }
}

fn construct(ty: TypeDesc, args: Vec<Expr>) -> Expr {
    Expr::new(
        ExprKind::Aggregate {
            op: Operator::Construct,
            args,
            function: None,
        },
        ty,
    )
}

/// Build the zero value of `ty`.
///
/// The result's type is `ty` with qualifier [`Qualifier::Const`], except
/// for arrays of `void`, which come back as a bare `void` constant.
#[tracing::instrument(level = "trace", skip_all, fields(ty = %ty))]
pub fn zero_node(ty: &TypeDesc) -> Expr {
    if ty.is_array() && ty.basic_type() == Some(BasicType::Void) {
        tracing::debug!(%ty, "void array, dropping array dimensions");
        return zero_node(&ty.strip_arrays());
    }

    let const_ty = ty.with_qualifier(Qualifier::Const);
    match &ty.kind {
        TypeKind::Basic { basic, .. } => {
            let slot = zero_slot(*basic);
            let count = const_ty.component_count();
            Expr::new(ExprKind::Constant(vec![slot; count]), const_ty)
        }
        TypeKind::Array { size, .. } => {
            let args = ty.element_type().map_or_else(Vec::new, |element| {
                trace!(size, "repeating element zero");
                vec![zero_node(&element); *size as usize]
            });
            construct(const_ty, args)
        }
        TypeKind::Struct(def) => {
            let args = def.fields.iter().map(|field| zero_node(&field.ty)).collect();
            construct(const_ty, args)
        }
    }
}

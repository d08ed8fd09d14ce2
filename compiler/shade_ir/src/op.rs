//! Operator tags for IR expressions and builtin functions.

/// Operator carried by binary, unary and aggregate expressions.
///
/// Builtin functions carry an operator too: [`Operator::CallBuiltInFunction`]
/// means the builtin is emitted as a generic call, any other operator means
/// the builtin is a primitive operation that later passes match directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    // ── Calls and constructors ──────────────────────────────────
    /// Call to a function defined in the shader.
    CallFunctionInAst,
    /// Call to a builtin function without a dedicated operator.
    CallBuiltInFunction,
    /// Constructor: `vec3(...)`, `Light(...)`, `float[2](...)`.
    Construct,

    // ── Unary ───────────────────────────────────────────────────
    Negative,
    LogicalNot,
    BitwiseNot,
    Radians,
    Degrees,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Log,
    Exp2,
    Log2,
    Sqrt,
    InverseSqrt,
    Abs,
    Sign,
    Floor,
    Ceil,
    Fract,
    Length,
    Normalize,
    Transpose,
    Determinant,
    Inverse,

    // ── Binary ──────────────────────────────────────────────────
    /// Initialisation in a declaration: `T x = init`.
    Initialize,
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    IndexDirect,
    Pow,
    Atan2,
    Min,
    Max,
    Dot,
    Cross,
    Distance,
}

impl Operator {
    /// Returns `true` for single-operand primitive operations.
    pub const fn is_unary(self) -> bool {
        matches!(
            self,
            Operator::Negative
                | Operator::LogicalNot
                | Operator::BitwiseNot
                | Operator::Radians
                | Operator::Degrees
                | Operator::Sin
                | Operator::Cos
                | Operator::Tan
                | Operator::Asin
                | Operator::Acos
                | Operator::Atan
                | Operator::Exp
                | Operator::Log
                | Operator::Exp2
                | Operator::Log2
                | Operator::Sqrt
                | Operator::InverseSqrt
                | Operator::Abs
                | Operator::Sign
                | Operator::Floor
                | Operator::Ceil
                | Operator::Fract
                | Operator::Length
                | Operator::Normalize
                | Operator::Transpose
                | Operator::Determinant
                | Operator::Inverse
        )
    }
}

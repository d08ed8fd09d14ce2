//! Scalar constant values.

use std::fmt;

use crate::BasicType;

/// One scalar slot of a constant value.
///
/// Floats are stored as their IEEE-754 bits so constants are `Eq + Hash`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConstantUnion {
    Float(u32),
    Int(i32),
    UInt(u32),
    Bool(bool),
}

impl ConstantUnion {
    #[inline]
    pub fn float(value: f32) -> Self {
        ConstantUnion::Float(value.to_bits())
    }

    /// Float value, if this is a float slot.
    #[inline]
    pub fn as_float(self) -> Option<f32> {
        match self {
            ConstantUnion::Float(bits) => Some(f32::from_bits(bits)),
            _ => None,
        }
    }

    /// Basic kind stored in this slot.
    pub const fn basic_type(self) -> BasicType {
        match self {
            ConstantUnion::Float(_) => BasicType::Float,
            ConstantUnion::Int(_) => BasicType::Int,
            ConstantUnion::UInt(_) => BasicType::UInt,
            ConstantUnion::Bool(_) => BasicType::Bool,
        }
    }

    /// Returns `true` for `0.0`, `-0.0`, `0`, `0u` and `false`.
    pub fn is_zero(self) -> bool {
        match self {
            ConstantUnion::Float(bits) => f32::from_bits(bits) == 0.0,
            ConstantUnion::Int(v) => v == 0,
            ConstantUnion::UInt(v) => v == 0,
            ConstantUnion::Bool(v) => !v,
        }
    }
}

impl fmt::Debug for ConstantUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantUnion::Float(bits) => write!(f, "{:?}f", f32::from_bits(*bits)),
            ConstantUnion::Int(v) => write!(f, "{v}"),
            ConstantUnion::UInt(v) => write!(f, "{v}u"),
            ConstantUnion::Bool(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_roundtrip_bits() {
        let c = ConstantUnion::float(1.5);
        assert_eq!(c.as_float(), Some(1.5));
        assert_eq!(ConstantUnion::Int(1).as_float(), None);
        assert_eq!(c.basic_type(), BasicType::Float);
    }

    #[test]
    fn test_is_zero() {
        assert!(ConstantUnion::float(0.0).is_zero());
        assert!(ConstantUnion::float(-0.0).is_zero());
        assert!(ConstantUnion::Int(0).is_zero());
        assert!(ConstantUnion::UInt(0).is_zero());
        assert!(ConstantUnion::Bool(false).is_zero());
        assert!(!ConstantUnion::Int(42).is_zero());
        assert!(!ConstantUnion::Bool(true).is_zero());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", ConstantUnion::UInt(3)), "3u");
        assert_eq!(format!("{:?}", ConstantUnion::float(0.0)), "0.0f");
    }
}

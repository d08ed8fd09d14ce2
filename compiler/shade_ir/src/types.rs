//! Type descriptors.
//!
//! A [`TypeDesc`] describes the type of a value: its basic kind and
//! vector/matrix shape, struct layout, array dimensions, precision and
//! storage qualifier. Type descriptors are values; transforms that need a
//! different qualifier or the element type of an array build a new
//! descriptor with the `with_*`/`element_type` helpers instead of mutating a
//! shared one.
//!
//! # Shape
//!
//! [`TypeKind`] is a tagged union:
//!
//! - [`TypeKind::Basic`]: scalars, vectors and matrices of a [`BasicType`]
//! - [`TypeKind::Struct`]: a user struct with an ordered field list
//! - [`TypeKind::Array`]: a sized array of another kind; nested arrays nest
//!   the variant, outermost dimension first

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// Array dimensions, outermost first.
pub type ArraySizes = SmallVec<[u32; 2]>;

/// Basic (non-aggregate) type tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BasicType {
    Void,
    Float,
    Int,
    UInt,
    Bool,
    Sampler2D,
    SamplerCube,
    Image2D,
    AtomicCounter,
}

impl BasicType {
    /// Returns `true` for kinds that have a numeric zero value.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            BasicType::Float | BasicType::Int | BasicType::UInt | BasicType::Bool
        )
    }

    /// Source-level keyword for the scalar form of this kind.
    pub const fn keyword(self) -> &'static str {
        match self {
            BasicType::Void => "void",
            BasicType::Float => "float",
            BasicType::Int => "int",
            BasicType::UInt => "uint",
            BasicType::Bool => "bool",
            BasicType::Sampler2D => "sampler2D",
            BasicType::SamplerCube => "samplerCube",
            BasicType::Image2D => "image2D",
            BasicType::AtomicCounter => "atomic_uint",
        }
    }

    /// Prefix used for vector keywords (`vec`, `ivec`, `uvec`, `bvec`).
    const fn vector_prefix(self) -> &'static str {
        match self {
            BasicType::Int => "i",
            BasicType::UInt => "u",
            BasicType::Bool => "b",
            _ => "",
        }
    }
}

/// Precision qualifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    #[default]
    Undefined,
    Low,
    Medium,
    High,
}

impl Precision {
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Precision::Undefined => None,
            Precision::Low => Some("lowp"),
            Precision::Medium => Some("mediump"),
            Precision::High => Some("highp"),
        }
    }
}

/// Storage qualifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Qualifier {
    /// Function-local value with no storage qualifier.
    #[default]
    Temporary,
    /// Module-scope variable with no storage qualifier.
    Global,
    /// Compile-time constant.
    Const,
    Uniform,
    Attribute,
    VaryingIn,
    VaryingOut,
    ParamIn,
    ParamOut,
    ParamInOut,
    ParamConst,
}

impl Qualifier {
    /// Qualifiers an internal temporary is allowed to carry.
    pub const TEMPORARY_QUALIFIERS: [Qualifier; 3] =
        [Qualifier::Temporary, Qualifier::Const, Qualifier::Global];

    /// Returns `true` if an internal temporary may carry this qualifier.
    #[inline]
    pub fn is_valid_for_temporary(self) -> bool {
        Self::TEMPORARY_QUALIFIERS.contains(&self)
    }

    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Qualifier::Temporary | Qualifier::Global => None,
            Qualifier::Const => Some("const"),
            Qualifier::Uniform => Some("uniform"),
            Qualifier::Attribute => Some("attribute"),
            Qualifier::VaryingIn | Qualifier::ParamIn => Some("in"),
            Qualifier::VaryingOut | Qualifier::ParamOut => Some("out"),
            Qualifier::ParamInOut => Some("inout"),
            Qualifier::ParamConst => Some("const in"),
        }
    }
}

/// A named struct field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: Box<str>,
    pub ty: TypeDesc,
}

impl Field {
    pub fn new(name: &str, ty: TypeDesc) -> Self {
        Field {
            name: Box::from(name),
            ty,
        }
    }
}

/// A struct definition: name plus fields in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructDef {
    pub name: Box<str>,
    pub fields: Vec<Field>,
}

impl StructDef {
    pub fn new(name: &str, fields: Vec<Field>) -> Self {
        StructDef {
            name: Box::from(name),
            fields,
        }
    }
}

/// Structural shape of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Scalar (`cols == rows == 1`), vector (`rows == 1`) or matrix.
    Basic { basic: BasicType, cols: u8, rows: u8 },
    /// Struct; the definition is shared between every type that names it.
    Struct(Rc<StructDef>),
    /// Sized array of `element`.
    Array { element: Box<TypeKind>, size: u32 },
}

impl TypeKind {
    /// Innermost non-array kind.
    pub fn leaf(&self) -> &TypeKind {
        let mut kind = self;
        while let TypeKind::Array { element, .. } = kind {
            kind = element;
        }
        kind
    }

    /// Number of scalar components in a value of this kind.
    pub fn component_count(&self) -> usize {
        match self {
            TypeKind::Basic { cols, rows, .. } => usize::from(*cols) * usize::from(*rows),
            TypeKind::Struct(def) => def.fields.iter().map(|f| f.ty.component_count()).sum(),
            TypeKind::Array { element, size } => {
                element.component_count().saturating_mul(*size as usize)
            }
        }
    }
}

/// Full type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDesc {
    pub kind: TypeKind,
    pub precision: Precision,
    pub qualifier: Qualifier,
}

impl TypeDesc {
    /// Create a descriptor with undefined precision and `Temporary` qualifier.
    pub const fn new(kind: TypeKind) -> Self {
        TypeDesc {
            kind,
            precision: Precision::Undefined,
            qualifier: Qualifier::Temporary,
        }
    }

    /// Scalar of the given kind.
    pub const fn scalar(basic: BasicType) -> Self {
        Self::new(TypeKind::Basic {
            basic,
            cols: 1,
            rows: 1,
        })
    }

    /// Vector of `size` components.
    pub const fn vector(basic: BasicType, size: u8) -> Self {
        Self::new(TypeKind::Basic {
            basic,
            cols: size,
            rows: 1,
        })
    }

    /// Float matrix with `cols` columns and `rows` rows.
    pub const fn matrix(cols: u8, rows: u8) -> Self {
        Self::new(TypeKind::Basic {
            basic: BasicType::Float,
            cols,
            rows,
        })
    }

    /// Struct type.
    pub fn structure(def: Rc<StructDef>) -> Self {
        Self::new(TypeKind::Struct(def))
    }

    /// Copy of this type with a different qualifier.
    #[must_use]
    pub fn with_qualifier(&self, qualifier: Qualifier) -> Self {
        TypeDesc {
            qualifier,
            ..self.clone()
        }
    }

    /// Copy of this type with a different precision.
    #[must_use]
    pub fn with_precision(&self, precision: Precision) -> Self {
        TypeDesc {
            precision,
            ..self.clone()
        }
    }

    /// Array of `size` elements of this type; the new dimension becomes the
    /// outermost one.
    #[must_use]
    pub fn array_of(&self, size: u32) -> Self {
        TypeDesc {
            kind: TypeKind::Array {
                element: Box::new(self.kind.clone()),
                size,
            },
            ..self.clone()
        }
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array { .. })
    }

    /// Basic kind of the innermost element, or `None` if it is a struct.
    pub fn basic_type(&self) -> Option<BasicType> {
        match self.kind.leaf() {
            TypeKind::Basic { basic, .. } => Some(*basic),
            _ => None,
        }
    }

    /// Array dimensions, outermost first. Empty for non-arrays.
    pub fn array_sizes(&self) -> ArraySizes {
        let mut sizes = ArraySizes::new();
        let mut kind = &self.kind;
        while let TypeKind::Array { element, size } = kind {
            sizes.push(*size);
            kind = element;
        }
        sizes
    }

    /// Element type of an array, with one dimension removed.
    pub fn element_type(&self) -> Option<TypeDesc> {
        match &self.kind {
            TypeKind::Array { element, .. } => Some(TypeDesc {
                kind: (**element).clone(),
                ..self.clone()
            }),
            _ => None,
        }
    }

    /// Copy of this type with every array dimension removed.
    #[must_use]
    pub fn strip_arrays(&self) -> Self {
        TypeDesc {
            kind: self.kind.leaf().clone(),
            ..self.clone()
        }
    }

    /// Number of scalar components in a value of this type.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.kind.component_count()
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Basic {
                basic,
                cols: 1,
                rows: 1,
            } => f.write_str(basic.keyword()),
            TypeKind::Basic { basic, cols, rows: 1 } => {
                write!(f, "{}vec{cols}", basic.vector_prefix())
            }
            TypeKind::Basic { cols, rows, .. } if cols == rows => write!(f, "mat{cols}"),
            TypeKind::Basic { cols, rows, .. } => write!(f, "mat{cols}x{rows}"),
            TypeKind::Struct(def) => f.write_str(&def.name),
            TypeKind::Array { element, size } => {
                let leaf = self.leaf();
                write!(f, "{leaf}[{size}]")?;
                let mut kind = &**element;
                while let TypeKind::Array { element, size } = kind {
                    write!(f, "[{size}]")?;
                    kind = element;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(q) = self.qualifier.keyword() {
            write!(f, "{q} ")?;
        }
        if let Some(p) = self.precision.keyword() {
            write!(f, "{p} ")?;
        }
        write!(f, "{}", self.kind)
    }
}

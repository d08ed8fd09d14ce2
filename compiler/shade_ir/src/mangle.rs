//! Mangled function signatures.
//!
//! Builtin and user functions are looked up by a key that combines the
//! function name with the types of its arguments, so overloads such as
//! `sin(float)` and `sin(vec3)` resolve to different symbols. Precision and
//! qualifiers never take part in the key.
//!
//! Layout: `name(` + one code per argument, each followed by `;` + `)`.
//! `sin(vec3)` mangles to `sin(f3;)`, `max(ivec2, int[4])` to
//! `max(i2;i1[4];)`.

use crate::{BasicType, TypeDesc, TypeKind};

fn basic_code(basic: BasicType) -> &'static str {
    match basic {
        BasicType::Void => "v",
        BasicType::Float => "f",
        BasicType::Int => "i",
        BasicType::UInt => "u",
        BasicType::Bool => "b",
        BasicType::Sampler2D => "S2D",
        BasicType::SamplerCube => "SCube",
        BasicType::Image2D => "I2D",
        BasicType::AtomicCounter => "AC",
    }
}

/// Code of the innermost element kind. Array layers are skipped here and
/// appended by [`write_type`].
fn write_element(kind: &TypeKind, out: &mut String) {
    match kind {
        TypeKind::Basic { basic, cols, rows } => {
            out.push_str(basic_code(*basic));
            if basic.is_numeric() {
                out.push_str(&cols.to_string());
                if *rows > 1 {
                    out.push('x');
                    out.push_str(&rows.to_string());
                }
            }
        }
        TypeKind::Struct(def) => {
            out.push('{');
            out.push_str(&def.name);
            out.push('}');
        }
        TypeKind::Array { element, .. } => write_element(element, out),
    }
}

fn write_type(ty: &TypeDesc, out: &mut String) {
    write_element(&ty.kind, out);
    for size in ty.array_sizes() {
        out.push('[');
        out.push_str(&size.to_string());
        out.push(']');
    }
}

/// Mangled code for a single type.
pub fn mangled_type(ty: &TypeDesc) -> String {
    let mut out = String::new();
    write_type(ty, &mut out);
    out
}

/// Mangled lookup key for a call of `name` with arguments of the given types.
pub fn mangled_name<'a>(name: &str, args: impl IntoIterator<Item = &'a TypeDesc>) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    out.push_str(name);
    out.push('(');
    for ty in args {
        write_type(ty, &mut out);
        out.push(';');
    }
    out.push(')');
    out
}

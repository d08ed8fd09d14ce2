//! Symbol table arena.
//!
//! Owns every [`Variable`] and [`Function`] symbol of a compilation unit.
//! IR nodes never own symbols; they hold [`VariableId`]/[`FunctionId`]
//! handles into this arena. Handles are only meaningful for the table that
//! issued them.
//!
//! # Lookup
//!
//! - Globals (user variables and user functions) are keyed by plain name
//!   for variables and by mangled name for functions.
//! - Builtins are version-gated: each declaration records the first
//!   [`ShaderVersion`] that exposes it, and [`SymbolTable::find_builtin`]
//!   returns the newest declaration visible at the requested version.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{mangled_name, Name, Operator, StringInterner, TypeDesc};

// ── ID newtypes ─────────────────────────────────────────────────────

/// Index of a variable in a [`SymbolTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VariableId(u32);

impl VariableId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a function in a [`SymbolTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FunctionId(u32);

impl FunctionId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result of a name lookup: either kind of symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolId {
    Variable(VariableId),
    Function(FunctionId),
}

/// Where a symbol came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Declared by the compiler's builtin prelude.
    BuiltIn,
    /// Declared in shader source.
    UserDefined,
    /// Synthesised by a transform (temporaries, helper functions).
    Internal,
}

/// Shading language version, e.g. `100` for ESSL 1.00.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ShaderVersion(pub u16);

impl ShaderVersion {
    pub const ESSL_100: ShaderVersion = ShaderVersion(100);
    pub const ESSL_300: ShaderVersion = ShaderVersion(300);
    pub const ESSL_310: ShaderVersion = ShaderVersion(310);
    pub const ESSL_320: ShaderVersion = ShaderVersion(320);
}

impl fmt::Display for ShaderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Symbols ─────────────────────────────────────────────────────────

/// A variable symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub id: VariableId,
    /// `Name::EMPTY` for internal temporaries.
    pub name: Name,
    pub ty: TypeDesc,
    pub kind: SymbolKind,
}

impl Variable {
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind == SymbolKind::Internal
    }
}

/// A function symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub id: FunctionId,
    pub name: Name,
    /// Lookup key: name plus parameter type codes.
    pub mangled_name: Box<str>,
    pub params: Vec<TypeDesc>,
    pub return_type: TypeDesc,
    /// `CallBuiltInFunction` unless the function is a primitive operation.
    pub op: Operator,
    pub kind: SymbolKind,
}

// ── Table ───────────────────────────────────────────────────────────

/// Arena and name index for every symbol of one compilation unit.
#[derive(Debug, Default)]
pub struct SymbolTable {
    interner: StringInterner,
    variables: Vec<Variable>,
    functions: Vec<Function>,
    globals: FxHashMap<Name, SymbolId>,
    /// Builtin declarations per key, with the first version exposing each.
    builtins: FxHashMap<Name, Vec<(ShaderVersion, SymbolId)>>,
}

#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("symbol table exceeded u32::MAX {what}"))
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a symbol name.
    #[inline]
    pub fn name(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Get a variable by handle.
    ///
    /// # Panics
    /// Panics if `id` was issued by another table.
    #[inline]
    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.index()]
    }

    /// Get a function by handle.
    ///
    /// # Panics
    /// Panics if `id` was issued by another table.
    #[inline]
    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.index()]
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    fn push_variable(&mut self, name: Name, ty: TypeDesc, kind: SymbolKind) -> VariableId {
        let id = VariableId::new(to_u32(self.variables.len(), "variables"));
        self.variables.push(Variable { id, name, ty, kind });
        id
    }

    /// Push a function and return its handle plus the interned mangled name.
    fn push_function(
        &mut self,
        name: &str,
        params: Vec<TypeDesc>,
        return_type: TypeDesc,
        op: Operator,
        kind: SymbolKind,
    ) -> (FunctionId, Name) {
        let id = FunctionId::new(to_u32(self.functions.len(), "functions"));
        let mangled = mangled_name(name, params.iter());
        let key = self.interner.intern(&mangled);
        let name = self.interner.intern(name);
        self.functions.push(Function {
            id,
            name,
            mangled_name: mangled.into_boxed_str(),
            params,
            return_type,
            op,
            kind,
        });
        (id, key)
    }

    /// Allocate a fresh anonymous variable tagged [`SymbolKind::Internal`].
    ///
    /// Every call returns a new handle, even for identical types.
    pub fn new_internal_variable(&mut self, ty: TypeDesc) -> VariableId {
        self.push_variable(Name::EMPTY, ty, SymbolKind::Internal)
    }

    /// Declare a user variable at global scope. A later declaration with the
    /// same name shadows the earlier one.
    pub fn declare_global_variable(&mut self, name: &str, ty: TypeDesc) -> VariableId {
        let interned = self.interner.intern(name);
        let id = self.push_variable(interned, ty, SymbolKind::UserDefined);
        self.globals.insert(interned, SymbolId::Variable(id));
        id
    }

    /// Declare a user function at global scope, keyed by its mangled name.
    pub fn declare_user_function(
        &mut self,
        name: &str,
        params: Vec<TypeDesc>,
        return_type: TypeDesc,
    ) -> FunctionId {
        let (id, key) = self.push_function(
            name,
            params,
            return_type,
            Operator::CallFunctionInAst,
            SymbolKind::UserDefined,
        );
        self.globals.insert(key, SymbolId::Function(id));
        id
    }

    /// Declare a builtin variable visible from `since` onwards.
    pub fn declare_builtin_variable(
        &mut self,
        name: &str,
        ty: TypeDesc,
        since: ShaderVersion,
    ) -> VariableId {
        let interned = self.interner.intern(name);
        let id = self.push_variable(interned, ty, SymbolKind::BuiltIn);
        self.builtins
            .entry(interned)
            .or_default()
            .push((since, SymbolId::Variable(id)));
        id
    }

    /// Declare a builtin function visible from `since` onwards, keyed by its
    /// mangled name.
    pub fn declare_builtin_function(
        &mut self,
        name: &str,
        params: Vec<TypeDesc>,
        return_type: TypeDesc,
        op: Operator,
        since: ShaderVersion,
    ) -> FunctionId {
        let (id, key) = self.push_function(name, params, return_type, op, SymbolKind::BuiltIn);
        self.builtins
            .entry(key)
            .or_default()
            .push((since, SymbolId::Function(id)));
        id
    }

    /// Look up a global by name (variables) or mangled name (functions).
    pub fn find_global(&self, name: &str) -> Option<SymbolId> {
        let name = self.interner.get(name)?;
        self.globals.get(&name).copied()
    }

    /// Look up a builtin by name (variables) or mangled name (functions),
    /// returning the newest declaration visible at `version`.
    pub fn find_builtin(&self, name: &str, version: ShaderVersion) -> Option<SymbolId> {
        let name = self.interner.get(name)?;
        self.builtins
            .get(&name)?
            .iter()
            .filter(|(since, _)| *since <= version)
            .max_by_key(|(since, _)| *since)
            .map(|&(_, symbol)| symbol)
    }
}

#[cfg(test)]
mod tests;

//! String interner for symbol names.
//!
//! Owned by the [`SymbolTable`](crate::SymbolTable); interning happens while
//! symbols are declared, lookups happen while transforms resolve them.

use super::Name;
use rustc_hash::FxHashMap;

/// Interner mapping strings to [`Name`]s.
///
/// Index 0 is always the empty string.
pub struct StringInterner {
    /// Map from string content to its name.
    map: FxHashMap<Box<str>, Name>,
    /// Storage for string contents, indexed by `Name::index`.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let mut map: FxHashMap<Box<str>, Name> = FxHashMap::default();
        map.insert(Box::from(""), Name::EMPTY);
        Self {
            map,
            strings: vec![Box::from("")],
        }
    }

    /// Intern a string, returning the existing name if already present.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let index = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded {} strings", u32::MAX));
        let name = Name::from_raw(index);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        name
    }

    /// Look up a string without interning it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Resolve a name back to its string.
    ///
    /// Names from another interner resolve to the empty string.
    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.strings.len())
            .finish()
    }
}

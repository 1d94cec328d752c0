use crate::types::InputKind;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// A closed mapping from scalar type names to the [`InputKind`] used to
/// render arguments of that type.
///
/// Only a bare named type is looked up: `Int` maps to its entry, while `Int!`
/// and `[Int]` map to the fallback kind just like names with no entry in the
/// table. The fallback is [`InputKind::Text`] unless replaced via
/// [`InputKindTable::with_fallback`].
///
/// The default table contains:
///
/// | scalar            | kind                         |
/// |-------------------|------------------------------|
/// | `Int`             | [`InputKind::Number`]        |
/// | `ISO8601DateTime` | [`InputKind::DateTimeLocal`] |
#[derive(Clone, Debug, PartialEq)]
pub struct InputKindTable {
    fallback: InputKind,
    mappings: IndexMap<String, InputKind>,
}
impl InputKindTable {
    /// An empty table: every type maps to [`InputKind::Text`].
    pub fn empty() -> Self {
        Self {
            fallback: InputKind::Text,
            mappings: IndexMap::new(),
        }
    }

    pub fn fallback(&self) -> InputKind {
        self.fallback
    }

    /// Look up the explicit mapping for a scalar name (if there is one).
    pub fn get(&self, scalar_name: &str) -> Option<InputKind> {
        self.mappings.get(scalar_name).copied()
    }

    /// Add (or replace) the mapping for a scalar name.
    pub fn insert(&mut self, scalar_name: impl Into<String>, kind: InputKind) {
        self.mappings.insert(scalar_name.into(), kind);
    }

    pub fn kind_for(&self, type_ref: &TypeRef) -> InputKind {
        match type_ref {
            TypeRef::Named(name) => self.get(name).unwrap_or(self.fallback),
            TypeRef::List(_) | TypeRef::NonNull(_) => self.fallback,
        }
    }

    /// Iterate the scalar names that have an explicit mapping, in insertion
    /// order.
    pub fn scalar_names(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }

    pub fn with_fallback(mut self, fallback: InputKind) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_mapping(
        mut self,
        scalar_name: impl Into<String>,
        kind: InputKind,
    ) -> Self {
        self.insert(scalar_name, kind);
        self
    }
}
impl std::default::Default for InputKindTable {
    fn default() -> Self {
        Self::empty()
            .with_mapping("Int", InputKind::Number)
            .with_mapping("ISO8601DateTime", InputKind::DateTimeLocal)
    }
}

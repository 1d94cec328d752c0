use crate::ast;

/// A possibly-nested reference to a GraphQL type, as written on an argument,
/// variable, or field definition (e.g. `[String!]!`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(String),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    pub fn from_ast(ast_type: &ast::schema::Type) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast(inner))),

            ast::schema::Type::NamedType(name) =>
                Self::Named(name.to_owned()),

            ast::schema::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast(inner))),
        }
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Recursively unwrap list and non-null wrappers and return the name of
    /// the inner-most named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name(),
            Self::Named(name) => name.as_str(),
        }
    }

    /// Indicates if this is a list type once any outer non-null wrapper is
    /// removed.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable_inner(), Self::List(_))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Strip the outer non-null wrapper (if there is one).
    pub fn nullable_inner(&self) -> &TypeRef {
        match self {
            Self::NonNull(inner) => inner,
            _ => self,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
impl std::convert::From<&ast::schema::Type> for TypeRef {
    fn from(value: &ast::schema::Type) -> Self {
        Self::from_ast(value)
    }
}

/// Render a parsed type annotation the way it would be written in GraphQL
/// source (e.g. `[Int!]`), without building an intermediate [`TypeRef`].
pub fn resolve_type(ast_type: &ast::schema::Type) -> String {
    match ast_type {
        ast::schema::Type::ListType(inner) => format!("[{}]", resolve_type(inner)),
        ast::schema::Type::NamedType(name) => name.to_owned(),
        ast::schema::Type::NonNullType(inner) => resolve_type(inner) + "!",
    }
}

use crate::ast;
use crate::loc;
use crate::mutation::default_value;
use crate::types::TypeRef;
use std::path::Path;

/// Represents one argument declared on a [`MutationField`](crate::mutation::MutationField).
#[derive(Clone, Debug, PartialEq)]
pub struct MutationArgument {
    pub(super) def_location: loc::FilePosition,
    pub(super) default_value: Option<serde_json::Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_ref: TypeRef,
}
impl MutationArgument {
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        input_value: &ast::schema::InputValue,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(
                file_path,
                input_value.position,
            ),
            default_value: input_value.default_value
                .as_ref()
                .map(default_value::value_to_json),
            description: input_value.description.to_owned(),
            name: input_value.name.to_owned(),
            type_ref: TypeRef::from_ast(&input_value.value_type),
        }
    }

    /// The [`FilePosition`](loc::FilePosition) indicating where this argument
    /// was defined within the fragment.
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// The default value declared for this argument (e.g. `count: Int = 10`),
    /// converted to JSON.
    pub fn default_value(&self) -> Option<&serde_json::Value> {
        self.default_value.as_ref()
    }

    /// The description of this argument as defined in the fragment (e.g. in a
    /// `"""`-string immediately before the argument definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Indicates if a value must be provided for this argument when
    /// submitting the mutation.
    pub fn is_required(&self) -> bool {
        self.type_ref.is_non_null() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The canonical GraphQL rendering of this argument's type (e.g.
    /// `[String]!`).
    pub fn resolved_type(&self) -> String {
        self.type_ref.to_graphql_string()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}

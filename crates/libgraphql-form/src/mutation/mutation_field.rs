use crate::ast;
use crate::loc;
use crate::mutation::MutationArgument;
use crate::types::TypeRef;
use std::path::Path;

/// The single field declared on a fragment's `Mutation` type, along with its
/// arguments in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationField {
    pub(super) arguments: Vec<MutationArgument>,
    pub(super) def_location: loc::FilePosition,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) return_type: TypeRef,
}
impl MutationField {
    pub fn from_ast(file_path: Option<&Path>, field: &ast::schema::Field) -> Self {
        Self {
            arguments: field.arguments
                .iter()
                .map(|input_value| MutationArgument::from_ast(file_path, input_value))
                .collect(),
            def_location: loc::FilePosition::from_pos(file_path, field.position),
            description: field.description.to_owned(),
            name: field.name.to_owned(),
            return_type: TypeRef::from_ast(&field.field_type),
        }
    }

    /// Look up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&MutationArgument> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }

    pub fn arguments(&self) -> &[MutationArgument] {
        self.arguments.as_slice()
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }
}

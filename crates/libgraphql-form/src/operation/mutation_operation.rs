use crate::ast;
use crate::mutation::MutationField;
use crate::operation::OperationVariable;
use crate::types::InputKindTable;
use crate::types::TypeRef;
use convert_case::Case;
use convert_case::Casing;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, MutationOperationBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// A `mutation` operation that selects a single root field, either parsed
/// from an operation document or generated from a [`MutationField`].
#[derive(Clone, Debug, PartialEq)]
pub struct MutationOperation {
    /// Maps each root-field argument that is passed a variable to that
    /// variable's name.
    pub(super) argument_variables: IndexMap<String, String>,
    pub(super) field_name: String,
    pub(super) name: Option<String>,
    pub(super) source: String,
    pub(super) variables: Vec<OperationVariable>,
}
impl MutationOperation {
    /// The name of the variable passed to the given root-field argument, if
    /// that argument is bound to a variable.
    pub fn argument_variable(&self, argument_name: &str) -> Option<&str> {
        self.argument_variables.get(argument_name).map(String::as_str)
    }

    pub fn argument_variables(&self) -> &IndexMap<String, String> {
        &self.argument_variables
    }

    /// Verify that this operation selects `field` and only passes arguments
    /// that `field` declares.
    pub fn check_against(&self, field: &MutationField) -> Result<()> {
        if self.field_name != field.name() {
            return Err(MutationOperationBuildError::FieldNameMismatch {
                expected: field.name().to_string(),
                found: self.field_name.to_owned(),
            });
        }

        for argument_name in self.argument_variables.keys() {
            if field.argument(argument_name).is_none() {
                return Err(MutationOperationBuildError::UnknownArgument {
                    argument_name: argument_name.to_owned(),
                    field_name: field.name().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    /// Parse a document containing exactly one `mutation` operation that
    /// selects exactly one root field. Fragment definitions are not
    /// supported.
    pub fn from_str(content: impl AsRef<str>) -> Result<Self> {
        let content = content.as_ref();
        let ast_doc =
            ast::operation::parse::<String>(content)
                .map_err(|err| MutationOperationBuildError::ParseError(err.to_string()))?
                .into_static();

        let mut op_defs = vec![];
        for def in ast_doc.definitions {
            match def {
                ast::operation::Definition::Operation(op_def) => op_defs.push(op_def),
                ast::operation::Definition::Fragment(_) =>
                    return Err(MutationOperationBuildError::FragmentsNotSupported),
            }
        }

        let op_def = match op_defs.len() {
            0 => return Err(MutationOperationBuildError::NoOperations),
            1 => op_defs.remove(0),
            found => return Err(MutationOperationBuildError::MultipleOperations {
                found,
            }),
        };

        let mutation = match op_def {
            ast::operation::OperationDefinition::Mutation(mutation) => mutation,
            ast::operation::OperationDefinition::Query(_)
            | ast::operation::OperationDefinition::SelectionSet(_) =>
                return Err(MutationOperationBuildError::NotAMutation {
                    kind: "query",
                }),
            ast::operation::OperationDefinition::Subscription(_) =>
                return Err(MutationOperationBuildError::NotAMutation {
                    kind: "subscription",
                }),
        };

        Self::from_ast(content, mutation)
    }

    fn from_ast(content: &str, mutation: ast::operation::Mutation) -> Result<Self> {
        let root_field = match mutation.selection_set.items.as_slice() {
            [ast::operation::Selection::Field(field)] => field,
            items => return Err(MutationOperationBuildError::RootFieldCount {
                found: items.len(),
            }),
        };

        let variables = mutation.variable_definitions
            .iter()
            .map(|var_def| OperationVariable {
                has_default: var_def.default_value.is_some(),
                name: var_def.name.to_owned(),
                type_ref: TypeRef::from_ast(&var_def.var_type),
            })
            .collect::<Vec<_>>();

        let mut argument_variables = IndexMap::new();
        for (argument_name, value) in &root_field.arguments {
            if let ast::operation::Value::Variable(var_name) = value {
                if !variables.iter().any(|var| &var.name == var_name) {
                    return Err(MutationOperationBuildError::UndeclaredVariable {
                        variable_name: var_name.to_owned(),
                    });
                }
                argument_variables.insert(argument_name.to_owned(), var_name.to_owned());
            }
        }

        Ok(Self {
            argument_variables,
            field_name: root_field.name.to_owned(),
            name: mutation.name.to_owned(),
            source: content.to_string(),
            variables,
        })
    }

    /// Generate an operation, named after `field` in PascalCase, that passes
    /// every argument of `field` through a variable of the same name.
    ///
    /// Variables for arguments that declare a default are nullable so they may
    /// be omitted. If the field's return type isn't a built-in scalar or a
    /// scalar named in `input_kinds`, `__typename` is selected from it.
    pub fn generate(field: &MutationField, input_kinds: &InputKindTable) -> Self {
        let name = field.name().to_case(Case::Pascal);
        let variables = field.arguments()
            .iter()
            .map(|arg| OperationVariable {
                has_default: false,
                name: arg.name().to_string(),
                type_ref:
                    if arg.default_value().is_some() {
                        arg.type_ref().nullable_inner().to_owned()
                    } else {
                        arg.type_ref().to_owned()
                    },
            })
            .collect::<Vec<_>>();

        let mut source = format!("mutation {name}");
        if !variables.is_empty() {
            let var_defs = variables.iter()
                .map(|var| format!("${}: {}", var.name, var.type_ref))
                .collect::<Vec<_>>()
                .join(", ");
            source.push_str(&format!("({var_defs})"));
        }
        source.push_str(&format!(" {{\n  {}", field.name()));
        if !variables.is_empty() {
            let args = variables.iter()
                .map(|var| format!("{0}: ${0}", var.name))
                .collect::<Vec<_>>()
                .join(", ");
            source.push_str(&format!("({args})"));
        }

        let return_type_name = field.return_type().innermost_name();
        let is_leaf =
            BUILTIN_SCALAR_NAMES.contains(&return_type_name)
            || input_kinds.scalar_names().any(|name| name == return_type_name);
        if !is_leaf {
            source.push_str(" {\n    __typename\n  }");
        }
        source.push_str("\n}\n");

        log::debug!("Generated mutation operation:\n{source}");
        Self {
            argument_variables: variables.iter()
                .map(|var| (var.name.to_owned(), var.name.to_owned()))
                .collect(),
            field_name: field.name().to_string(),
            name: Some(name),
            source,
            variables,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The operation document text sent to the server.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn variable(&self, name: &str) -> Option<&OperationVariable> {
        self.variables.iter().find(|var| var.name == name)
    }

    pub fn variables(&self) -> &[OperationVariable] {
        self.variables.as_slice()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum MutationOperationBuildError {
    #[error(
        "The operation selects `{found}`, but the schema fragment declares \
        `{expected}`"
    )]
    FieldNameMismatch {
        expected: String,
        found: String,
    },

    #[error("Fragment definitions are not supported in mutation operation documents")]
    FragmentsNotSupported,

    #[error("Expected exactly 1 operation in the document, found {found}")]
    MultipleOperations {
        found: usize,
    },

    #[error("No operations found in the document")]
    NoOperations,

    #[error("Expected a mutation operation, found a {kind}")]
    NotAMutation {
        kind: &'static str,
    },

    #[error("Error parsing mutation operation: {0}")]
    ParseError(String),

    #[error("Expected the mutation to select exactly 1 root field, found {found}")]
    RootFieldCount {
        found: usize,
    },

    #[error("The operation references the undeclared variable `${variable_name}`")]
    UndeclaredVariable {
        variable_name: String,
    },

    #[error("The `{field_name}` field does not declare an argument named `{argument_name}`")]
    UnknownArgument {
        argument_name: String,
        field_name: String,
    },
}

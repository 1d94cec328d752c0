use crate::ast;
use thiserror::Error;

/// Find the single mutation field declared by a schema fragment.
///
/// Returns `None` unless the document consists of exactly one object type
/// definition, named `Mutation`, which declares exactly one field. Use
/// [`validate_mutation_field`] to find out which of those requirements was
/// not met.
pub fn find_mutation_field(
    document: &ast::schema::Document,
) -> Option<&ast::schema::Field> {
    validate_mutation_field(document).ok()
}

/// Like [`find_mutation_field`], but reports the first requirement the
/// fragment fails to meet. Requirements are checked in this order:
///
/// 1. The document contains exactly one top-level definition.
/// 2. That definition is an object type definition.
/// 3. The object type is named `Mutation`.
/// 4. The object type declares exactly one field.
pub fn validate_mutation_field(
    document: &ast::schema::Document,
) -> Result<&ast::schema::Field, InvalidMutationFragment> {
    let def = match document.definitions.as_slice() {
        [def] => def,
        defs => return Err(InvalidMutationFragment::DefinitionCount {
            found: defs.len(),
        }),
    };

    let obj_type = match def {
        ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(obj_type),
        ) => obj_type,

        other => return Err(InvalidMutationFragment::NotAnObjectType {
            kind: definition_kind_name(other),
        }),
    };

    if obj_type.name != "Mutation" {
        return Err(InvalidMutationFragment::NotNamedMutation {
            name: obj_type.name.to_owned(),
        });
    }

    match obj_type.fields.as_slice() {
        [field] => {
            log::debug!(
                "Found mutation field `{}` with {} arguments.",
                field.name,
                field.arguments.len(),
            );
            Ok(field)
        },
        fields => Err(InvalidMutationFragment::FieldCount {
            found: fields.len(),
        }),
    }
}

fn definition_kind_name(def: &ast::schema::Definition) -> &'static str {
    use ast::schema::TypeDefinition as TypeDef;
    match def {
        ast::schema::Definition::DirectiveDefinition(_) => "directive definition",
        ast::schema::Definition::SchemaDefinition(_) => "schema definition",
        ast::schema::Definition::TypeExtension(_) => "type extension",
        ast::schema::Definition::TypeDefinition(type_def) => match type_def {
            TypeDef::Enum(_) => "enum type definition",
            TypeDef::InputObject(_) => "input object type definition",
            TypeDef::Interface(_) => "interface type definition",
            TypeDef::Object(_) => "object type definition",
            TypeDef::Scalar(_) => "scalar type definition",
            TypeDef::Union(_) => "union type definition",
        },
    }
}

/// The fragment does not define exactly one mutation field. Each variant
/// names the first requirement that was violated.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidMutationFragment {
    #[error(
        "Schema fragment must define exactly one mutation field: expected \
        exactly 1 top-level definition, found {found}"
    )]
    DefinitionCount {
        found: usize,
    },

    #[error(
        "Schema fragment must define exactly one mutation field: expected an \
        object type definition, found a {kind}"
    )]
    NotAnObjectType {
        kind: &'static str,
    },

    #[error(
        "Schema fragment must define exactly one mutation field: expected the \
        object type to be named `Mutation`, found `{name}`"
    )]
    NotNamedMutation {
        name: String,
    },

    #[error(
        "Schema fragment must define exactly one mutation field: expected \
        `Mutation` to declare exactly 1 field, found {found}"
    )]
    FieldCount {
        found: usize,
    },
}

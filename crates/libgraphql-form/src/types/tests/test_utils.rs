use crate::ast;

/// Parse `type_str` as the type annotation of a field on a throwaway object
/// type and return the resulting AST node.
pub(super) fn parse_type_annotation(
    type_str: &str,
) -> Result<ast::schema::Type, ast::schema::ParseError> {
    let doc = ast::schema::parse::<String>(
        format!("type T {{ f: {type_str} }}").as_str(),
    )?.into_static();

    for def in doc.definitions {
        if let ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(mut obj_type),
        ) = def {
            return Ok(obj_type.fields.remove(0).field_type);
        }
    }
    panic!("no object type parsed from `{type_str}`");
}

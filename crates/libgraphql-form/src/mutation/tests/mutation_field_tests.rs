use crate::mutation::MutationFragment;
use crate::mutation::MutationFragmentBuildError;
use crate::types::TypeRef;

type Result<T> = std::result::Result<T, MutationFragmentBuildError>;

const REGISTER_BOOK: &str = r#"
    type Mutation {
      """
      Registers a single book
      """
      registerBook(
        id: ID

        """
        The book's title
        """
        name: String!

        """
        Number of pages (optional)
        """
        pageCount: Int
      ): Book
    }
"#;

#[test]
fn register_book_field_is_built() -> Result<()> {
    let fragment = MutationFragment::from_str(REGISTER_BOOK)?;
    let field = fragment.mutation_field()?;

    assert_eq!(field.name(), "registerBook");
    assert_eq!(field.description(), Some("Registers a single book"));
    assert_eq!(field.return_type(), &TypeRef::named("Book"));

    let arg_summaries = field.arguments()
        .iter()
        .map(|arg| (arg.name(), arg.resolved_type(), arg.description()))
        .collect::<Vec<_>>();
    assert_eq!(arg_summaries, vec![
        ("id", "ID".to_string(), None),
        ("name", "String!".to_string(), Some("The book's title")),
        ("pageCount", "Int".to_string(), Some("Number of pages (optional)")),
    ]);

    Ok(())
}

#[test]
fn argument_lookup_by_name() -> Result<()> {
    let field = MutationFragment::from_str(REGISTER_BOOK)?.mutation_field()?;

    let name_arg = field.argument("name").expect("`name` argument exists");
    assert_eq!(name_arg.type_ref(), &TypeRef::non_null(TypeRef::named("String")));
    assert!(name_arg.is_required());
    assert!(field.argument("isbn").is_none());

    Ok(())
}

#[test]
fn default_values_are_converted_to_json() -> Result<()> {
    let field = MutationFragment::from_str(
        r#"type Mutation {
            search(
                limit: Int! = 10,
                tags: [String] = ["a", "b"],
                order: Order = ASC,
                exact: Boolean = false,
                ratio: Float = 0.5,
                filter: Filter = { name: "x" },
                after: ID = null,
            ): Boolean
        }"#,
    )?.mutation_field()?;

    let defaults = field.arguments()
        .iter()
        .map(|arg| (arg.name(), arg.default_value().cloned()))
        .collect::<Vec<_>>();
    assert_eq!(defaults, vec![
        ("limit", Some(serde_json::json!(10))),
        ("tags", Some(serde_json::json!(["a", "b"]))),
        ("order", Some(serde_json::json!("ASC"))),
        ("exact", Some(serde_json::json!(false))),
        ("ratio", Some(serde_json::json!(0.5))),
        ("filter", Some(serde_json::json!({ "name": "x" }))),
        ("after", Some(serde_json::Value::Null)),
    ]);

    // Non-null, but a default is available.
    assert!(!field.arguments()[0].is_required());

    Ok(())
}

#[test]
fn definition_locations_point_into_the_fragment() -> Result<()> {
    let field = MutationFragment::from_str(
        "type Mutation {\n  renameBook(\n    id: ID!\n  ): Book\n}",
    )?.mutation_field()?;

    assert_eq!(field.def_location().line, 2);
    assert_eq!(field.arguments()[0].def_location().line, 3);
    assert_eq!(field.arguments()[0].def_location().file, None);

    Ok(())
}

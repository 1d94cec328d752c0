use crate::mutation::MutationField;
use crate::mutation::MutationFragment;
use crate::operation::FormSubmission;
use crate::operation::FormSubmissionError;
use crate::operation::MutationOperation;
use crate::types::InputKindTable;
use serde_json::json;

type Result<T> = std::result::Result<T, FormSubmissionError>;

fn field_and_operation(schema: &str) -> (MutationField, MutationOperation) {
    let field = MutationFragment::from_str(schema)
        .expect("fragment parses")
        .mutation_field()
        .expect("fragment is valid");
    let operation = MutationOperation::generate(&field, &InputKindTable::default());
    (field, operation)
}

const REGISTER_BOOK: &str =
    "type Mutation { registerBook(id: ID, name: String!, pageCount: Int): Book }";

#[test]
fn values_are_coerced_by_argument_type() -> Result<()> {
    let (field, operation) = field_and_operation(REGISTER_BOOK);
    let submission = FormSubmission::from_iter([
        ("id", "b-1"),
        ("name", "The Rust Book"),
        ("pageCount", "42"),
    ]);

    let variables = submission.to_variables(&field, &operation)?;
    assert_eq!(
        serde_json::to_value(&variables).expect("variables serialize"),
        json!({ "id": "b-1", "name": "The Rust Book", "pageCount": 42 }),
    );
    Ok(())
}

#[test]
fn empty_nullable_value_becomes_null_and_missing_is_omitted() -> Result<()> {
    let (field, operation) = field_and_operation(REGISTER_BOOK);
    let submission = FormSubmission::from_iter([("name", "Dune"), ("pageCount", "")]);

    let variables = submission.to_variables(&field, &operation)?;
    assert_eq!(variables.get("pageCount"), Some(&serde_json::Value::Null));
    assert_eq!(variables.get("id"), None);
    assert_eq!(variables.keys().collect::<Vec<_>>(), vec!["name", "pageCount"]);
    Ok(())
}

#[test]
fn missing_required_value_is_an_error() {
    let (field, operation) = field_and_operation(REGISTER_BOOK);

    for submission in [
        FormSubmission::from_iter([("pageCount", "12")]),
        FormSubmission::from_iter([("name", "")]),
    ] {
        assert_eq!(
            submission.to_variables(&field, &operation),
            Err(FormSubmissionError::MissingRequiredArgument {
                argument_name: "name".to_string(),
                type_str: "String!".to_string(),
            }),
        );
    }
}

#[test]
fn invalid_int_is_an_error() {
    let (field, operation) = field_and_operation(REGISTER_BOOK);
    let submission = FormSubmission::from_iter([("name", "Dune"), ("pageCount", "abc")]);

    assert_eq!(
        submission.to_variables(&field, &operation),
        Err(FormSubmissionError::InvalidValue {
            argument_name: "pageCount".to_string(),
            type_name: "Int".to_string(),
            value: "abc".to_string(),
        }),
    );
}

#[test]
fn unknown_argument_is_an_error() {
    let (field, operation) = field_and_operation(REGISTER_BOOK);
    let submission = FormSubmission::from_iter([("name", "Dune"), ("isbn", "123")]);

    assert_eq!(
        submission.to_variables(&field, &operation),
        Err(FormSubmissionError::UnknownArgument {
            argument_name: "isbn".to_string(),
        }),
    );
}

#[test]
fn booleans_floats_and_lists() -> Result<()> {
    let (field, operation) = field_and_operation(
        "type Mutation {
            publish(draft: Boolean!, price: Float, tags: [String!], ratings: [Int]): ID
        }",
    );
    let submission = FormSubmission::from_iter([
        ("draft", "on"),
        ("price", "9.5"),
        ("tags", "sci-fi, classic"),
        ("ratings", "5,4"),
    ]);

    let variables = submission.to_variables(&field, &operation)?;
    assert_eq!(
        serde_json::to_value(&variables).expect("variables serialize"),
        json!({
            "draft": true,
            "price": 9.5,
            "tags": ["sci-fi", "classic"],
            "ratings": [5, 4],
        }),
    );

    let submission = FormSubmission::from_iter([("draft", "maybe")]);
    assert!(matches!(
        submission.to_variables(&field, &operation),
        Err(FormSubmissionError::InvalidValue { .. }),
    ));
    Ok(())
}

#[test]
fn arguments_with_defaults_may_be_omitted() -> Result<()> {
    let (field, operation) = field_and_operation(
        "type Mutation { search(limit: Int! = 10, term: String!): [ID!]! }",
    );
    let submission = FormSubmission::from_iter([("term", "rust"), ("limit", "")]);

    let variables = submission.to_variables(&field, &operation)?;
    assert_eq!(
        serde_json::to_value(&variables).expect("variables serialize"),
        json!({ "term": "rust" }),
    );
    Ok(())
}

#[test]
fn variables_use_operation_variable_names() -> Result<()> {
    let (field, _) = field_and_operation(REGISTER_BOOK);
    let operation = MutationOperation::from_str(
        "mutation Rename($title: String!) { registerBook(name: $title) { id } }",
    ).expect("operation parses");
    let submission = FormSubmission::from_iter([("name", "Dune"), ("pageCount", "3")]);

    // `pageCount` isn't passed by the operation, so it's skipped.
    let variables = submission.to_variables(&field, &operation)?;
    assert_eq!(
        serde_json::to_value(&variables).expect("variables serialize"),
        json!({ "title": "Dune" }),
    );
    Ok(())
}

#[test]
fn name_value_pairs() -> Result<()> {
    let mut submission = FormSubmission::new();
    submission.insert_pair("name=a=b")?;
    submission.insert_pair("id=")?;
    assert_eq!(submission.get("name"), Some("a=b"));
    assert_eq!(submission.get("id"), Some(""));

    assert_eq!(
        submission.insert_pair("no-separator"),
        Err(FormSubmissionError::MalformedPair("no-separator".to_string())),
    );
    assert_eq!(
        submission.insert_pair("=value"),
        Err(FormSubmissionError::MalformedPair("=value".to_string())),
    );
    Ok(())
}

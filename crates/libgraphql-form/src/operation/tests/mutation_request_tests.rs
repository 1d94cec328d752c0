use crate::form::HttpMethod;
use crate::form::MutationForm;
use crate::form::MutationFormOptions;
use crate::operation::FormSubmission;
use crate::operation::MutationOperation;
use crate::operation::MutationOperationBuildError;
use crate::operation::MutationRequestError;
use serde_json::json;

type Result<T> = std::result::Result<T, MutationRequestError>;

fn register_book_form(options: MutationFormOptions) -> MutationForm {
    MutationForm::from_str(
        "type Mutation { registerBook(id: ID, name: String!, pageCount: Int): Book }",
        options,
    ).expect("form builds")
}

#[test]
fn builds_request_with_generated_operation() -> Result<()> {
    let form = register_book_form(MutationFormOptions::default());
    let submission = FormSubmission::from_iter([("name", "Dune"), ("pageCount", "412")]);

    let request = form.build_request(None, &submission)?;
    assert_eq!(request.endpoint, "/graphql");
    assert_eq!(request.method, HttpMethod::Post);

    let body: serde_json::Value =
        serde_json::from_str(&request.body.to_json().expect("body serializes"))
            .expect("body is json");
    assert_eq!(body, json!({
        "operationName": "RegisterBook",
        "query": concat!(
            "mutation RegisterBook($id: ID, $name: String!, $pageCount: Int) {\n",
            "  registerBook(id: $id, name: $name, pageCount: $pageCount) {\n",
            "    __typename\n",
            "  }\n",
            "}\n",
        ),
        "variables": { "name": "Dune", "pageCount": 412 },
    }));
    Ok(())
}

#[test]
fn builds_request_with_provided_operation() -> Result<()> {
    let form = register_book_form(
        MutationFormOptions::default()
            .with_action("https://books.example/graphql")
            .with_method(HttpMethod::Get),
    );
    let operation = MutationOperation::from_str(
        "mutation($n: String!) { registerBook(name: $n) { id } }",
    ).expect("operation parses");
    let submission = FormSubmission::from_iter([("name", "Dune")]);

    let request = form.build_request(Some(&operation), &submission)?;
    assert_eq!(request.endpoint, "https://books.example/graphql");
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.body.operation_name, None);

    let params = request.body.to_query_params().expect("params serialize");
    assert_eq!(params, vec![
        ("query", "mutation($n: String!) { registerBook(name: $n) { id } }".to_string()),
        ("variables", r#"{"n":"Dune"}"#.to_string()),
    ]);
    Ok(())
}

#[test]
fn operation_for_another_field_is_rejected() {
    let form = register_book_form(MutationFormOptions::default());
    let operation = MutationOperation::from_str("mutation { removeBook }")
        .expect("operation parses");

    assert_eq!(
        form.build_request(Some(&operation), &FormSubmission::new()),
        Err(MutationRequestError::InvalidOperation(
            MutationOperationBuildError::FieldNameMismatch {
                expected: "registerBook".to_string(),
                found: "removeBook".to_string(),
            },
        )),
    );
}

#[test]
fn invalid_submission_is_rejected() {
    let form = register_book_form(MutationFormOptions::default());
    assert!(matches!(
        form.build_request(None, &FormSubmission::new()),
        Err(MutationRequestError::InvalidSubmission(_)),
    ));
}

use crate::mutation::InvalidMutationFragment;
use crate::mutation::MutationFragment;
use crate::mutation::MutationFragmentBuildError;
use crate::SourceReadError;
use std::path::PathBuf;

#[test]
fn syntax_errors_are_reported_as_parse_errors() {
    let result = MutationFragment::from_str("type Mutation { registerBook(: Book }");
    assert!(matches!(
        result,
        Err(MutationFragmentBuildError::ParseError { file: None, .. }),
    ));
}

#[test]
fn invalid_fragment_parses_but_has_no_mutation_field() {
    let fragment = MutationFragment::from_str("type Book { id: ID }")
        .expect("fragment parses");
    assert_eq!(
        fragment.mutation_field(),
        Err(InvalidMutationFragment::NotNamedMutation {
            name: "Book".to_string(),
        }),
    );
}

#[test]
fn source_text_is_kept_verbatim() {
    let text = "  type Mutation { ping: Boolean }  \n";
    let fragment = MutationFragment::from_str(text).expect("fragment parses");
    assert_eq!(fragment.source().text(), text);
    assert_eq!(fragment.document().definitions.len(), 1);
}

#[test]
fn missing_file_is_a_read_error() {
    let path = PathBuf::from("/definitely/not/a/real/fragment.graphql");
    assert_eq!(
        MutationFragment::from_file(&path),
        Err(MutationFragmentBuildError::FileReadError(Box::new(
            SourceReadError::PathIsNotAFile(path),
        ))),
    );
}

#[test]
fn fragment_loads_from_file() {
    let path = std::env::temp_dir().join(format!(
        "libgraphql-form-fragment-{}.graphql",
        std::process::id(),
    ));
    std::fs::write(&path, "type Mutation {\n  ping: Boolean\n}\n")
        .expect("temp file is writable");

    let fragment = MutationFragment::from_file(&path).expect("fragment loads");
    let field = fragment.mutation_field().expect("fragment is valid");
    std::fs::remove_file(&path).ok();

    assert_eq!(fragment.source().file_path(), Some(path.as_path()));
    assert_eq!(field.name(), "ping");
    assert_eq!(field.def_location().file.as_ref(), Some(&path));
}

use crate::types::InputKind;
use crate::types::InputKindTable;
use crate::types::TypeRef;

#[test]
fn default_table_maps_int_to_number() {
    let table = InputKindTable::default();
    assert_eq!(table.kind_for(&TypeRef::named("Int")), InputKind::Number);
}

#[test]
fn default_table_maps_iso8601_datetime_to_datetime_local() {
    let table = InputKindTable::default();
    assert_eq!(
        table.kind_for(&TypeRef::named("ISO8601DateTime")),
        InputKind::DateTimeLocal,
    );
}

#[test]
fn unmapped_scalars_fall_back_to_text() {
    let table = InputKindTable::default();
    for name in ["ID", "String", "Boolean", "Float", "Book"] {
        assert_eq!(table.kind_for(&TypeRef::named(name)), InputKind::Text);
    }
}

#[test]
fn non_null_types_use_fallback() {
    let table = InputKindTable::default();
    assert_eq!(
        table.kind_for(&TypeRef::non_null(TypeRef::named("Int"))),
        InputKind::Text,
    );
    assert_eq!(
        table.kind_for(&TypeRef::non_null(TypeRef::named("ISO8601DateTime"))),
        InputKind::Text,
    );

    let table = table.with_fallback(InputKind::Checkbox);
    assert_eq!(
        table.kind_for(&TypeRef::non_null(TypeRef::named("Int"))),
        InputKind::Checkbox,
    );
}

#[test]
fn list_types_use_fallback() {
    let table = InputKindTable::default();
    assert_eq!(
        table.kind_for(&TypeRef::list(TypeRef::named("Int"))),
        InputKind::Text,
    );
    assert_eq!(
        table.kind_for(&TypeRef::non_null(TypeRef::list(TypeRef::named("Int")))),
        InputKind::Text,
    );
}

#[test]
fn table_is_extensible() {
    let table = InputKindTable::default()
        .with_mapping("Boolean", InputKind::Checkbox)
        .with_mapping("Int", InputKind::Text)
        .with_fallback(InputKind::Number);

    assert_eq!(table.kind_for(&TypeRef::named("Boolean")), InputKind::Checkbox);
    assert_eq!(table.kind_for(&TypeRef::named("Int")), InputKind::Text);
    assert_eq!(table.kind_for(&TypeRef::named("Whatever")), InputKind::Number);
    assert_eq!(
        table.scalar_names().collect::<Vec<_>>(),
        vec!["Int", "ISO8601DateTime", "Boolean"],
    );
}

#[test]
fn input_kind_round_trips_through_html_type() {
    for kind in [
        InputKind::Checkbox,
        InputKind::DateTimeLocal,
        InputKind::Number,
        InputKind::Text,
    ] {
        assert_eq!(kind.html_type().parse::<InputKind>(), Ok(kind));
    }
    assert!("range".parse::<InputKind>().is_err());
}

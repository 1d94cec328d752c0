use crate::ast;

/// Convert a constant GraphQL value (as written for an argument's default)
/// into JSON.
///
/// Variables can't appear in constant positions, so they map to `null`.
/// Integers that don't fit in an `i64` and non-finite floats also map to
/// `null`.
pub(crate) fn value_to_json(value: &ast::schema::Value) -> serde_json::Value {
    use ast::schema::Value;
    match value {
        Value::Boolean(value) => serde_json::Value::Bool(*value),
        Value::Enum(name) => serde_json::Value::String(name.to_owned()),
        Value::Float(value) =>
            serde_json::Number::from_f64(*value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        Value::Int(number) =>
            number.as_i64()
                .map(serde_json::Value::from)
                .unwrap_or(serde_json::Value::Null),
        Value::List(values) =>
            serde_json::Value::Array(values.iter().map(value_to_json).collect()),
        Value::Null | Value::Variable(_) => serde_json::Value::Null,
        Value::Object(entries) =>
            serde_json::Value::Object(
                entries.iter()
                    .map(|(key, value)| (key.to_owned(), value_to_json(value)))
                    .collect(),
            ),
        Value::String(value) => serde_json::Value::String(value.to_owned()),
    }
}

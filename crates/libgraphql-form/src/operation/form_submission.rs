use crate::mutation::MutationArgument;
use crate::mutation::MutationField;
use crate::operation::MutationOperation;
use crate::types::TypeRef;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, FormSubmissionError>;

/// The raw string values submitted through a
/// [`MutationForm`](crate::form::MutationForm), keyed by input name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSubmission {
    values: IndexMap<String, String>,
}
impl FormSubmission {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `name=value` pair (as passed on the command line) and add it.
    /// Everything after the first `=` is the value.
    pub fn insert_pair(&mut self, pair: &str) -> Result<()> {
        match pair.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                self.insert(name, value);
                Ok(())
            },
            _ => Err(FormSubmissionError::MalformedPair(pair.to_string())),
        }
    }

    /// Coerce the submitted values into the JSON variables expected by
    /// `operation`, using the argument types declared on `field`.
    ///
    /// * Values for `Int`, `Float`, and `Boolean` arguments are parsed as
    ///   such; values for any other named type are passed as strings.
    /// * Values for list arguments are split on `,` and each item is coerced
    ///   by the list's item type.
    /// * An empty value for a nullable argument becomes `null`.
    /// * Arguments with no (or an empty) value and a declared default are
    ///   omitted, so the default applies.
    /// * A non-null argument with no default must have a non-empty value.
    ///
    /// Submitted names that aren't arguments of `field` are rejected.
    /// Arguments that `operation` doesn't bind to a variable are skipped.
    pub fn to_variables(
        &self,
        field: &MutationField,
        operation: &MutationOperation,
    ) -> Result<IndexMap<String, serde_json::Value>> {
        for name in self.values.keys() {
            if field.argument(name).is_none() {
                return Err(FormSubmissionError::UnknownArgument {
                    argument_name: name.to_owned(),
                });
            }
        }

        let mut variables = IndexMap::new();
        for argument in field.arguments() {
            let Some(var_name) = operation.argument_variable(argument.name()) else {
                if self.values.contains_key(argument.name()) {
                    log::warn!(
                        "Ignoring submitted value for `{}`: the operation doesn't \
                        pass it to `{}`.",
                        argument.name(),
                        field.name(),
                    );
                }
                continue;
            };

            if let Some(value) = coerce_argument(argument, self.get(argument.name()))? {
                variables.insert(var_name.to_string(), value);
            }
        }
        Ok(variables)
    }

    pub fn values(&self) -> &IndexMap<String, String> {
        &self.values
    }
}
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

fn coerce_argument(
    argument: &MutationArgument,
    raw: Option<&str>,
) -> Result<Option<serde_json::Value>> {
    match raw {
        None | Some("") if argument.default_value().is_some() => Ok(None),
        None | Some("") if argument.type_ref().is_non_null() =>
            Err(FormSubmissionError::MissingRequiredArgument {
                argument_name: argument.name().to_string(),
                type_str: argument.resolved_type(),
            }),
        None => Ok(None),
        Some("") => Ok(Some(serde_json::Value::Null)),
        Some(raw) => coerce_value(argument.name(), argument.type_ref(), raw).map(Some),
    }
}

fn coerce_value(
    argument_name: &str,
    type_ref: &TypeRef,
    raw: &str,
) -> Result<serde_json::Value> {
    match type_ref {
        TypeRef::NonNull(inner) => coerce_value(argument_name, inner, raw),

        TypeRef::List(item_type) =>
            raw.split(',')
                .map(|item| coerce_value(argument_name, item_type, item.trim()))
                .collect::<Result<Vec<_>>>()
                .map(serde_json::Value::Array),

        TypeRef::Named(type_name) => match type_name.as_str() {
            "Boolean" => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "1" => Ok(serde_json::Value::Bool(true)),
                "false" | "off" | "0" => Ok(serde_json::Value::Bool(false)),
                _ => Err(invalid_value(argument_name, type_name, raw)),
            },

            "Float" => raw.trim()
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .ok_or_else(|| invalid_value(argument_name, type_name, raw)),

            "Int" => raw.trim()
                .parse::<i32>()
                .map(serde_json::Value::from)
                .map_err(|_| invalid_value(argument_name, type_name, raw)),

            _ => Ok(serde_json::Value::String(raw.to_string())),
        },
    }
}

fn invalid_value(argument_name: &str, type_name: &str, raw: &str) -> FormSubmissionError {
    FormSubmissionError::InvalidValue {
        argument_name: argument_name.to_string(),
        type_name: type_name.to_string(),
        value: raw.to_string(),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FormSubmissionError {
    #[error("`{value}` is not a valid `{type_name}` value for argument `{argument_name}`")]
    InvalidValue {
        argument_name: String,
        type_name: String,
        value: String,
    },

    #[error("Expected a `name=value` pair, found `{0}`")]
    MalformedPair(String),

    #[error("A value is required for argument `{argument_name}` of type `{type_str}`")]
    MissingRequiredArgument {
        argument_name: String,
        type_str: String,
    },

    #[error("Submitted value for unknown argument `{argument_name}`")]
    UnknownArgument {
        argument_name: String,
    },
}

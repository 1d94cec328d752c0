use crate::mutation::MutationArgument;
use crate::start_case;
use crate::types::InputKind;
use crate::types::InputKindTable;

/// One labeled input of a [`MutationForm`](crate::form::MutationForm),
/// derived from a single mutation argument.
#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub(super) default_value: Option<serde_json::Value>,
    pub(super) description: Option<String>,
    pub(super) input_kind: InputKind,
    pub(super) label: String,
    pub(super) name: String,
    pub(super) placeholder: String,
    pub(super) required: bool,
}
impl FormField {
    pub fn from_argument(argument: &MutationArgument, input_kinds: &InputKindTable) -> Self {
        Self {
            default_value: argument.default_value().cloned(),
            description: argument.description().map(str::to_string),
            input_kind: input_kinds.kind_for(argument.type_ref()),
            label: start_case(argument.name()),
            name: argument.name().to_string(),
            placeholder: argument.resolved_type(),
            required: argument.is_required(),
        }
    }

    pub fn default_value(&self) -> Option<&serde_json::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The initial `value` attribute for this input, taken from the
    /// argument's default when that default is a scalar.
    pub fn initial_value(&self) -> Option<String> {
        match self.default_value.as_ref()? {
            serde_json::Value::Bool(value) => Some(value.to_string()),
            serde_json::Value::Number(value) => Some(value.to_string()),
            serde_json::Value::String(value) => Some(value.to_owned()),
            serde_json::Value::Array(_)
            | serde_json::Value::Null
            | serde_json::Value::Object(_) => None,
        }
    }

    pub fn input_kind(&self) -> InputKind {
        self.input_kind
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// The argument name, used for both the input's `id` and `name`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The resolved GraphQL type of the argument (e.g. `String!`).
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_str()
    }

    pub fn required(&self) -> bool {
        self.required
    }
}

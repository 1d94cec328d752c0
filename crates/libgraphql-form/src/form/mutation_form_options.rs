use crate::form::HttpMethod;
use crate::types::InputKindTable;

/// The endpoint forms submit to unless another action is configured.
pub const DEFAULT_ACTION: &str = "/graphql";

/// Settings that control how a [`MutationForm`](crate::form::MutationForm) is
/// rendered and submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationFormOptions {
    pub(crate) action: String,
    pub(crate) input_kinds: InputKindTable,
    pub(crate) method: HttpMethod,
    pub(crate) show_source: bool,
}
impl MutationFormOptions {
    pub fn action(&self) -> &str {
        self.action.as_str()
    }

    pub fn input_kinds(&self) -> &InputKindTable {
        &self.input_kinds
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn show_source(&self) -> bool {
        self.show_source
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_input_kinds(mut self, input_kinds: InputKindTable) -> Self {
        self.input_kinds = input_kinds;
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Whether the fragment's source text is shown beneath the form.
    pub fn with_show_source(mut self, show_source: bool) -> Self {
        self.show_source = show_source;
        self
    }
}
impl std::default::Default for MutationFormOptions {
    fn default() -> Self {
        Self {
            action: DEFAULT_ACTION.to_string(),
            input_kinds: InputKindTable::default(),
            method: HttpMethod::default(),
            show_source: true,
        }
    }
}

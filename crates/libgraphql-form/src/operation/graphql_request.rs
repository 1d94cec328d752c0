use crate::operation::MutationOperation;
use indexmap::IndexMap;

/// The standard GraphQL-over-HTTP request payload.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    pub query: String,
    pub variables: IndexMap<String, serde_json::Value>,
}
impl GraphQLRequest {
    pub fn new(
        operation: &MutationOperation,
        variables: IndexMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            operation_name: operation.name().map(str::to_string),
            query: operation.source().to_string(),
            variables,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The URL query parameters that encode this request for a `GET`
    /// request. `variables` is JSON-encoded and omitted when empty.
    pub fn to_query_params(&self) -> serde_json::Result<Vec<(&'static str, String)>> {
        let mut params = vec![("query", self.query.to_owned())];
        if let Some(operation_name) = &self.operation_name {
            params.push(("operationName", operation_name.to_owned()));
        }
        if !self.variables.is_empty() {
            params.push(("variables", serde_json::to_string(&self.variables)?));
        }
        Ok(params)
    }
}

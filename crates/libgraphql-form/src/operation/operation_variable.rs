use crate::types::TypeRef;

/// A variable declared by a [`MutationOperation`](crate::operation::MutationOperation)
/// (e.g. `$name: String!`).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationVariable {
    pub(super) has_default: bool,
    pub(super) name: String,
    pub(super) type_ref: TypeRef,
}
impl OperationVariable {
    pub fn has_default(&self) -> bool {
        self.has_default
    }

    /// The variable name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}

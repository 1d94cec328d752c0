mod form_submission;
mod graphql_request;
mod mutation_operation;
mod mutation_request;
mod operation_variable;

pub use form_submission::FormSubmission;
pub use form_submission::FormSubmissionError;
pub use graphql_request::GraphQLRequest;
pub use mutation_operation::MutationOperation;
pub use mutation_operation::MutationOperationBuildError;
pub use mutation_request::MutationRequest;
pub use mutation_request::MutationRequestError;
pub use operation_variable::OperationVariable;

#[cfg(test)]
mod tests;

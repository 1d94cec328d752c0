use crate::form::HttpMethod;
use crate::form::MutationForm;
use crate::operation::FormSubmission;
use crate::operation::FormSubmissionError;
use crate::operation::GraphQLRequest;
use crate::operation::MutationOperation;
use crate::operation::MutationOperationBuildError;
use thiserror::Error;

/// Everything needed to send a form's mutation to its endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationRequest {
    pub body: GraphQLRequest,
    pub endpoint: String,
    pub method: HttpMethod,
}

impl MutationForm {
    /// Build the request that submitting this form performs.
    ///
    /// When `operation` is `None`, an operation is generated from the
    /// mutation field (see [`MutationOperation::generate`]). Otherwise the
    /// provided operation must select this form's mutation field.
    pub fn build_request(
        &self,
        operation: Option<&MutationOperation>,
        submission: &FormSubmission,
    ) -> Result<MutationRequest, MutationRequestError> {
        let generated;
        let operation = match operation {
            Some(operation) => {
                operation.check_against(self.mutation_field())?;
                operation
            },
            None => {
                generated = MutationOperation::generate(
                    self.mutation_field(),
                    self.options().input_kinds(),
                );
                &generated
            },
        };

        let variables = submission.to_variables(self.mutation_field(), operation)?;
        log::debug!(
            "Built {} request to `{}` with {} variables.",
            self.method(),
            self.action(),
            variables.len(),
        );
        Ok(MutationRequest {
            body: GraphQLRequest::new(operation, variables),
            endpoint: self.action().to_string(),
            method: self.method(),
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum MutationRequestError {
    #[error(transparent)]
    InvalidOperation(#[from] MutationOperationBuildError),

    #[error(transparent)]
    InvalidSubmission(#[from] FormSubmissionError),
}

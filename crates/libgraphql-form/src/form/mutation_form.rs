use crate::form::FormField;
use crate::form::HttpMethod;
use crate::form::MutationFormOptions;
use crate::mutation::InvalidMutationFragment;
use crate::mutation::MutationField;
use crate::mutation::MutationFragment;
use crate::mutation::MutationFragmentBuildError;
use crate::start_case;
use crate::Source;
use std::path::Path;

/// An HTML form with one input per argument of a fragment's single mutation
/// field.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationForm {
    pub(super) fields: Vec<FormField>,
    pub(super) mutation_field: MutationField,
    pub(super) options: MutationFormOptions,
    pub(super) source: Source,
}
impl MutationForm {
    pub fn action(&self) -> &str {
        self.options.action()
    }

    /// The form's inputs, in argument declaration order.
    pub fn fields(&self) -> &[FormField] {
        self.fields.as_slice()
    }

    pub fn from_file(
        file_path: impl AsRef<Path>,
        options: MutationFormOptions,
    ) -> Result<Self, MutationFragmentBuildError> {
        let fragment = MutationFragment::from_file(file_path)?;
        Ok(Self::from_fragment(&fragment, options)?)
    }

    pub fn from_fragment(
        fragment: &MutationFragment,
        options: MutationFormOptions,
    ) -> Result<Self, InvalidMutationFragment> {
        let mutation_field = fragment.mutation_field()?;
        let fields = mutation_field.arguments()
            .iter()
            .map(|arg| FormField::from_argument(arg, options.input_kinds()))
            .collect();

        Ok(Self {
            fields,
            mutation_field,
            options,
            source: fragment.source().to_owned(),
        })
    }

    pub fn from_str(
        content: impl Into<String>,
        options: MutationFormOptions,
    ) -> Result<Self, MutationFragmentBuildError> {
        let fragment = MutationFragment::from_str(content)?;
        Ok(Self::from_fragment(&fragment, options)?)
    }

    pub fn method(&self) -> HttpMethod {
        self.options.method()
    }

    pub fn mutation_field(&self) -> &MutationField {
        &self.mutation_field
    }

    pub fn options(&self) -> &MutationFormOptions {
        &self.options
    }

    /// The fragment source the form was generated from.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The form heading: the mutation field's name in start case.
    pub fn title(&self) -> String {
        start_case(self.mutation_field.name())
    }
}

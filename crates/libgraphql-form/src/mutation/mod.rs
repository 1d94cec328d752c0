mod default_value;
mod mutation_argument;
mod mutation_field;
mod mutation_field_validator;
mod mutation_fragment;

pub use mutation_argument::MutationArgument;
pub use mutation_field::MutationField;
pub use mutation_field_validator::find_mutation_field;
pub use mutation_field_validator::InvalidMutationFragment;
pub use mutation_field_validator::validate_mutation_field;
pub use mutation_fragment::MutationFragment;
pub use mutation_fragment::MutationFragmentBuildError;

#[cfg(test)]
mod tests;

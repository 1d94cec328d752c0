//! Generate HTML forms from GraphQL schema fragments that declare exactly one
//! mutation field, and turn submitted form values into the matching mutation
//! request.
//!
//! ```
//! use libgraphql_form::form::MutationForm;
//! use libgraphql_form::form::MutationFormOptions;
//!
//! let form = MutationForm::from_str(
//!     "type Mutation { registerBook(id: ID, name: String!): Book }",
//!     MutationFormOptions::default(),
//! ).unwrap();
//! assert_eq!(form.fields().len(), 2);
//! assert!(form.render_html().unwrap().contains(r#"placeholder="String!""#));
//! ```

pub mod ast;
pub mod form;
mod label;
pub mod loc;
pub mod mutation;
pub mod operation;
mod source;
pub mod types;

pub use label::start_case;
pub use source::Source;
pub use source::SourceReadError;

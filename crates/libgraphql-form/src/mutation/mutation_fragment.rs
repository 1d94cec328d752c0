use crate::ast;
use crate::mutation::validate_mutation_field;
use crate::mutation::InvalidMutationFragment;
use crate::mutation::MutationField;
use crate::Source;
use crate::SourceReadError;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, MutationFragmentBuildError>;

/// A parsed schema fragment along with the source text it was parsed from.
///
/// Parsing only checks GraphQL syntax; whether the fragment declares exactly
/// one mutation field is checked by [`MutationFragment::mutation_field`].
#[derive(Clone, Debug, PartialEq)]
pub struct MutationFragment {
    document: ast::schema::Document,
    source: Source,
}
impl MutationFragment {
    pub fn document(&self) -> &ast::schema::Document {
        &self.document
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let source = Source::from_file(file_path)
            .map_err(|e| MutationFragmentBuildError::FileReadError(Box::new(e)))?;
        Self::from_source(source)
    }

    pub fn from_source(source: Source) -> Result<Self> {
        let document =
            ast::schema::parse::<String>(source.text())
                .map_err(|err| MutationFragmentBuildError::ParseError {
                    file: source.file_path().map(Path::to_path_buf),
                    err: err.to_string(),
                })?.into_static();

        log::debug!(
            "Parsed schema fragment with {} top-level definitions.",
            document.definitions.len(),
        );
        Ok(Self {
            document,
            source,
        })
    }

    pub fn from_str(content: impl Into<String>) -> Result<Self> {
        Self::from_source(Source::from_text(content))
    }

    /// Validate the fragment and build the [`MutationField`] it declares.
    pub fn mutation_field(
        &self,
    ) -> std::result::Result<MutationField, InvalidMutationFragment> {
        let field = validate_mutation_field(&self.document)?;
        Ok(MutationField::from_ast(self.source.file_path(), field))
    }

    pub fn source(&self) -> &Source {
        &self.source
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MutationFragmentBuildError {
    #[error("Failure while trying to read a schema fragment file from disk: {0}")]
    FileReadError(Box<SourceReadError>),

    #[error("Error parsing schema fragment{}: {err}", fmt_file(.file))]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(transparent)]
    InvalidMutationFragment(#[from] InvalidMutationFragment),
}

fn fmt_file(file: &Option<PathBuf>) -> String {
    file.as_ref()
        .map(|file| format!(" ({})", file.display()))
        .unwrap_or_default()
}

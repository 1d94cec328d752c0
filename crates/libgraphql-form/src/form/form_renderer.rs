use crate::form::MutationForm;
use crate::form::MutationFormOptions;
use crate::mutation::MutationFragment;
use crate::mutation::MutationFragmentBuildError;
use askama::Template;
use thiserror::Error;

type Result<T> = std::result::Result<T, FormRenderError>;

#[derive(Template)]
#[template(path = "mutation_form.html")]
struct MutationFormTemplate<'a> {
    form: &'a MutationForm,
}

#[derive(Template)]
#[template(path = "invalid_fragment_warning.html")]
struct InvalidFragmentWarningTemplate;

impl MutationForm {
    pub fn render_html(&self) -> Result<String> {
        log::trace!(
            "Rendering form for `{}` with {} inputs.",
            self.mutation_field.name(),
            self.fields.len(),
        );
        Ok(MutationFormTemplate { form: self }.render()?)
    }
}

/// The markup rendered in place of a form when the fragment doesn't declare
/// exactly one mutation field.
pub fn invalid_fragment_warning_html() -> Result<String> {
    Ok(InvalidFragmentWarningTemplate.render()?)
}

/// Parse a schema fragment and render its form, or render
/// [`invalid_fragment_warning_html`] if the fragment parses but doesn't
/// declare exactly one mutation field.
pub fn render_fragment_html(
    content: impl Into<String>,
    options: MutationFormOptions,
) -> Result<String> {
    let fragment = MutationFragment::from_str(content)?;
    match MutationForm::from_fragment(&fragment, options) {
        Ok(form) => form.render_html(),
        Err(err) => {
            log::warn!("{err}");
            invalid_fragment_warning_html()
        },
    }
}

#[derive(Debug, Error)]
pub enum FormRenderError {
    #[error(transparent)]
    FragmentBuildError(#[from] MutationFragmentBuildError),

    #[error("Failed to render HTML template: {0}")]
    TemplateError(#[from] askama::Error),
}

mod form_field;
mod form_renderer;
mod http_method;
mod mutation_form;
mod mutation_form_options;

pub use form_field::FormField;
pub use form_renderer::FormRenderError;
pub use form_renderer::invalid_fragment_warning_html;
pub use form_renderer::render_fragment_html;
pub use http_method::HttpMethod;
pub use http_method::ParseHttpMethodError;
pub use mutation_form::MutationForm;
pub use mutation_form_options::DEFAULT_ACTION;
pub use mutation_form_options::MutationFormOptions;

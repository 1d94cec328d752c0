use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_form::form::DEFAULT_ACTION;
use libgraphql_form::form::HttpMethod;
use libgraphql_form::form::invalid_fragment_warning_html;
use libgraphql_form::form::MutationForm;
use libgraphql_form::form::MutationFormOptions;
use libgraphql_form::mutation::MutationFragment;
use libgraphql_form::types::InputKind;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        default_value=DEFAULT_ACTION,
        help="The URL the form submits to.",
        long,
    )]
    action: String,

    #[arg(
        help="Map a scalar type name to an input kind (checkbox, \
             datetime-local, number, or text). May be repeated.",
        long,
        value_name="SCALAR=KIND",
        value_parser=super::parse_input_kind_mapping,
    )]
    input_kind: Vec<(String, InputKind)>,

    #[arg(
        default_value_t=HttpMethod::Post,
        help="The HTTP method the form submits with.",
        long,
    )]
    method: HttpMethod,

    #[arg(
        help="Don't include the fragment's source text beneath the form.",
        long,
    )]
    no_source: bool,

    #[arg(
        help="Write the rendered HTML to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Path to a schema fragment defining exactly one mutation field.",
        name="SCHEMA_FILE",
    )]
    schema_file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let fragment = match MutationFragment::from_file(&self.schema_file) {
            Ok(fragment) => fragment,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let options = MutationFormOptions::default()
            .with_action(self.action)
            .with_input_kinds(super::input_kind_table(&self.input_kind))
            .with_method(self.method)
            .with_show_source(!self.no_source);
        let (html, is_valid) = match MutationForm::from_fragment(&fragment, options) {
            Ok(form) => (form.render_html(), true),
            Err(e) => {
                log::warn!("{} {e}", output_utils::WARNING_SIGN);
                (invalid_fragment_warning_html(), false)
            },
        };
        let html = match html {
            Ok(html) => html,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        if let Some(output) = &self.output {
            if let Err(e) = std::fs::write(output, &html) {
                return CommandResult::stderr(format_args!(
                    "{} Failed to write {output:?}: {e}",
                    output_utils::RED_X,
                ));
            }
            log::info!("Wrote rendered form to {output:?}.");
            return if is_valid {
                CommandResult::success()
            } else {
                CommandResult::stderr(format_args!(
                    "{} {:?} does not define exactly one mutation field.",
                    output_utils::RED_X,
                    self.schema_file,
                ))
            };
        }

        let html = html.trim_end();
        if is_valid {
            CommandResult::stdout(format_args!("{html}"))
        } else {
            CommandResult::failed_stdout(format_args!("{html}"))
        }
    }
}

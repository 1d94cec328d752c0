use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_form::form::MutationForm;
use libgraphql_form::form::MutationFormOptions;
use libgraphql_form::types::InputKind;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[arg(
        help="Map a scalar type name to an input kind (checkbox, \
             datetime-local, number, or text). May be repeated.",
        long,
        value_name="SCALAR=KIND",
        value_parser=super::parse_input_kind_mapping,
    )]
    input_kind: Vec<(String, InputKind)>,

    #[arg(
        help="Path to a schema fragment defining exactly one mutation field.",
        name="SCHEMA_FILE",
    )]
    schema_file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let options = MutationFormOptions::default()
            .with_input_kinds(super::input_kind_table(&self.input_kind));
        let form = match MutationForm::from_file(&self.schema_file, options) {
            Ok(form) => form,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let field = form.mutation_field();
        let mut out = format!("{}: {}\n", field.name(), field.return_type());
        if let Some(description) = field.description() {
            out.push_str(&format!("  {description}\n"));
        }

        let name_width = form.fields().iter().map(|f| f.name().len()).max().unwrap_or(0);
        let type_width = form.fields().iter().map(|f| f.placeholder().len()).max().unwrap_or(0);
        for form_field in form.fields() {
            out.push_str(&format!(
                "  {:name_width$}  {:type_width$}  {}",
                form_field.name(),
                form_field.placeholder(),
                form_field.input_kind(),
            ));
            if form_field.required() {
                out.push_str("  (required)");
            }
            out.push('\n');
        }

        CommandResult::stdout(format_args!("{}", out.trim_end()))
    }
}

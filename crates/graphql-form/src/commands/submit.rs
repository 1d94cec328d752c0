use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_form::form::HttpMethod;
use libgraphql_form::form::MutationForm;
use libgraphql_form::form::MutationFormOptions;
use libgraphql_form::operation::FormSubmission;
use libgraphql_form::operation::MutationOperation;
use libgraphql_form::operation::MutationRequest;
use libgraphql_form::types::InputKind;
use libgraphql_form::Source;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SubmitCmd {
    #[arg(
        help="Print the request instead of sending it.",
        long,
    )]
    dry_run: bool,

    #[arg(
        help="Absolute URL of the GraphQL endpoint to send the mutation to. \
             Required unless --dry-run is given.",
        long,
        required_unless_present="dry_run",
    )]
    endpoint: Option<String>,

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
        help="The HTTP method used to send the mutation.",
        long,
    )]
    method: HttpMethod,

    #[arg(
        help="Path to a file containing the mutation operation to send. When \
             omitted, an operation is generated from the mutation field.",
        long,
    )]
    operation: Option<PathBuf>,

    #[arg(
        help="Path to a schema fragment defining exactly one mutation field.",
        name="SCHEMA_FILE",
    )]
    schema_file: PathBuf,

    #[arg(
        help="A form value as `NAME=VALUE`. May be repeated.",
        long="value",
        value_name="NAME=VALUE",
    )]
    values: Vec<String>,
}
impl SubmitCmd {
    fn build_request(&self) -> anyhow::Result<MutationRequest> {
        let mut options = MutationFormOptions::default()
            .with_input_kinds(super::input_kind_table(&self.input_kind))
            .with_method(self.method);
        if let Some(endpoint) = &self.endpoint {
            options = options.with_action(endpoint);
        }
        let form = MutationForm::from_file(&self.schema_file, options)?;

        let operation = self.operation.as_ref()
            .map(|path| -> anyhow::Result<MutationOperation> {
                let source = Source::from_file(path)?;
                Ok(MutationOperation::from_str(source.text())?)
            })
            .transpose()?;

        let mut submission = FormSubmission::new();
        for pair in &self.values {
            submission.insert_pair(pair)?;
        }

        Ok(form.build_request(operation.as_ref(), &submission)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for SubmitCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        if self.dry_run {
            return match request.body.to_json_pretty() {
                Ok(body) => CommandResult::stdout(format_args!(
                    "{} {}\n{body}",
                    request.method,
                    request.endpoint,
                )),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize request: {e}",
                    output_utils::RED_X,
                )),
            };
        }

        match send(&request).await {
            Ok(response) if !response.status.is_success() =>
                CommandResult::stderr(format_args!(
                    "{} Endpoint responded with {}:\n{}",
                    output_utils::RED_X,
                    response.status,
                    response.body,
                )),
            Ok(response) if response.has_errors =>
                CommandResult::failed_stdout(format_args!("{}", response.body)),
            Ok(response) => CommandResult::stdout(format_args!("{}", response.body)),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to send mutation to {}: {e:#}",
                output_utils::RED_X,
                request.endpoint,
            )),
        }
    }
}

struct SubmitResponse {
    /// Pretty-printed if the endpoint responded with JSON.
    body: String,
    /// Whether the response carried a GraphQL `errors` list.
    has_errors: bool,
    status: reqwest::StatusCode,
}

async fn send(request: &MutationRequest) -> anyhow::Result<SubmitResponse> {
    let url = reqwest::Url::parse(&request.endpoint)?;
    let client = reqwest::Client::new();
    let builder = match request.method {
        HttpMethod::Get => client.get(url).query(&request.body.to_query_params()?),
        HttpMethod::Delete => client.delete(url).json(&request.body),
        HttpMethod::Patch => client.patch(url).json(&request.body),
        HttpMethod::Post => client.post(url).json(&request.body),
        HttpMethod::Put => client.put(url).json(&request.body),
    };

    log::debug!("Sending {} request to `{}`...", request.method, request.endpoint);
    let response = builder.send().await?;
    let status = response.status();
    let text = response.text().await?;
    log::debug!("Received {status} response ({} bytes).", text.len());

    Ok(match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(json) => SubmitResponse {
            body: serde_json::to_string_pretty(&json)?,
            has_errors: json.get("errors").is_some_and(|errors| !errors.is_null()),
            status,
        },
        Err(_) => SubmitResponse {
            body: text,
            has_errors: false,
            status,
        },
    })
}

mod check;
mod inspect;
mod render;
mod submit;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use inspect::InspectCmd;
use libgraphql_form::types::InputKind;
use libgraphql_form::types::InputKindTable;
use render::RenderCmd;
use submit::SubmitCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Check that schema fragments each define exactly one mutation field.
    Check(Box<CheckCmd>),
    /// Print the arguments, resolved types, and input kinds of a fragment's
    /// mutation field.
    Inspect(Box<InspectCmd>),
    /// Render the HTML form for a fragment's mutation field.
    Render(Box<RenderCmd>),
    /// Build (and optionally send) the mutation request for a set of form
    /// values.
    Submit(Box<SubmitCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Inspect(cmd) => cmd.run(cli).await,
            Self::Render(cmd) => cmd.run(cli).await,
            Self::Submit(cmd) => cmd.run(cli).await,
        }
    }
}

/// Parse a `--input-kind SCALAR=KIND` mapping.
fn parse_input_kind_mapping(arg: &str) -> Result<(String, InputKind), String> {
    let (scalar_name, kind) = arg.split_once('=')
        .ok_or_else(|| format!("expected `SCALAR=KIND`, found `{arg}`"))?;
    let kind = kind.parse::<InputKind>().map_err(|e| e.to_string())?;
    Ok((scalar_name.to_string(), kind))
}

/// The default input-kind table extended with any `--input-kind` mappings.
fn input_kind_table(mappings: &[(String, InputKind)]) -> InputKindTable {
    mappings.iter().fold(
        InputKindTable::default(),
        |table, (scalar_name, kind)| table.with_mapping(scalar_name, *kind),
    )
}

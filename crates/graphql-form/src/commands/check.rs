use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_form::mutation::MutationFragment;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema fragment files or directories \
             containing schema fragment files to check.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CheckCmd {
    /// Find all fragment files at or under each path argument. A single file
    /// argument is always checked, whatever its extension.
    fn collect_file_paths(&self) -> Result<Vec<PathBuf>, walkdir::Error> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            if path.is_file() {
                file_paths.push(path.to_owned());
                continue;
            }

            for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
                let entry = entry?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_graphql_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()));
                if has_graphql_ext {
                    log::trace!("Found fragment file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                }
            }
        }
        Ok(file_paths)
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let file_paths = match self.collect_file_paths() {
            Ok(file_paths) => file_paths,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to scan input paths: {e}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Found {} fragment files to check.", file_paths.len());

        let mut failures = vec![];
        for file_path in &file_paths {
            let result = MutationFragment::from_file(file_path)
                .map_err(|e| e.to_string())
                .and_then(|fragment| fragment.mutation_field().map_err(|e| e.to_string()));
            match result {
                Ok(field) => log::debug!(
                    "{file_path:?} defines mutation field `{}`.",
                    field.name(),
                ),
                Err(err) => failures.push(format!("  * {}: {err}", file_path.display())),
            }
        }

        if failures.is_empty() {
            CommandResult::stdout(format_args!(
                "{} All {} fragments define exactly one mutation field.",
                output_utils::GREEN_CHECK,
                file_paths.len(),
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{} {} of {} fragments are invalid:\n{}",
                output_utils::RED_X,
                failures.len(),
                file_paths.len(),
                failures.join("\n"),
            ))
        }
    }
}

mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

/// Pick the log level from `--verbose` or the `LOG_LEVEL` env var. An
/// unrecognized `LOG_LEVEL` is reported as a warning once logging is set up.
fn log_level(cli: &Cli) -> (tracing::Level, Option<String>) {
    if cli.verbose {
        return (tracing::Level::DEBUG, None);
    }

    match std::env::var("LOG_LEVEL").map(|s| s.trim().to_ascii_uppercase()) {
        Ok(level) => match level.as_str() {
            "DEBUG" | "VERBOSE" => (tracing::Level::DEBUG, None),
            "INFO" => (tracing::Level::INFO, None),
            "TRACE" => (tracing::Level::TRACE, None),
            "WARN" => (tracing::Level::WARN, None),
            "ERROR" => (tracing::Level::ERROR, None),
            other => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`"
                )),
            ),
        },
        Err(_) => (DEFAULT_LOG_LEVEL, None),
    }
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) = log_level(cli);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

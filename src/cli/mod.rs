//! CLI module.
//!
//! - Argument parsing
//! - Version and help output
//! - One-shot assessment and health modes
//!
//! # Usage
//!
//! ```ignore
//! use stdassess::cli::{parse_args, run_cli_command, run_info_command};
//!
//! let args = parse_args(std::env::args())?;
//! if run_info_command(&args.command) {
//!     return Ok(());
//! }
//! // ... configuration and logging ...
//! if let Some(result) = run_cli_command(&args.command, &config) {
//!     // one-shot mode ran
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod oneshot;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use version::{version_string, VERSION};

use color_eyre::Result;

use crate::adapters::ReqwestHttpClient;
use crate::client::AssessClient;
use crate::config::AssessConfig;

/// Handle commands that need neither configuration nor logging.
///
/// Returns `true` if the command was handled.
pub fn run_info_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            true
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            true
        }
        _ => false,
    }
}

/// Run a one-shot command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (or an info command)
/// * `Some(Ok(success))` - If a one-shot command ran; `success` is false when
///   the assessment or probe failed
/// * `Some(Err(e))` - If the runtime could not be started
pub fn run_cli_command(command: &CliCommand, config: &AssessConfig) -> Option<Result<bool>> {
    let runtime = match command {
        CliCommand::Health | CliCommand::Assess { .. } | CliCommand::AssessContent { .. } => {
            match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => return Some(Err(err.into())),
            }
        }
        CliCommand::Version | CliCommand::Help | CliCommand::RunTui => return None,
    };

    let client = AssessClient::from_config(config, ReqwestHttpClient::new());
    let result = match command {
        CliCommand::Health => runtime.block_on(oneshot::run_health(&client)),
        CliCommand::Assess { title, html } => {
            runtime.block_on(oneshot::run_assess(&client, title, *html))
        }
        CliCommand::AssessContent { content, language } => {
            runtime.block_on(oneshot::run_assess_content(&client, content, *language))
        }
        CliCommand::Version | CliCommand::Help | CliCommand::RunTui => return None,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(&CliCommand::RunTui, &AssessConfig::default());
        assert!(result.is_none());
    }

    #[test]
    fn test_info_commands() {
        assert!(run_info_command(&CliCommand::Version));
        assert!(run_info_command(&CliCommand::Help));
        assert!(!run_info_command(&CliCommand::RunTui));
        assert!(!run_info_command(&CliCommand::Health));
    }
}

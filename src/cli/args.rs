//! Command-line argument parsing.
//!
//! Hand-rolled: a handful of flags, most taking one value.

use thiserror::Error;

use crate::models::Language;

/// Usage text for `--help` and argument errors.
pub const USAGE: &str = "\
Usage: stdassess [OPTIONS]

Without options, starts the interactive assessment screen.

Options:
  --title <TEXT>      Assess a standard by name and print the result
  --html              With --title, print the comparison table as HTML
  --content <TEXT>    Assess free-text standard content
  --lang <zh-cn|en>   Output language for --content (default zh-cn)
  --health            Check whether the backend is reachable
  --url <URL>         Backend base URL (overrides STDASSESS_BASE_URL)
  -V, --version       Print version
  -h, --help          Print this help";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Probe the backend
    Health,
    /// One-shot primary assessment
    Assess { title: String, html: bool },
    /// One-shot secondary assessment
    AssessContent { content: String, language: Language },
    /// Run the TUI application (default)
    RunTui,
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--url` override
    pub base_url: Option<String>,
}

/// Argument errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown language '{0}', expected zh-cn or en")]
    UnknownLanguage(String),

    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("--title and --content cannot be combined")]
    ConflictingModes,

    #[error("{0} only applies to {1}")]
    Orphaned(&'static str, &'static str),
}

/// Parse command-line arguments.
///
/// `--version` and `--help` win over everything else, wherever they
/// appear.
///
/// # Examples
///
/// ```
/// use stdassess::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["stdassess".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut title = None;
    let mut content = None;
    let mut language = None;
    let mut html = false;
    let mut health = false;
    let mut base_url = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                return Ok(CliArgs {
                    command: CliCommand::Version,
                    base_url: None,
                })
            }
            "--help" | "-h" => {
                return Ok(CliArgs {
                    command: CliCommand::Help,
                    base_url: None,
                })
            }
            "--title" => title = Some(value_for(&arg, args.next())?),
            "--content" => content = Some(value_for(&arg, args.next())?),
            "--lang" => {
                let value = value_for(&arg, args.next())?;
                language = Some(
                    Language::parse(&value).ok_or(ArgsError::UnknownLanguage(value))?,
                );
            }
            "--url" => base_url = Some(value_for(&arg, args.next())?),
            "--html" => html = true,
            "--health" => health = true,
            _ => return Err(ArgsError::UnknownOption(arg)),
        }
    }

    let command = match (title, content) {
        (Some(_), Some(_)) => return Err(ArgsError::ConflictingModes),
        (Some(title), None) => {
            if language.is_some() {
                return Err(ArgsError::Orphaned("--lang", "--content"));
            }
            CliCommand::Assess { title, html }
        }
        (None, Some(content)) => {
            if html {
                return Err(ArgsError::Orphaned("--html", "--title"));
            }
            CliCommand::AssessContent {
                content,
                language: language.unwrap_or_default(),
            }
        }
        (None, None) => {
            if html {
                return Err(ArgsError::Orphaned("--html", "--title"));
            }
            if language.is_some() {
                return Err(ArgsError::Orphaned("--lang", "--content"));
            }
            if health {
                CliCommand::Health
            } else {
                CliCommand::RunTui
            }
        }
    };

    Ok(CliArgs { command, base_url })
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ArgsError> {
    value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        let args: Vec<String> = std::iter::once("stdassess")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse(&[]).unwrap();
        assert_eq!(parsed.command, CliCommand::RunTui);
        assert_eq!(parsed.base_url, None);
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
        assert_eq!(
            parse(&["--title", "x", "-V"]).unwrap().command,
            CliCommand::Version
        );
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]).unwrap().command, CliCommand::Help);
    }

    #[test]
    fn test_parse_title() {
        let parsed = parse(&["--title", "ISO 9001", "--url", "http://h:1"]).unwrap();
        assert_eq!(
            parsed.command,
            CliCommand::Assess {
                title: "ISO 9001".to_string(),
                html: false
            }
        );
        assert_eq!(parsed.base_url.as_deref(), Some("http://h:1"));
    }

    #[test]
    fn test_parse_title_html() {
        let parsed = parse(&["--html", "--title", "ISO 9001"]).unwrap();
        assert_eq!(
            parsed.command,
            CliCommand::Assess {
                title: "ISO 9001".to_string(),
                html: true
            }
        );
    }

    #[test]
    fn test_parse_content_with_language() {
        let parsed = parse(&["--content", "text", "--lang", "en"]).unwrap();
        assert_eq!(
            parsed.command,
            CliCommand::AssessContent {
                content: "text".to_string(),
                language: Language::En
            }
        );
    }

    #[test]
    fn test_parse_content_default_language() {
        let parsed = parse(&["--content", "text"]).unwrap();
        assert_eq!(
            parsed.command,
            CliCommand::AssessContent {
                content: "text".to_string(),
                language: Language::ZhCn
            }
        );
    }

    #[test]
    fn test_parse_health() {
        assert_eq!(parse(&["--health"]).unwrap().command, CliCommand::Health);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&["--title"]),
            Err(ArgsError::MissingValue("--title".to_string()))
        );
        assert_eq!(
            parse(&["--content", "x", "--lang", "fr"]),
            Err(ArgsError::UnknownLanguage("fr".to_string()))
        );
        assert_eq!(
            parse(&["--bogus"]),
            Err(ArgsError::UnknownOption("--bogus".to_string()))
        );
        assert_eq!(
            parse(&["--title", "a", "--content", "b"]),
            Err(ArgsError::ConflictingModes)
        );
        assert_eq!(
            parse(&["--html"]),
            Err(ArgsError::Orphaned("--html", "--title"))
        );
        assert_eq!(
            parse(&["--title", "a", "--lang", "en"]),
            Err(ArgsError::Orphaned("--lang", "--content"))
        );
    }
}

//! Configuration loading helpers for the Weft CLI.
//!
//! Configuration flags lead the argument list; everything from the first
//! other token onwards belongs to the query parser.

use std::ffi::{OsStr, OsString};

use ortho_config::OrthoConfig;
use weft_config::Config;

use crate::AppError;

/// CLI flags recognised by the configuration loader.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--max-scan-lines",
];

pub(crate) trait ConfigLoader {
    /// Loads configuration from the leading configuration arguments.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAction {
    Include { needs_value: bool },
    Stop,
}

fn process_config_flag(argument: &OsStr) -> FlagAction {
    let text = argument.to_string_lossy();
    let (flag, inline_value) = match text.split_once('=') {
        Some((flag, _)) => (flag, true),
        None => (&*text, false),
    };
    if !CONFIG_CLI_FLAGS.contains(&flag) {
        return FlagAction::Stop;
    }
    FlagAction::Include {
        needs_value: !inline_value,
    }
}

/// Arguments divided between the configuration loader and the query parser.
/// Both halves keep the program name.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) query_arguments: Vec<OsString>,
}

pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let Some((program, rest)) = args.split_first() else {
        return ConfigArgumentSplit::default();
    };

    let mut config_arguments = vec![program.clone()];
    let mut remaining = rest.iter().peekable();
    while let Some(argument) = remaining.peek() {
        match process_config_flag(argument) {
            FlagAction::Include { needs_value } => {
                config_arguments.extend(remaining.next().cloned());
                if needs_value {
                    config_arguments.extend(remaining.next().cloned());
                }
            }
            FlagAction::Stop => break,
        }
    }

    let mut query_arguments = vec![program.clone()];
    query_arguments.extend(remaining.cloned());
    ConfigArgumentSplit {
        config_arguments,
        query_arguments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[rstest]
    #[case("--log-filter=debug", FlagAction::Include { needs_value: false })]
    #[case("--log-filter", FlagAction::Include { needs_value: true })]
    #[case("match-right", FlagAction::Stop)]
    #[case("--line", FlagAction::Stop)]
    #[case("--no-block-comments", FlagAction::Stop)]
    fn classifies_flags(#[case] argument: &str, #[case] expected: FlagAction) {
        assert_eq!(process_config_flag(OsStr::new(argument)), expected);
    }

    #[test]
    fn leading_config_flags_are_split_off() {
        let split = split_config_arguments(&os(&[
            "weft",
            "--log-format",
            "json",
            "--max-scan-lines=40",
            "match-right",
            "a.rs",
            "--line",
            "2",
        ]));
        assert_eq!(
            split.config_arguments,
            os(&["weft", "--log-format", "json", "--max-scan-lines=40"])
        );
        assert_eq!(
            split.query_arguments,
            os(&["weft", "match-right", "a.rs", "--line", "2"])
        );
    }

    #[test]
    fn query_switches_do_not_swallow_the_query() {
        let split = split_config_arguments(&os(&[
            "weft",
            "--log-filter=warn",
            "--no-block-comments",
            "match-right",
            "a.c",
        ]));
        assert_eq!(split.config_arguments, os(&["weft", "--log-filter=warn"]));
        assert_eq!(
            split.query_arguments,
            os(&["weft", "--no-block-comments", "match-right", "a.c"])
        );
    }

    #[test]
    fn config_flags_after_the_query_stay_with_it() {
        let split = split_config_arguments(&os(&["weft", "tab-out", "--log-filter", "x"]));
        assert_eq!(split.config_arguments, os(&["weft"]));
        assert_eq!(
            split.query_arguments,
            os(&["weft", "tab-out", "--log-filter", "x"])
        );
    }
}

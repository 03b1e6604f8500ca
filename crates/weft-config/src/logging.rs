//! Log output format selection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supported logging output formats.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
    /// Human-readable single line output.
    #[default]
    Compact,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("json", LogFormat::Json)]
    #[case("COMPACT", LogFormat::Compact)]
    fn parses_case_insensitively(#[case] text: &str, #[case] expected: LogFormat) {
        assert_eq!(text.parse::<LogFormat>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_formats() {
        let result: Result<LogFormat, LogFormatParseError> = "pretty".parse();
        assert!(result.is_err());
    }

    #[test]
    fn displays_in_snake_case() {
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}

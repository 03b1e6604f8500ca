//! Built-in language tables and file-extension detection.

use std::path::Path;

use tracing::error;

use crate::classify::DelimiterPattern;

use super::{LanguageProfile, LanguageProfileBuilder};

/// Identifier of the fallback profile.
pub const PLAIN_TEXT: &str = "plaintext";

/// Language identifiers with a dedicated built-in profile.
pub const BUILTIN_LANGUAGES: &[&str] = &[
    "c",
    "cpp",
    "javascript",
    "jsonc",
    "markdown",
    "python",
    "rust",
    "shellscript",
    "systemverilog",
    "typescript",
    "verilog",
    "yaml",
];

const SLASH_COMMENTS: &[&str] = &[
    "c",
    "cpp",
    "javascript",
    "jsonc",
    "rust",
    "systemverilog",
    "typescript",
    "verilog",
];

const HASH_COMMENTS: &[&str] = &["python", "shellscript", "yaml"];

const SINGLE_QUOTES: &[&str] = &[
    "javascript",
    "jsonc",
    "markdown",
    "python",
    "shellscript",
    "typescript",
    "yaml",
];

/// Normalises a language identifier: trimmed and lowercased.
pub(super) fn normalise(id: &str) -> String {
    id.trim().to_lowercase()
}

pub(super) fn builtin(id: &str) -> LanguageProfile {
    let normalised = normalise(id);
    let key = if BUILTIN_LANGUAGES.contains(&normalised.as_str()) {
        normalised
    } else {
        PLAIN_TEXT.to_owned()
    };

    let mut builder = LanguageProfileBuilder::new(key.clone())
        .ascii_words()
        .pair('(', ')')
        .pair('[', ']')
        .pair('{', '}')
        .quote('"');

    if SLASH_COMMENTS.contains(&key.as_str()) {
        builder = builder.line_comment("//").block_comment("/*", "*/");
    } else if HASH_COMMENTS.contains(&key.as_str()) {
        builder = builder.line_comment("#");
    }
    if SINGLE_QUOTES.contains(&key.as_str()) {
        builder = builder.quote('\'');
    }

    builder.build().unwrap_or_else(|err| {
        // Static tables; reaching this is a regression.
        error!(language = %key, error = %err, "built-in profile rejected");
        LanguageProfile {
            id: key,
            word_ranges: Vec::new(),
            openers: Vec::new(),
            closers: Vec::new(),
            quotes: Vec::new(),
            line_comment: None,
            block_comment: None,
            pattern: DelimiterPattern::empty(),
        }
    })
}

/// Maps a file extension to a built-in language identifier.
///
/// ```
/// use weft_scan::language_for_extension;
///
/// assert_eq!(language_for_extension("RS"), Some("rust"));
/// assert_eq!(language_for_extension("txt"), None);
/// ```
#[must_use]
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let normalised = ext.to_ascii_lowercase();
    let id = match normalised.as_str() {
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "jsonc" | "json5" => "jsonc",
        "md" | "markdown" => "markdown",
        "py" | "pyi" => "python",
        "rs" => "rust",
        "sh" | "bash" | "zsh" => "shellscript",
        "sv" | "svh" => "systemverilog",
        "ts" | "tsx" | "mts" | "cts" => "typescript",
        "v" | "vh" => "verilog",
        "yaml" | "yml" => "yaml",
        _ => return None,
    };
    Some(id)
}

/// Maps a file path to a built-in language identifier by its extension.
#[must_use]
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(language_for_extension)
}

//! LaTeX-style markup cleaning
//!
//! Two stages: `clean_value` runs on every parsed field value, removing
//! typesetting escapes and normalizing whitespace; `strip_commands` runs
//! only on textual fields (title, abstract, unmapped fields) and removes
//! `\command{...}` constructs entirely.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Accent/typesetting escapes: \` \' \~ \^ \= and escaped braces
    static ref ESCAPED_PUNCT: Regex = Regex::new(r"\\[`'~^={}]").unwrap();

    // \command{argument} with a brace-free argument; applied repeatedly so
    // nested commands unwrap from the inside out
    static ref COMMAND_WITH_ARG: Regex = Regex::new(r"\\[a-zA-Z]+\*?\{([^{}]*)\}").unwrap();

    // Bare \command tokens left over after argument unwrapping
    static ref BARE_COMMAND: Regex = Regex::new(r"\\[a-zA-Z]+\*?").unwrap();

    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Generic cleaning applied to every field value at parse time:
/// 1. drop backslash-escaped typesetting punctuation (`` \` ``, `\'`,
///    `\~`, `\^`, `\=`, `\{`, `\}`)
/// 2. unescape the markup-safe characters `\&`, `\%`, `\#`, `\$`, `\_`
/// 3. collapse now-empty brace pairs
/// 4. normalize whitespace runs to single spaces and trim
/// 5. strip one remaining outer brace pair, if the value is still wrapped
pub fn clean_value(input: &str) -> String {
    let mut result = ESCAPED_PUNCT.replace_all(input, "").to_string();

    for (escaped, plain) in [
        ("\\&", "&"),
        ("\\%", "%"),
        ("\\#", "#"),
        ("\\$", "$"),
        ("\\_", "_"),
    ] {
        result = result.replace(escaped, plain);
    }

    while result.contains("{}") {
        result = result.replace("{}", "");
    }

    result = WHITESPACE_RUN.replace_all(&result, " ").trim().to_string();
    strip_outer_braces(&result)
}

/// Remove LaTeX commands from a textual value: `\cmd{arg}` becomes `arg`,
/// bare `\cmd` tokens disappear, stray braces are dropped, whitespace is
/// normalized.
pub fn strip_commands(input: &str) -> String {
    let mut result = input.to_string();

    loop {
        let next = COMMAND_WITH_ARG.replace_all(&result, "$1").to_string();
        if next == result {
            break;
        }
        result = next;
    }

    result = BARE_COMMAND.replace_all(&result, "").to_string();
    result = result.replace(['{', '}'], "");
    WHITESPACE_RUN.replace_all(&result, " ").trim().to_string()
}

/// Strip a single outer `{...}` pair when the opening brace is matched by
/// the final closing brace.
fn strip_outer_braces(value: &str) -> String {
    let bytes = value.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'{' || bytes[bytes.len() - 1] != b'}' {
        return value.to_string();
    }

    // The leading brace must close at the end, not earlier
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 && i != bytes.len() - 1 {
                    return value.to_string();
                }
            }
            _ => {}
        }
    }

    value[1..value.len() - 1].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_escaped_punctuation() {
        assert_eq!(clean_value(r"Garc\'ia"), "Garcia");
        assert_eq!(clean_value(r"M\~uller"), "Muller");
    }

    #[test]
    fn test_clean_unescapes_markup_chars() {
        assert_eq!(clean_value(r"Smith \& Jones"), "Smith & Jones");
        assert_eq!(clean_value(r"50\% faster"), "50% faster");
    }

    #[test]
    fn test_clean_collapses_empty_braces() {
        assert_eq!(clean_value("value{}"), "value");
    }

    #[test]
    fn test_clean_normalizes_whitespace() {
        assert_eq!(clean_value("a   b\n\tc"), "a b c");
    }

    #[test]
    fn test_clean_strips_single_outer_pair() {
        assert_eq!(clean_value("{Wrapped Value}"), "Wrapped Value");
        // Two adjacent groups are not an outer pair
        assert_eq!(clean_value("{A}{B}"), "{A}{B}");
    }

    #[test]
    fn test_strip_command_with_argument() {
        assert_eq!(strip_commands(r"The \textbf{Bold} Claim"), "The Bold Claim");
    }

    #[test]
    fn test_strip_nested_commands() {
        assert_eq!(strip_commands(r"\emph{\textbf{Very} Bold}"), "Very Bold");
    }

    #[test]
    fn test_strip_bare_command() {
        assert_eq!(strip_commands(r"price \euro 50"), "price 50");
    }

    #[test]
    fn test_strip_remaining_braces() {
        assert_eq!(strip_commands("The {Great} Paper"), "The Great Paper");
    }

    #[test]
    fn test_strip_plain_text_untouched() {
        assert_eq!(strip_commands("No markup here"), "No markup here");
    }
}

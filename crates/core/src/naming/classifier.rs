//! Ordered structural rules mapping a filename stem to a [`PatternType`].

use std::sync::LazyLock;

use regex::Regex;

use super::split_name;
use super::types::PatternType;

struct Rule {
    re: Regex,
    pattern: PatternType,
    format: &'static str,
}

/// Leading number plus separator run. Group 1 is the prefix kept on redaction.
pub(super) static NUMBERED_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+[\s\-_.]+)").unwrap());

// First match wins, so more specific shapes must come first.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let rule = |src: &str, pattern, format| Rule {
        re: Regex::new(src).unwrap(),
        pattern,
        format,
    };

    vec![
        rule(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$", PatternType::DailyNote, "YYYY-MM-DD"),
        rule(r"^[0-9]{4}\.[0-9]{2}\.[0-9]{2}$", PatternType::DailyNote, "YYYY.MM.DD"),
        rule(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$", PatternType::DailyNote, "MM-DD-YYYY"),
        rule(r"(?i)^[0-9]{4}-W[0-9]{2}$", PatternType::WeeklyNote, "YYYY-Www"),
        rule(r"^[0-9]{14}$", PatternType::Zettelkasten, "YYYYMMDDHHmmss"),
        rule(r"^[0-9]{12}$", PatternType::Timestamp, "YYYYMMDDHHmm"),
        Rule {
            re: NUMBERED_PREFIX_RE.clone(),
            pattern: PatternType::NumberedPrefix,
            format: "NNN - [Title]",
        },
        rule(
            r"(?i)^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$",
            PatternType::Uuid,
            "UUID",
        ),
    ]
});

/// Detect the naming pattern of a file name (extension included).
///
/// Returns the pattern together with a short description of the matched
/// format, e.g. `(PatternType::DailyNote, "YYYY.MM.DD")`.
///
/// # Examples
/// ```
/// use mdindex_core::naming::{PatternType, classify};
///
/// assert_eq!(classify("2024-W03.md"), (PatternType::WeeklyNote, "YYYY-Www"));
/// assert_eq!(classify("Meeting notes.md"), (PatternType::Standard, "[Title]"));
/// ```
pub fn classify(filename: &str) -> (PatternType, &'static str) {
    let (stem, _) = split_name(filename);

    RULES
        .iter()
        .find(|rule| rule.re.is_match(stem))
        .map(|rule| (rule.pattern, rule.format))
        .unwrap_or((PatternType::Standard, "[Title]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-01-15.md", PatternType::DailyNote, "YYYY-MM-DD")]
    #[case("2024.01.15.md", PatternType::DailyNote, "YYYY.MM.DD")]
    #[case("01-15-2024.md", PatternType::DailyNote, "MM-DD-YYYY")]
    #[case("2024-W03.md", PatternType::WeeklyNote, "YYYY-Www")]
    #[case("2024-w52.md", PatternType::WeeklyNote, "YYYY-Www")]
    #[case("20240115143022.md", PatternType::Zettelkasten, "YYYYMMDDHHmmss")]
    #[case("202401151430.md", PatternType::Timestamp, "YYYYMMDDHHmm")]
    #[case("001 - Kickoff.md", PatternType::NumberedPrefix, "NNN - [Title]")]
    #[case("12_chapter.md", PatternType::NumberedPrefix, "NNN - [Title]")]
    #[case("3.intro.md", PatternType::NumberedPrefix, "NNN - [Title]")]
    #[case(
        "a1b2c3d4-e5f6-7890-abcd-ef1234567890.png",
        PatternType::Uuid,
        "UUID"
    )]
    #[case(
        "A1B2C3D4-E5F6-7890-ABCD-EF1234567890.md",
        PatternType::Uuid,
        "UUID"
    )]
    #[case("Project ideas.md", PatternType::Standard, "[Title]")]
    #[case("README", PatternType::Standard, "[Title]")]
    fn test_classify(
        #[case] filename: &str,
        #[case] pattern: PatternType,
        #[case] format: &str,
    ) {
        assert_eq!(classify(filename), (pattern, format));
    }

    #[test]
    fn test_dates_win_over_numbered_prefix() {
        // "2024-01-15" also starts with digits followed by a separator.
        assert_eq!(classify("2024-01-15.md").0, PatternType::DailyNote);
        assert_eq!(classify("2024-W03.md").0, PatternType::WeeklyNote);
    }

    #[test]
    fn test_numbered_prefix_precedes_uuid() {
        // An all-digit first group is caught by the numbered prefix rule.
        let (pattern, _) = classify("12345678-1234-1234-1234-123456789012.md");
        assert_eq!(pattern, PatternType::NumberedPrefix);
    }

    #[test]
    fn test_digit_runs_need_exact_length() {
        assert_eq!(classify("2024011514302.md").0, PatternType::Standard);
        assert_eq!(classify("202401151430221.md").0, PatternType::Standard);
        assert_eq!(classify("12345.md").0, PatternType::Standard);
    }

    #[test]
    fn test_only_extension_is_stripped() {
        // The stem is "2024-01-15.draft", which is not a bare date.
        assert_eq!(classify("2024-01-15.draft.md").0, PatternType::NumberedPrefix);
        assert_eq!(classify("notes.2024-01-15").0, PatternType::Standard);
    }

    #[test]
    fn test_non_ascii_digits_are_not_dates() {
        assert_eq!(classify("٢٠٢٤-٠١-١٥.md").0, PatternType::Standard);
    }
}

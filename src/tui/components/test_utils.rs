//! Test utilities for TUI component and app tests.

/// Strips ANSI escape sequences (such as bucket header colours) from a
/// string.
///
/// # Example
///
/// ```
/// use curricula::tui::components::test_utils::strip_ansi_codes;
///
/// let coloured = "\x1b[32m🎒 Elementary School\x1b[0m";
/// assert_eq!(strip_ansi_codes(coloured), "🎒 Elementary School");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // Skip up to and including the terminating letter.
            for terminator in chars.by_ref() {
                if terminator.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// Returns the rendered lines with ANSI codes and trailing padding removed.
#[must_use]
pub fn plain_lines(rendered: &str) -> Vec<String> {
    strip_ansi_codes(rendered)
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::colour("\x1b[34mblue\x1b[0m", "blue")]
    #[case::stacked("\x1b[1m\x1b[35mbold purple\x1b[0m", "bold purple")]
    #[case::plain("plain text", "plain text")]
    #[case::empty("", "")]
    #[case::only_codes("\x1b[33m\x1b[0m", "")]
    fn strips_escape_sequences(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_ansi_codes(input), expected);
    }

    #[rstest]
    fn plain_lines_trims_padding() {
        assert_eq!(
            plain_lines("\x1b[32mone\x1b[0m   \ntwo  \n"),
            vec!["one", "two"]
        );
    }
}

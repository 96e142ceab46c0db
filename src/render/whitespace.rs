//! Whitespace handling for inline text.
//!
//! Prose text collapses whitespace; code text keeps its line structure with
//! one common indentation removed.

/// Collapse whitespace runs of a prose text node.
///
/// CR and LF read as spaces and a run of them collapses to a single space.
/// With `skip_leading`, whitespace before the first visible character is
/// dropped. Trailing whitespace is kept; paragraphs trim it once at their end.
pub fn collapse(text: &str, skip_leading: bool) -> String {
    let mut result = String::with_capacity(text.len());
    let mut seen_character = false;
    let mut whitespace_previous = false;

    for c in text.chars() {
        let is_whitespace = matches!(c, ' ' | '\r' | '\n');
        if is_whitespace && ((skip_leading && !seen_character) || whitespace_previous) {
            continue;
        }

        if is_whitespace {
            result.push(' ');
            whitespace_previous = true;
        } else {
            result.push(c);
            seen_character = true;
            whitespace_previous = false;
        }
    }

    result
}

/// Split a code text node into lines with its common indentation removed.
///
/// Blank leading and trailing lines are dropped. The indentation of the first
/// non-blank line is stripped from every line; a line indented less loses
/// only the spaces it has.
pub fn preserve(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let Some(start) = lines.iter().position(|line| !is_blank(line)) else {
        return Vec::new();
    };
    let end = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(start);
    let indent = leading_spaces(lines[start]);

    lines[start..=end]
        .iter()
        .map(|line| line[leading_spaces(line).min(indent)..].to_string())
        .collect()
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}

fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_runs() {
        assert_eq!(collapse("  hello   world  \n", true), "hello world ");
        assert_eq!(collapse("a\r\n\r\nb", true), "a b");
    }

    #[test]
    fn test_collapse_keeps_leading_space_mid_paragraph() {
        assert_eq!(collapse("  after", false), " after");
        assert_eq!(collapse("\n\nafter", false), " after");
    }

    #[test]
    fn test_preserve_strips_first_line_indent() {
        let lines = preserve("\n    first\n      second\n");
        assert_eq!(lines, vec!["first", "  second"]);
    }

    #[test]
    fn test_preserve_keeps_interior_blank_lines() {
        let lines = preserve("  a\n\n  b\r\n   \n");
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_preserve_shallow_lines_lose_only_their_spaces() {
        let lines = preserve("    deep\n  shallow\nflush");
        assert_eq!(lines, vec!["deep", "shallow", "flush"]);
    }

    #[test]
    fn test_preserve_blank_text() {
        assert!(preserve("   \n \n").is_empty());
    }
}

//! Card text is pool content and may carry anything. Before it reaches the
//! terminal, control characters are dropped so a topic can't smuggle escape
//! sequences, and each newline becomes its own rendered line.

const TAB: &str = "    ";

/// Splits card text into display-safe lines.
pub fn display_lines(text: &str) -> Vec<String> {
    text.split('\n').map(clean_line).collect()
}

fn clean_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        if c == '\t' {
            out.push_str(TAB);
        } else if !c.is_control() {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_become_lines() {
        assert_eq!(
            display_lines("A\n\n— or —\n\nB"),
            vec!["A", "", "— or —", "", "B"]
        );
    }

    #[test]
    fn test_escape_sequences_are_neutralized() {
        assert_eq!(display_lines("\x1b[31mred\x1b[0m"), vec!["[31mred[0m"]);
        assert_eq!(display_lines("bell\x07\r"), vec!["bell"]);
    }

    #[test]
    fn test_markup_passes_through_verbatim() {
        assert_eq!(display_lines("<b>&</b>"), vec!["<b>&</b>"]);
    }

    #[test]
    fn test_tabs_expand() {
        assert_eq!(display_lines("a\tb"), vec!["a    b"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(display_lines(""), vec![""]);
    }
}

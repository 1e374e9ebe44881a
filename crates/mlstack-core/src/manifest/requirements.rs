//! `requirements.txt` rendering and parsing.

use crate::domain::{COMPARISON_OPERATORS, Stack};

/// One requirement token per line, in stack order.
pub fn render_requirements(stack: &Stack) -> String {
    stack
        .install_tokens()
        .into_iter()
        .map(|token| token + "\n")
        .collect()
}

/// Parse requirement lines back into a stack.
///
/// `name==version` becomes a bare version; any other operator keeps the
/// whole line as the specifier. Blank lines and `#` comments are skipped.
pub fn parse_requirements(text: &str) -> Stack {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(code, _)| code).trim())
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> (String, String) {
    let name_end = line.find(COMPARISON_OPERATORS).unwrap_or(line.len());
    let name = line[..name_end].trim();

    if let Some(version) = line[name_end..].strip_prefix("==") {
        if !version.contains(COMPARISON_OPERATORS) && !version.contains(',') {
            return (name.to_string(), version.trim().to_string());
        }
    }
    (name.to_string(), line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pins_and_passes_constraints() {
        let stack: Stack = [("ultralytics", "ultralytics>=8.3.40"), ("torch", "2.3.1")]
            .into_iter()
            .collect();
        assert_eq!(
            render_requirements(&stack),
            "ultralytics>=8.3.40\ntorch==2.3.1\n"
        );
    }

    #[test]
    fn test_round_trip_mixed_specifiers() {
        let stack: Stack = [
            ("ultralytics", "ultralytics>=10.0.0,<11.0.0"),
            ("torch", "2.4.1+cu124"),
            ("numpy", "numpy~=1.26"),
            ("spacy", "spacy!=3.7.0"),
            ("nltk", "3.8.1"),
        ]
        .into_iter()
        .collect();

        assert_eq!(parse_requirements(&render_requirements(&stack)), stack);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let parsed = parse_requirements("# pinned\n\ntorch==2.1.0  # cpu\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("torch"), Some("2.1.0"));
    }

    #[test]
    fn test_parse_keeps_compound_pins_whole() {
        let parsed = parse_requirements("torch==2.1.0,!=2.1.1\n");
        assert_eq!(parsed.get("torch"), Some("torch==2.1.0,!=2.1.1"));
    }
}

#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod parser;
pub mod pipeline;

extern crate regex;

/// Number of lines shown on each side of the offending line in a context
/// snippet.
pub const CONTEXT_RADIUS: usize = 2;

/// Returns the 1-based column for a byte offset into `text`.
///
/// The column is the distance from the nearest preceding newline, or
/// `offset + 1` when the offset sits on the first line. Token and error
/// columns are both derived through this function so they always agree.
pub fn calculate_column(text: &str, offset: usize) -> u32 {
    match text[..offset].rfind('\n') {
        Some(last_nl) => (offset - last_nl) as u32,
        None => offset as u32 + 1,
    }
}

/// Renders a multi-line snippet around `offset` for diagnostics.
///
/// Shows up to `radius` lines before and after the line containing the
/// offset, numbering each line and marking the offending one with `>>>`
/// plus a caret underneath aligned to the computed column.
pub fn position_context(text: &str, offset: usize, radius: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let line_num = text[..offset].matches('\n').count();

    let start_line = line_num.saturating_sub(radius);
    let end_line = (line_num + radius + 1).min(lines.len());

    let mut context = Vec::new();
    for i in start_line..end_line {
        let prefix = if i == line_num { ">>> " } else { "    " };
        context.push(format!("{}{}: {}", prefix, i + 1, lines[i]));

        if i == line_num {
            let col = calculate_column(text, offset) as usize;
            context.push(format!("{}^", " ".repeat(col + 6)));
        }
    }

    context.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{calculate_column, position_context, CONTEXT_RADIUS};

    #[test]
    fn test_column_on_first_line() {
        let text = "var x = 1;";
        assert_eq!(calculate_column(text, 0), 1);
        assert_eq!(calculate_column(text, 4), 5);
    }

    #[test]
    fn test_column_after_newline() {
        let text = "var x = 1;\nvar y = 2;";
        // Offset 11 is the 'v' starting the second line.
        assert_eq!(calculate_column(text, 11), 1);
        assert_eq!(calculate_column(text, 15), 5);
    }

    #[test]
    fn test_column_at_newline() {
        let text = "ab\ncd";
        assert_eq!(calculate_column(text, 2), 3);
        assert_eq!(calculate_column(text, 3), 1);
    }

    #[test]
    fn test_context_marks_offending_line() {
        let text = "one\ntwo\nthree\nfour\nfive\nsix";
        let context = position_context(text, 8, CONTEXT_RADIUS);

        let lines: Vec<&str> = context.split('\n').collect();
        assert_eq!(lines[0], "    1: one");
        assert_eq!(lines[1], "    2: two");
        assert_eq!(lines[2], ">>> 3: three");
        assert_eq!(lines[3], format!("{}^", " ".repeat(7)));
        assert_eq!(lines[4], "    4: four");
        assert_eq!(lines[5], "    5: five");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_context_clips_at_start_of_file() {
        let text = "first\nsecond\nthird";
        let context = position_context(text, 2, CONTEXT_RADIUS);

        let lines: Vec<&str> = context.split('\n').collect();
        assert_eq!(lines[0], ">>> 1: first");
        assert_eq!(lines[1], format!("{}^", " ".repeat(9)));
        assert_eq!(lines[2], "    2: second");
        assert_eq!(lines[3], "    3: third");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_context_caret_alignment() {
        let text = "x @ y";
        let context = position_context(text, 2, CONTEXT_RADIUS);

        // Column 3, caret padded by col + 6 spaces.
        let lines: Vec<&str> = context.split('\n').collect();
        assert_eq!(lines[1], format!("{}^", " ".repeat(9)));
    }
}

//! UI helper functions

use std::time::Duration;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Hard-wrap preformatted text at `max_width` chars.
///
/// Existing line breaks and indentation are kept; only lines wider than the
/// column are split. Tabs expand to four spaces.
pub fn wrap_preformatted(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for line in text.lines() {
        let line = line.replace('\t', "    ");
        let chars: Vec<char> = line.chars().collect();
        if max_width == 0 || chars.len() <= max_width {
            lines.push(line);
        } else {
            lines.extend(chars.chunks(max_width).map(|chunk| chunk.iter().collect::<String>()));
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Keep at most `max_lines` lines. When some are dropped, the last kept line
/// becomes a marker saying how many are hidden.
pub fn clip_lines(mut lines: Vec<String>, max_lines: usize) -> Vec<String> {
    if max_lines == 0 || lines.len() <= max_lines {
        return lines;
    }

    let hidden = lines.len() - max_lines + 1;
    lines.truncate(max_lines - 1);
    lines.push(format!("… {hidden} more lines"));
    lines
}

/// Number of rows `text` occupies when wrapped at `width` columns
pub fn wrapped_height(text: &str, width: usize) -> usize {
    text.split('\n')
        .map(|line| wrap_text(line, width).len())
        .sum()
}

/// Elapsed time as "7s" below a minute, "2m 05s" above
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    if total_secs < 60 {
        format!("{}s", total_secs)
    } else {
        format!("{}m {:02}s", total_secs / 60, total_secs % 60)
    }
}

/// Braille spinner frame for the given animation tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_fits_on_one_line() {
        let result = wrap_text("hello world", 20);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("hello world foo bar", 10);
        assert_eq!(result, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        let result = wrap_text("größe größe", 11);
        assert_eq!(result, vec!["größe größe"]);
    }

    #[test]
    fn test_wrapped_height_counts_explicit_newlines() {
        assert_eq!(wrapped_height("one\ntwo three", 5), 3);
        assert_eq!(wrapped_height("", 5), 1);
    }

    #[test]
    fn test_wrap_preformatted_splits_by_chars() {
        let result = wrap_preformatted("SELECT id FROM t", 6);
        assert_eq!(result, vec!["SELECT", " id FR", "OM t"]);
        assert_eq!(result.concat(), "SELECT id FROM t");
    }

    #[test]
    fn test_wrap_preformatted_keeps_line_breaks_and_indent() {
        let result = wrap_preformatted("if x:\n    return y", 20);
        assert_eq!(result, vec!["if x:", "    return y"]);
    }

    #[test]
    fn test_wrap_preformatted_expands_tabs() {
        assert_eq!(wrap_preformatted("\tx", 10), vec!["    x"]);
    }

    #[test]
    fn test_clip_lines_marks_hidden_lines() {
        let lines: Vec<String> = (1..=5).map(|i| format!("line {i}")).collect();
        assert_eq!(clip_lines(lines.clone(), 5), lines);
        assert_eq!(
            clip_lines(lines, 3),
            vec!["line 1", "line 2", "… 3 more lines"]
        );
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0s");
        assert_eq!(format_elapsed(Duration::from_millis(7_900)), "7s");
    }

    #[test]
    fn test_format_elapsed_minutes() {
        assert_eq!(format_elapsed(Duration::from_secs(125)), "2m 05s");
        assert_eq!(format_elapsed(Duration::from_secs(3661)), "61m 01s");
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(10));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}

//! Reviewing screen: prompt editor, error banner and rules table

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::helpers::wrapped_height;
use super::rules::render_rules;
use crate::app::ReviewSession;
use crate::editor::PromptEditor;
use crate::models::ReviewFocus;
use crate::theme::{
    BG_PRIMARY, BORDER_SUBTLE, CYAN_PRIMARY, RED_ERROR, ROUNDED_BORDERS, TEXT_PRIMARY,
};

pub fn render_reviewing(frame: &mut Frame, area: Rect, session: &ReviewSession, tick: u64) {
    let error = session.fetch.error_message();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),                           // Prompt editor
            Constraint::Length(if error.is_some() { 1 } else { 0 }), // Error banner
            Constraint::Min(5),                                   // Rules table
        ])
        .split(area);

    render_prompt_editor(frame, layout[0], &session.editor, session.focus == ReviewFocus::Prompt);

    if let Some(message) = error {
        let banner = Paragraph::new(format!(" {} ", message))
            .style(Style::default().fg(BG_PRIMARY).bg(RED_ERROR).add_modifier(Modifier::BOLD));
        frame.render_widget(banner, layout[1]);
    }

    render_rules(frame, layout[2], session, tick);
}

fn render_prompt_editor(frame: &mut Frame, area: Rect, editor: &PromptEditor, focused: bool) {
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let block = Block::default()
        .title(" Prompt (editable) ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    let cursor_row = cursor_visual_row(editor, inner.width as usize);
    let scroll = cursor_row.saturating_sub(inner.height.saturating_sub(1) as usize);

    let paragraph = Paragraph::new(editor_lines(editor, focused))
        .style(Style::default().fg(TEXT_PRIMARY))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Editor text as lines, with a reversed cell marking the cursor when focused
fn editor_lines(editor: &PromptEditor, focused: bool) -> Vec<Line<'static>> {
    let (cursor_line, cursor_col) = editor.cursor_line_col();
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    editor
        .text()
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if !focused || i != cursor_line {
                return Line::from(line.to_string());
            }
            let before: String = line.chars().take(cursor_col).collect();
            let mut rest = line.chars().skip(cursor_col);
            let at = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
            let after: String = rest.collect();
            Line::from(vec![
                Span::raw(before),
                Span::styled(at, cursor_style),
                Span::raw(after),
            ])
        })
        .collect()
}

/// Approximate wrapped row of the cursor, used to keep it scrolled into view
fn cursor_visual_row(editor: &PromptEditor, width: usize) -> usize {
    let (cursor_line, cursor_col) = editor.cursor_line_col();
    let rows_above: usize = editor
        .text()
        .split('\n')
        .take(cursor_line)
        .map(|line| wrapped_height(line, width))
        .sum();
    rows_above + cursor_col / width.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_lines_mark_cursor() {
        let mut editor = PromptEditor::new("ab\ncd");
        editor.move_home();
        let lines = editor_lines(&editor, true);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[1].content, "c");
        assert_eq!(lines[1].spans[2].content, "d");
    }

    #[test]
    fn test_editor_lines_cursor_at_end_is_blank_cell() {
        let editor = PromptEditor::new("ab");
        let lines = editor_lines(&editor, true);
        assert_eq!(lines[0].spans[0].content, "ab");
        assert_eq!(lines[0].spans[1].content, " ");
    }

    #[test]
    fn test_unfocused_editor_has_no_cursor() {
        let editor = PromptEditor::new("ab");
        let lines = editor_lines(&editor, false);
        assert_eq!(lines[0].spans.len(), 1);
    }

    #[test]
    fn test_cursor_visual_row_counts_wrapped_lines() {
        let editor = PromptEditor::new("aaaa bbbb cccc\nxy");
        assert_eq!(cursor_visual_row(&editor, 5), 3);
    }
}

//! Rules table rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use super::helpers::{clip_lines, format_elapsed, spinner_frame, wrap_preformatted, wrap_text};
use crate::app::ReviewSession;
use crate::models::{FetchStatus, ReviewFocus, Rule};
use crate::theme::{
    badge_color, get_pulse_color, BG_PRIMARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_DIM, CYAN_PRIMARY,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Placeholder for rules without a code snippet
pub const NO_SNIPPET: &str = "N/A";

/// Tallest a single table row may grow
const MAX_ROW_HEIGHT: usize = 12;

/// Column widths in percent: name, type, description, code
const COLUMN_PERCENT: [u16; 4] = [20, 12, 36, 32];

const HIGHLIGHT_SYMBOL: &str = "▸ ";

/// Gap between adjacent columns
const COLUMN_SPACING: u16 = 1;

/// Display values for one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRow<'a> {
    pub name: &'a str,
    pub badge: &'static str,
    pub description: &'a str,
    pub code: &'a str,
}

pub fn rule_rows(rules: &[Rule]) -> Vec<RuleRow<'_>> {
    rules
        .iter()
        .map(|rule| RuleRow {
            name: &rule.name,
            badge: rule.kind.label(),
            description: &rule.description,
            code: rule.snippet().unwrap_or(NO_SNIPPET),
        })
        .collect()
}

/// Render the rules pane: spinner while loading, hint when empty, else the table
pub fn render_rules(frame: &mut Frame, area: Rect, session: &ReviewSession, tick: u64) {
    let focused = session.focus == ReviewFocus::Rules;
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let block = Block::default()
        .title(format!(" Rules ({}) ", session.rules.len()))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color));

    if let FetchStatus::Loading { started } = &session.fetch {
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(tick)),
                Style::default().fg(get_pulse_color(tick, CYAN_PRIMARY, CYAN_DIM)),
            ),
            Span::styled("Generating rules... ", Style::default().fg(TEXT_PRIMARY)),
            Span::styled(
                format_elapsed(started.elapsed()),
                Style::default().fg(TEXT_MUTED),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(block).alignment(Alignment::Center),
            area,
        );
        return;
    }

    if session.rules.is_empty() {
        let hint = Paragraph::new("No rules yet. Press Ctrl+G to generate rules from the prompt.")
            .style(Style::default().fg(TEXT_MUTED))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, area);
        return;
    }

    let widths = column_widths(block.inner(area).width);
    let cell_widths = widths.map(usize::from);

    let rows: Vec<Row> = rule_rows(&session.rules)
        .into_iter()
        .zip(&session.rules)
        .map(|(row, rule)| build_row(&row, badge_color(rule.kind), &cell_widths))
        .collect();

    let header = Row::new(["Name", "Type", "Description", "Code"])
        .style(
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let table = Table::new(rows, widths.map(Constraint::Length))
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(Style::default().bg(BG_TERTIARY))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = TableState::default().with_selected(Some(session.selected_rule));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Exact cell widths for a table `inner_width` columns wide. The code column
/// takes the rounding remainder.
fn column_widths(inner_width: u16) -> [u16; 4] {
    let reserved = HIGHLIGHT_SYMBOL.chars().count() as u16 + 3 * COLUMN_SPACING;
    let available = u32::from(inner_width.saturating_sub(reserved));
    let share = |percent: u16| (available * u32::from(percent) / 100) as u16;

    let name = share(COLUMN_PERCENT[0]);
    let kind = share(COLUMN_PERCENT[1]);
    let description = share(COLUMN_PERCENT[2]);
    [name, kind, description, available as u16 - name - kind - description]
}

fn build_row(row: &RuleRow<'_>, badge: Color, widths: &[usize; 4]) -> Row<'static> {
    let name = clip_lines(wrap_text(row.name, widths[0]), MAX_ROW_HEIGHT);
    let description = clip_lines(wrap_text(row.description, widths[2]), MAX_ROW_HEIGHT);
    // Snippets keep their own line breaks; only overlong lines are split
    let code = clip_lines(wrap_preformatted(row.code, widths[3]), MAX_ROW_HEIGHT);
    let height = row_height(name.len(), description.len(), code.len());

    let code_style = if row.code == NO_SNIPPET {
        Style::default().fg(TEXT_MUTED)
    } else {
        Style::default().fg(TEXT_PRIMARY).bg(BG_TERTIARY)
    };

    Row::new(vec![
        Cell::from(Text::from(
            name.into_iter().map(Line::from).collect::<Vec<_>>(),
        ))
        .style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)),
        Cell::from(Line::from(Span::styled(
            format!(" {} ", row.badge),
            Style::default()
                .fg(BG_PRIMARY)
                .bg(badge)
                .add_modifier(Modifier::BOLD),
        ))),
        Cell::from(Text::from(
            description.into_iter().map(Line::from).collect::<Vec<_>>(),
        ))
        .style(Style::default().fg(TEXT_SECONDARY)),
        Cell::from(Text::from(
            code.into_iter().map(Line::from).collect::<Vec<_>>(),
        ))
        .style(code_style),
    ])
    .height(height)
}

fn row_height(name_lines: usize, description_lines: usize, code_lines: usize) -> u16 {
    name_lines
        .max(description_lines)
        .max(code_lines)
        .clamp(1, MAX_ROW_HEIGHT) as u16
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::editor::PromptEditor;
    use crate::generation::parse_rules;
    use crate::models::RuleKind;

    fn technical_rule(snippet: &str) -> Rule {
        Rule {
            name: "Customer id present".to_string(),
            description: "Every customer row carries an id".to_string(),
            kind: RuleKind::Technical,
            code_snippet: Some(snippet.to_string()),
        }
    }

    fn session_with(rules: Vec<Rule>) -> ReviewSession {
        ReviewSession {
            id: 1,
            editor: PromptEditor::new("prompt"),
            fetch: FetchStatus::Idle,
            rules,
            focus: ReviewFocus::Rules,
            selected_rule: 0,
        }
    }

    fn render(session: &ReviewSession, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_rules(frame, frame.area(), session, 0))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_business_rule_without_snippet() {
        let rules =
            parse_rules(r#"[{"ruleName":"R1","description":"D1","ruleType":"Business"}]"#).unwrap();
        let rows = rule_rows(&rules);
        assert_eq!(
            rows,
            vec![RuleRow {
                name: "R1",
                badge: "Business",
                description: "D1",
                code: "N/A",
            }]
        );
    }

    #[test]
    fn test_technical_rule_keeps_snippet() {
        let rules = parse_rules(
            r#"[{"ruleName":"Not null","description":"ID present","ruleType":"Technical",
                 "codeSnippet":"SELECT COUNT(*)\nFROM customers\nWHERE id IS NULL"}]"#,
        )
        .unwrap();
        let rows = rule_rows(&rules);
        assert_eq!(rows[0].badge, "Technical");
        assert!(rows[0].code.starts_with("SELECT COUNT(*)"));
    }

    #[test]
    fn test_column_widths_fill_the_table() {
        let widths = column_widths(118);
        assert_eq!(widths, [22, 13, 40, 38]);
        assert_eq!(widths.iter().sum::<u16>(), 118 - 2 - 3);
        assert_eq!(column_widths(0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_long_sql_line_wraps_inside_code_column() {
        let sql = "SELECT COUNT(*) FROM customers WHERE customer_id IS NULL OR last_name = '';";
        let screen = render(&session_with(vec![technical_rule(sql)]), 120, 20);

        let pieces = wrap_preformatted(sql, column_widths(118)[3] as usize);
        assert!(pieces.len() > 1);
        assert_eq!(pieces.concat(), sql);
        for piece in &pieces {
            assert!(screen.contains(piece.as_str()), "missing {piece:?} in\n{screen}");
        }
        assert!(!screen.contains("more lines"));
    }

    #[test]
    fn test_tall_snippet_shows_overflow_marker() {
        let snippet = (1..=20)
            .map(|i| format!("check_{i}()"))
            .collect::<Vec<_>>()
            .join("\n");
        let screen = render(&session_with(vec![technical_rule(&snippet)]), 120, 30);

        assert!(screen.contains("check_11()"));
        assert!(!screen.contains("check_12()"));
        assert!(screen.contains("… 9 more lines"));
    }

    #[test]
    fn test_row_height_follows_tallest_cell() {
        assert_eq!(row_height(1, 2, 4), 4);
        assert_eq!(row_height(0, 0, 0), 1);
        assert_eq!(row_height(1, 40, 1), MAX_ROW_HEIGHT as u16);
    }
}

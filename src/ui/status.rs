//! Header and bottom status bar

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::spinner_frame;
use crate::app::{App, ViewState};
use crate::theme::{AMBER_WARNING, BG_PRIMARY, BG_SECONDARY, CYAN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let step = match app.view {
        ViewState::Configuring => "Step 1/2  Configure",
        ViewState::Reviewing(_) => "Step 2/2  Review",
    };
    let header = Line::from(vec![
        Span::styled(
            " dq-rules ",
            Style::default()
                .fg(BG_PRIMARY)
                .bg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Data Quality Rule Generator  ", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(step, Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(header).style(Style::default().bg(BG_SECONDARY)),
        area,
    );
}

/// Bottom bar with keybinding hints, or the latest status message
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match &app.view {
        ViewState::Configuring => {
            " ↑/↓: Move | ←/→: Choose | Enter: Generate Prompt | q: Quit ".to_string()
        }
        ViewState::Reviewing(session) if session.fetch.is_loading() => format!(
            " {} Generating... | Tab: Switch pane | Esc: Back | Ctrl+C: Quit ",
            spinner_frame(app.animation_tick)
        ),
        ViewState::Reviewing(_) => {
            " Tab: Switch pane | Ctrl+G/F5: Generate rules | c: Copy snippet | Esc: Back | Ctrl+C: Quit "
                .to_string()
        }
    };

    let mut spans = vec![Span::raw(hints)];
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(BG_PRIMARY).bg(AMBER_WARNING),
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(bar, area);
}

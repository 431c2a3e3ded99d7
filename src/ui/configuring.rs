//! Configuring screen: four dropdowns and the compose button

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{ConfigFocus, Field};
use crate::theme::{
    BG_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, RED_ERROR, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Shown while a dropdown has nothing selected
pub const PLACEHOLDER: &str = "Select an option";

pub fn render_configuring(frame: &mut Frame, area: Rect, app: &App) {
    // Center the form horizontally
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Application
            Constraint::Length(3), // Operation
            Constraint::Length(3), // Domain
            Constraint::Length(3), // Department
            Constraint::Length(3), // Generate button
            Constraint::Min(0),    // Validation error
        ])
        .split(columns[1]);

    for field in Field::ALL {
        render_dropdown(frame, rows[field.index()], app, field);
    }

    render_button(
        frame,
        rows[4],
        app.config_focus == ConfigFocus::GenerateButton,
        app.selection.is_complete(),
    );

    if let Some(message) = &app.validation_error {
        let error = Paragraph::new(message.as_str())
            .style(Style::default().fg(RED_ERROR))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(error, rows[5]);
    }
}

fn render_dropdown(frame: &mut Frame, area: Rect, app: &App, field: Field) {
    let focused = app.config_focus == ConfigFocus::Field(field);
    let options = app.options.list(field);
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY));

    let content = match app.choices[field.index()] {
        Some(i) => {
            block = block.title_bottom(
                Line::from(format!(" {}/{} ", i + 1, options.len())).right_aligned(),
            );
            Line::from(vec![
                Span::styled("◂ ", Style::default().fg(TEXT_MUTED)),
                Span::styled(
                    app.selection.get(field).to_string(),
                    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▸", Style::default().fg(TEXT_MUTED)),
            ])
        }
        None if options.is_empty() => Line::from(Span::styled(
            format!("{} (no options)", PLACEHOLDER),
            Style::default().fg(TEXT_MUTED),
        )),
        None => Line::from(Span::styled(PLACEHOLDER, Style::default().fg(TEXT_SECONDARY))),
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// The button stays pressable when incomplete; it is only dimmed
fn render_button(frame: &mut Frame, area: Rect, focused: bool, ready: bool) {
    let accent = if ready { CYAN_PRIMARY } else { TEXT_MUTED };
    let style = if focused {
        Style::default()
            .fg(BG_PRIMARY)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(if focused { CYAN_PRIMARY } else { BORDER_SUBTLE }));

    let button = Paragraph::new(Span::styled(" Generate Prompt ", style))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}

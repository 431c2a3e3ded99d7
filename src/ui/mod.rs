//! UI module for dq-rules
//!
//! This module contains the rendering functions for both screens: the
//! configuring form, the reviewing screen with prompt editor and rules
//! table, and the header/status bars shared by both.

mod configuring;
mod helpers;
mod reviewing;
mod rules;
mod status;

use ratatui::prelude::*;

use crate::app::{App, ViewState};
use crate::theme::BG_PRIMARY;

/// Render the whole frame for the current view
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Screen content
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    status::render_header(frame, layout[0], app);

    match &app.view {
        ViewState::Configuring => configuring::render_configuring(frame, layout[1], app),
        ViewState::Reviewing(session) => {
            reviewing::render_reviewing(frame, layout[1], session, app.animation_tick)
        }
    }

    status::render_status_bar(frame, layout[2], app);
}

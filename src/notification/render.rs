use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::NotificationState;

/// Render the notification right-aligned in the given area, if visible
pub fn render_notification(state: &NotificationState, frame: &mut Frame, area: Rect) {
    let Some(message) = state.message() else {
        return;
    };

    let line = Line::from(Span::styled(
        format!(" ✓ {} ", message),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

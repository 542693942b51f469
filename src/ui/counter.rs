use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(state.config.ui.title.as_str())
        .style(Theme::title())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Draws the count as read from the store at draw time.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(state.count().to_string())
        .style(Theme::count())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

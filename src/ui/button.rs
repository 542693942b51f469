use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::button_border_type())
        .border_style(Theme::button_border());

    let paragraph = Paragraph::new(state.config.ui.button_label.as_str())
        .style(Theme::button())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

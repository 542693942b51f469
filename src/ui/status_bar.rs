use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let keys = &state.config.keys;
    let parts = vec![
        Span::styled(format!(" {} ", keys.increment.join("/")), Theme::status_key()),
        Span::styled(
            format!("or click: {}  ", state.config.ui.button_label),
            Theme::status_bar(),
        ),
        Span::styled(format!(" {} ", keys.quit.join("/")), Theme::status_key()),
        Span::styled("quit", Theme::status_bar()),
    ];

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

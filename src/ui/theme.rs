use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn count() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_border() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn button_border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_key() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}

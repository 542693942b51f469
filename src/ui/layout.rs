use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub struct AppLayout {
    pub title: Rect,
    pub count: Rect,
    pub button: Rect,
    pub status_bar: Rect,
}

/// Shared by rendering and mouse hit-testing so both agree on where the
/// button is.
pub fn compute_layout(area: Rect, button_label: &str) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Title, count and button stacked in the middle of the content
    let stack = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Count
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Button
        ])
        .split(content);

    AppLayout {
        title: stack[0],
        count: stack[1],
        button: center_horizontally(stack[3], button_width(button_label)),
        status_bar,
    }
}

/// Label plus one cell of padding and one border cell on each side.
fn button_width(label: &str) -> u16 {
    u16::try_from(label.width() + 4).unwrap_or(u16::MAX)
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_is_centered_below_count() {
        let layout = compute_layout(Rect::new(0, 0, 40, 12), "increment");
        assert_eq!(layout.button.width, 13);
        assert_eq!(layout.button.height, 3);
        assert_eq!(layout.button.x, (40 - 13) / 2);
        assert!(layout.count.y < layout.button.y);
        assert!(layout.title.y < layout.count.y);
        assert_eq!(layout.status_bar, Rect::new(0, 11, 40, 1));
    }

    #[test]
    fn wide_label_is_clamped_to_the_screen() {
        let layout = compute_layout(Rect::new(0, 0, 10, 12), "a much longer label");
        assert_eq!(layout.button.x, 0);
        assert_eq!(layout.button.width, 10);
    }
}

use crate::constants::{ERROR_POPUP_HEIGHT, ERROR_POPUP_MIN_WIDTH};
use crate::error::ReaderError;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Centered area the popup occupies inside `area`
pub fn popup_area(area: Rect) -> Rect {
    let popup_width = ((area.width as f32 * 0.4) as u16)
        .max(ERROR_POPUP_MIN_WIDTH)
        .min(area.width);
    let popup_height = ERROR_POPUP_HEIGHT.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

pub fn render_error_popup(f: &mut Frame, error: &ReaderError) {
    let popup_area = popup_area(f.area());

    // Clear the area behind the popup
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", error.kind().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner_area = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
        ])
        .split(inner_area);

    let error_text = Paragraph::new(error.message())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    f.render_widget(error_text, chunks[0]);

    let button_text = Line::from(vec![Span::styled(
        "[OK]",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )]);
    let button = Paragraph::new(button_text).alignment(Alignment::Center);
    f.render_widget(button, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BookmarkOperation, TerminalLimits};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(width: u16, height: u16, error: &ReaderError) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_error_popup(f, error)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut rows = Vec::new();
        for y in 0..buffer.area.height {
            let row: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            rows.push(row);
        }
        rows.join("\n")
    }

    #[test]
    fn test_popup_area_is_centered() {
        let area = popup_area(Rect::new(0, 0, 100, 30));
        assert_eq!(area, Rect::new(30, 11, 40, 7));
    }

    #[test]
    fn test_popup_area_respects_minimum_width() {
        let area = popup_area(Rect::new(0, 0, 50, 20));
        assert_eq!(area.width, ERROR_POPUP_MIN_WIDTH);
    }

    #[test]
    fn test_popup_area_clamped_to_frame() {
        let area = popup_area(Rect::new(0, 0, 20, 4));
        assert_eq!(area, Rect::new(0, 0, 20, 4));
    }

    #[test]
    fn test_popup_shows_title_message_and_button() {
        let error = ReaderError::file_not_found("missing.epub");
        let screen = render_to_string(80, 24, &error);

        assert!(screen.contains("File Not Found"));
        assert!(screen.contains("File not found: missing.epub"));
        assert!(screen.contains("[OK]"));
    }

    #[test]
    fn test_popup_title_follows_kind() {
        let error = ReaderError::bookmark_failure(BookmarkOperation::Save, "disk full");
        let screen = render_to_string(100, 30, &error);
        assert!(screen.contains("Bookmark Error"));
        assert!(screen.contains("Bookmark save failed: disk full"));
    }

    #[test]
    fn test_popup_in_tiny_frame_does_not_panic() {
        let error = ReaderError::terminal_too_small(10, 3, TerminalLimits::default());
        render_to_string(10, 3, &error);
    }
}

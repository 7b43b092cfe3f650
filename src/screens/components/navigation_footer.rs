use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct NavigationFooter {}

impl NavigationFooter {
    pub fn new() -> Self {
        Self {}
    }

    /// Renders `key = action` pairs, wrapping onto a new line when the area is full.
    pub fn render(&self, f: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
        let mut text = Vec::new();
        let mut current_line = Vec::new();
        let mut width = 0;
        let max_width = area.width as usize;
        for (key, action) in entries {
            let span_len = key.chars().count() + action.chars().count() + 3; // " = "
            if width + span_len > max_width && !current_line.is_empty() {
                text.push(Line::from(current_line));
                current_line = Vec::new();
                width = 0;
            }
            current_line.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
            current_line.push(Span::raw(" = "));
            current_line.push(Span::styled(
                action.to_string(),
                Style::default().fg(Color::White),
            ));
            current_line.push(Span::raw("   "));
            width += span_len + 3;
        }
        if !current_line.is_empty() {
            text.push(Line::from(current_line));
        }
        let paragraph = Paragraph::new(Text::from(text))
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .padding(Padding::new(1, 0, 0, 0)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

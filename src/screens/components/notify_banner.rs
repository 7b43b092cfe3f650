use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyMessage {
    Error(String),
    Info(String),
}

#[derive(Debug, Default)]
pub struct NotifyBanner {
    pub message: Option<NotifyMessage>,
}

impl NotifyBanner {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set_error(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Error(msg));
    }

    pub fn set_info(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Info(msg));
    }

    pub fn reset(&mut self) {
        self.message = None;
    }

    pub fn has_value(&self) -> bool {
        self.message.is_some()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if let Some(message) = &self.message {
            let (msg, color, title) = match message {
                NotifyMessage::Info(m) => (m, Color::Blue, "info"),
                NotifyMessage::Error(m) => (m, Color::Red, "error"),
            };
            let widget = Paragraph::new(msg.clone())
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(widget, area);
        }
    }
}

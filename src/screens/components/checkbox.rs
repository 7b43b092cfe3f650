use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Yes/no field, flipped with Space (or `x`) while focused.
#[derive(Debug)]
pub struct CheckBox {
    label: String,
    checked: bool,
    pub writing_mode: bool,
}

impl CheckBox {
    pub fn new(label: String, writing_mode: bool, checked: bool) -> Self {
        Self {
            label,
            checked,
            writing_mode,
        }
    }

    pub fn get_selected_value(&self) -> bool {
        self.checked
    }

    pub fn handle_char(&mut self, c: char) {
        if self.writing_mode && matches!(c, ' ' | 'x' | 'X') {
            self.checked = !self.checked;
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mark = if self.checked {
            Span::styled("[x] yes", Style::default().fg(Color::Green))
        } else {
            Span::styled("[ ] no", Style::default().fg(Color::DarkGray))
        };
        let line = Line::from(vec![Span::raw(format!("{}: ", self.label)), mark]);
        let style = if self.writing_mode {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(line).style(style), area);
    }
}

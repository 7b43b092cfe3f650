use crate::shapes::enums::FriendlyName;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct Select<T>
where
    T: FriendlyName + Clone + PartialEq,
{
    selection: ListState,
    value: Option<T>,
    pub writing_mode: bool,
    label: String,
    values: Vec<T>,
}

impl<T: FriendlyName + Clone + PartialEq> Select<T> {
    pub fn new(label: String, values: Vec<T>, selected: Option<T>, writing_mode: bool) -> Self {
        let index = selected
            .and_then(|s| values.iter().position(|v| *v == s))
            .or(if values.is_empty() { None } else { Some(0) });
        let mut selection = ListState::default();
        selection.select(index);
        Self {
            selection,
            value: index.and_then(|i| values.get(i).cloned()),
            writing_mode,
            label,
            values,
        }
    }

    pub fn get_selected_value(&self) -> Option<T> {
        self.value.clone()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.writing_mode {
            self.render_writing(f, area);
        } else {
            self.render_reading(f, area);
        }
    }

    fn render_reading(&mut self, f: &mut Frame, area: Rect) {
        let line = if let Some(value) = self.value.clone() {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", self.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value.friendly_name()),
            ])
        } else {
            Line::from(vec![Span::styled(
                format!("{}:", self.label),
                Style::default().add_modifier(Modifier::BOLD),
            )])
        };
        let widget = Paragraph::new(Text::from(line)).style(Style::default());
        f.render_widget(widget, area);
    }

    fn render_writing(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .values
            .iter()
            .map(|entry| ListItem::new(entry.friendly_name()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(Span::styled(
                self.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.selection);
    }

    pub fn handle_up(&mut self) {
        if !self.writing_mode || self.values.is_empty() {
            return;
        }
        match self.selection.selected() {
            Some(0) | None => self.select_value(self.values.len() - 1),
            Some(selected) => self.select_value(selected - 1),
        }
    }

    pub fn handle_down(&mut self) {
        if !self.writing_mode || self.values.is_empty() {
            return;
        }
        match self.selection.selected() {
            Some(selected) => self.select_value((selected + 1) % self.values.len()),
            None => self.select_value(0),
        }
    }

    fn select_value(&mut self, new_selected: usize) {
        self.value = self.values.get(new_selected).cloned();
        self.selection.select(Some(new_selected));
    }
}

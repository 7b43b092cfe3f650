use std::sync::Arc;

use crate::{
    errors::AppError,
    generation::{simulator::GenerationHandle, state::GenerationState},
    logging::logger::log_error,
    providers::{roster_reader::RosterReader, roster_writer::RosterWriter},
    screens::{
        components::{navigation_footer::NavigationFooter, notify_banner::NotifyBanner},
        edit_player_screen::EditPlayerScreen,
        screen::{AppAction, Renderable, ScreenAsync},
    },
    shapes::{
        enums::{skill_stars, GenerationPhaseEnum, TeamSideEnum},
        roster::RosterEntry,
        settings::current_settings,
        teams::GeneratedTeams,
    },
};
use async_trait::async_trait;
use crokey::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};

#[derive(Debug)]
pub struct RosterScreen<RR: RosterReader + Send + Sync, RW: RosterWriter + Send + Sync> {
    list_state: ListState,
    roster: RosterEntry,
    generation: GenerationState,
    handle: GenerationHandle,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
    roster_reader: Arc<RR>,
    roster_writer: Arc<RW>,
}

#[async_trait]
impl<
        RR: RosterReader + Send + Sync + 'static,
        RW: RosterWriter + Send + Sync + 'static,
    > ScreenAsync for RosterScreen<RR, RW>
{
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match (key.code, &self.notify_message.has_value()) {
            (_, true) => {
                self.notify_message.reset();
                AppAction::None
            }
            (KeyCode::Down, _) => {
                self.next_player();
                AppAction::None
            }
            (KeyCode::Up, _) => {
                self.previous_player();
                AppAction::None
            }
            (KeyCode::Char('n'), _) => AppAction::SwitchScreen(Box::new(EditPlayerScreen::new(
                self.roster.clone(),
                self.roster_writer.clone(),
            ))),
            (KeyCode::Enter, _) => match self.selected_player_id() {
                Some(id) => match self.roster.find_player(id).cloned() {
                    Some(player) => AppAction::SwitchScreen(Box::new(EditPlayerScreen::edit(
                        self.roster.clone(),
                        player,
                        self.roster_writer.clone(),
                    ))),
                    None => AppAction::None,
                },
                None => AppAction::None,
            },
            (KeyCode::Char(' '), _) => {
                if let Some(id) = self.selected_player_id() {
                    let updated = self.roster.toggled(id);
                    self.commit(updated.map_err(AppError::from)).await;
                }
                AppAction::None
            }
            (KeyCode::Char('d'), _) => {
                if let Some(id) = self.selected_player_id() {
                    let updated = self.roster.without_player(id);
                    self.commit(updated.map_err(AppError::from)).await;
                }
                AppAction::None
            }
            (KeyCode::Char('c'), _) => {
                self.clear_roster().await;
                AppAction::None
            }
            (KeyCode::Char('g'), _) => {
                self.generate();
                AppAction::None
            }
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => AppAction::Quit(Ok(())),
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {
        match self.roster_reader.read().await {
            Ok(roster) => {
                self.roster = roster;
                self.clamp_selection();
            }
            Err(e) => {
                self.notify_message
                    .set_error(format!("could not load players: {}", e));
            }
        }
    }
}

impl<RR: RosterReader + Send + Sync, RW: RosterWriter + Send + Sync> Renderable
    for RosterScreen<RR, RW>
{
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        self.drain_generation_events();
        let container = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Min(5)])
            .split(body);
        self.render_roster(f, container[0]);
        if self.generation.is_loading() {
            self.render_progress(f, container[1]);
        } else if let Some(teams) = self.generation.visible_teams() {
            render_teams(f, container[1], teams);
        }
        self.notify_message.render(f, footer_right);
        self.footer
            .render(f, footer_left, &self.get_footer_entries());
    }
}

impl<RR: RosterReader + Send + Sync, RW: RosterWriter + Send + Sync> RosterScreen<RR, RW> {
    pub fn new(roster: RosterEntry, roster_reader: Arc<RR>, roster_writer: Arc<RW>) -> Self {
        let mut list_state = ListState::default();
        if !roster.is_empty() {
            list_state.select(Some(0));
        }
        RosterScreen {
            list_state,
            roster,
            generation: GenerationState::default(),
            handle: GenerationHandle::new(),
            notify_message: NotifyBanner::new(),
            footer: NavigationFooter::new(),
            roster_reader,
            roster_writer,
        }
    }

    fn generate(&mut self) {
        self.generation = self.generation.started();
        self.handle.start(
            self.roster.clone(),
            current_settings().progress_schedule(),
        );
    }

    fn drain_generation_events(&mut self) {
        while let Some(event) = self.handle.try_next() {
            self.generation = self.generation.apply(event);
            if let (GenerationPhaseEnum::Failed, Some(error)) =
                (self.generation.phase, self.generation.error)
            {
                self.notify_message.set_error(error.to_string());
            }
        }
    }

    async fn commit(&mut self, updated: Result<RosterEntry, AppError>) {
        match persist(self.roster_writer.as_ref(), updated).await {
            Ok(roster) => {
                self.roster = roster;
                self.clamp_selection();
            }
            Err(e) => {
                log_error(format!("could not update roster: {}", e).as_str());
                self.notify_message
                    .set_error(format!("could not update roster: {}", e));
            }
        }
    }

    async fn clear_roster(&mut self) {
        match self.roster_writer.clear().await {
            Ok(_) => {
                self.roster = self.roster.cleared();
                self.clamp_selection();
            }
            Err(e) => {
                self.notify_message
                    .set_error(format!("could not clear roster: {}", e));
            }
        }
    }

    fn selected_player_id(&self) -> Option<uuid::Uuid> {
        self.list_state
            .selected()
            .and_then(|i| self.roster.players.get(i))
            .map(|p| p.id)
    }

    fn clamp_selection(&mut self) {
        let selected = match (self.roster.len(), self.list_state.selected()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.list_state.select(selected);
    }

    fn next_player(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            let new_selected = (selected + 1).min(self.roster.len().saturating_sub(1));
            self.list_state.select(Some(new_selected));
        }
    }

    fn previous_player(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            self.list_state.select(Some(selected.saturating_sub(1)));
        }
    }

    fn get_footer_entries(&self) -> Vec<(&'static str, &'static str)> {
        let generate = if self.handle.is_running() {
            ("G", "restart generation")
        } else {
            ("G", "generate teams")
        };
        if self.roster.is_empty() {
            vec![("N", "new player"), ("Q", "quit")]
        } else {
            vec![
                ("↑↓", "navigate"),
                ("Enter", "edit player"),
                ("Space", "toggle playing"),
                ("N", "new player"),
                ("D", "delete"),
                ("C", "clear list"),
                generate,
                ("Q", "quit"),
            ]
        }
    }

    fn render_roster(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("players");
        if self.roster.is_empty() {
            let paragraph = Paragraph::new("no players yet")
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
            return;
        }
        let selected = self.list_state.selected();
        let rows: Vec<Row> = self
            .roster
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let row = Row::new(vec![
                    p.name.clone(),
                    skill_stars(p.skill),
                    p.position.to_string(),
                    if p.is_playing { "yes" } else { "no" }.to_string(),
                ]);
                if Some(i) == selected {
                    row.style(
                        Style::default()
                            .add_modifier(Modifier::REVERSED)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if !p.is_playing {
                    row.style(Style::default().fg(Color::DarkGray))
                } else {
                    row
                }
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(30),
                Constraint::Length(8),
                Constraint::Length(14),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec!["name", "skill", "position", "playing"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block);
        f.render_widget(table, area);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("building teams..."),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(self.generation.progress.ratio());
        f.render_widget(gauge, chunks[0]);
    }
}

async fn persist<RW: RosterWriter + Send + Sync>(
    roster_writer: &RW,
    updated: Result<RosterEntry, AppError>,
) -> Result<RosterEntry, AppError> {
    let roster = updated?;
    roster_writer.save(&roster).await?;
    Ok(roster)
}

fn render_teams(f: &mut Frame, area: Rect, teams: &GeneratedTeams) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    for (side, column) in [TeamSideEnum::A, TeamSideEnum::B].into_iter().zip(columns.iter()) {
        let items: Vec<ListItem> = teams
            .side(side)
            .iter()
            .map(|p| {
                ListItem::new(format!(
                    "{} - {} - {}",
                    p.name,
                    skill_stars(p.skill),
                    p.position
                ))
            })
            .collect();
        let title = format!("{} (skill {})", side, teams.total_skill(side));
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(list, *column);
    }
}

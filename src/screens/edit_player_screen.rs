use std::sync::Arc;

use crate::{
    errors::AppError,
    logging::logger::{log_error, log_info},
    providers::roster_writer::RosterWriter,
    screens::{
        components::{
            checkbox::CheckBox, navigation_footer::NavigationFooter, notify_banner::NotifyBanner,
            select::Select, text_box::TextBox,
        },
        screen::{AppAction, Renderable, ScreenAsync},
    },
    shapes::{
        enums::{PositionEnum, SkillLevel},
        player::PlayerEntry,
        roster::{PlayerInput, RosterEntry},
    },
};
use async_trait::async_trait;
use crokey::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

const FIELD_COUNT: usize = 4;
const FOOTER_ENTRIES: [(&str, &str); 4] = [
    ("Tab / Shift+Tab", "navigate"),
    ("↑↓", "choose"),
    ("Enter", "confirm"),
    ("Esc", "back"),
];

#[derive(Debug)]
pub struct EditPlayerScreen<RW: RosterWriter + Send + Sync> {
    roster: RosterEntry,
    name: TextBox,
    position: Select<PositionEnum>,
    skill: Select<SkillLevel>,
    is_playing: CheckBox,
    field: usize,
    notify_message: NotifyBanner,
    existing_player: Option<PlayerEntry>,
    back: bool,
    footer: NavigationFooter,
    roster_writer: Arc<RW>,
}

impl<RW: RosterWriter + Send + Sync> Renderable for EditPlayerScreen<RW> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let area = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // name
                Constraint::Length(6), // position
                Constraint::Length(5), // skill
                Constraint::Length(2), // playing
                Constraint::Min(1),
            ])
            .split(body);
        self.render_header(f, body);
        self.name.render(f, area[0]);
        self.position.render(f, area[1]);
        self.skill.render(f, area[2]);
        self.is_playing.render(f, area[3]);
        self.notify_message.render(f, footer_right);
        self.footer.render(f, footer_left, &FOOTER_ENTRIES);
    }
}

#[async_trait]
impl<RW: RosterWriter + Send + Sync> ScreenAsync for EditPlayerScreen<RW> {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match (key.code, &self.notify_message.has_value()) {
            (_, true) => self.handle_error_reset(),
            (KeyCode::Char(c), _) => self.handle_char(c),
            (KeyCode::Backspace, _) => self.handle_backspace(),
            (KeyCode::Up, _) => self.handle_up(),
            (KeyCode::Down, _) => self.handle_down(),
            (KeyCode::Tab, _) => self.handle_tab(),
            (KeyCode::BackTab, _) => self.handle_backtab(),
            (KeyCode::Esc, _) => AppAction::Back(false, Some(1)),
            (KeyCode::Enter, _) => self.handle_enter().await,
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {}
}

impl<RW: RosterWriter + Send + Sync> EditPlayerScreen<RW> {
    pub fn new(roster: RosterEntry, roster_writer: Arc<RW>) -> Self {
        Self::build(roster, None, roster_writer)
    }

    pub fn edit(roster: RosterEntry, player: PlayerEntry, roster_writer: Arc<RW>) -> Self {
        Self::build(roster, Some(player), roster_writer)
    }

    fn build(roster: RosterEntry, player: Option<PlayerEntry>, roster_writer: Arc<RW>) -> Self {
        let name = TextBox::new(
            "name".to_string(),
            true,
            player.as_ref().map(|p| p.name.as_str()),
        );
        let position = Select::new(
            "position".to_string(),
            PositionEnum::ALL.to_vec(),
            player.as_ref().map(|p| p.position),
            false,
        );
        let skill = Select::new(
            "skill".to_string(),
            SkillLevel::ALL.to_vec(),
            player.as_ref().map(|p| SkillLevel(p.skill)),
            false,
        );
        let is_playing = CheckBox::new(
            "playing".to_string(),
            false,
            player.as_ref().map(|p| p.is_playing).unwrap_or(true),
        );
        EditPlayerScreen {
            roster,
            name,
            position,
            skill,
            is_playing,
            field: 0,
            notify_message: NotifyBanner::new(),
            existing_player: player,
            back: false,
            footer: NavigationFooter::new(),
            roster_writer,
        }
    }

    fn handle_error_reset(&mut self) -> AppAction {
        self.notify_message.reset();
        if self.back {
            AppAction::Back(true, Some(1))
        } else {
            AppAction::None
        }
    }

    fn handle_char(&mut self, c: char) -> AppAction {
        self.name.handle_char(c);
        self.is_playing.handle_char(c);
        AppAction::None
    }

    fn player_input(&self) -> Result<PlayerInput, String> {
        let name = self
            .name
            .get_selected_value()
            .ok_or_else(|| "name cannot be empty".to_string())?;
        let position = self
            .position
            .get_selected_value()
            .ok_or_else(|| "position is required".to_string())?;
        let SkillLevel(skill) = self
            .skill
            .get_selected_value()
            .ok_or_else(|| "skill is required".to_string())?;
        let is_playing = self.is_playing.get_selected_value();
        Ok(match &self.existing_player {
            Some(player) => PlayerInput::Existing(PlayerEntry {
                name,
                skill,
                position,
                is_playing,
                ..player.clone()
            }),
            None => PlayerInput::New {
                name,
                skill,
                position,
                is_playing,
            },
        })
    }

    async fn handle_enter(&mut self) -> AppAction {
        let input = match self.player_input() {
            Ok(input) => input,
            Err(message) => {
                self.notify_message.set_error(message);
                return AppAction::None;
            }
        };
        match self.save_player(input).await {
            Ok(player) => {
                log_info(format!("player saved: {}", player).as_str());
                self.back = true;
                self.notify_message
                    .set_info(format!("player '{}' saved", player.name));
            }
            Err(e) => {
                log_error(format!("could not save player: {}", e).as_str());
                self.notify_message
                    .set_error(format!("could not save player: {}", e));
            }
        }
        AppAction::None
    }

    async fn save_player(&mut self, input: PlayerInput) -> Result<PlayerEntry, AppError> {
        let (roster, player) = self.roster.with_player(input)?;
        self.roster_writer.save(&roster).await?;
        self.roster = roster;
        Ok(player)
    }

    fn handle_tab(&mut self) -> AppAction {
        self.field = (self.field + 1) % FIELD_COUNT;
        self.update_writing_modes();
        AppAction::None
    }

    fn handle_backtab(&mut self) -> AppAction {
        self.field = (self.field + FIELD_COUNT - 1) % FIELD_COUNT;
        self.update_writing_modes();
        AppAction::None
    }

    fn update_writing_modes(&mut self) {
        self.name.writing_mode = self.field == 0;
        self.position.writing_mode = self.field == 1;
        self.skill.writing_mode = self.field == 2;
        self.is_playing.writing_mode = self.field == 3;
    }

    fn handle_up(&mut self) -> AppAction {
        self.position.handle_up();
        self.skill.handle_up();
        AppAction::None
    }

    fn handle_down(&mut self) -> AppAction {
        self.position.handle_down();
        self.skill.handle_down();
        AppAction::None
    }

    fn handle_backspace(&mut self) -> AppAction {
        self.name.handle_backspace();
        AppAction::None
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(match self.existing_player {
                Some(_) => "edit player",
                None => "new player",
            });
        f.render_widget(block, area);
    }
}

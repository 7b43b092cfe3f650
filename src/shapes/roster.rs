use crate::{
    constants::{MAX_SKILL, MIN_SKILL},
    errors::RosterError,
    shapes::{enums::PositionEnum, player::PlayerEntry},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub enum PlayerInput {
    New {
        name: String,
        skill: u8,
        position: PositionEnum,
        is_playing: bool,
    },
    Existing(PlayerEntry),
}

/// Every registered player, in registration order.
///
/// Roster operations never modify the receiver: each one returns the roster
/// that results from applying it, so the caller decides what to keep.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RosterEntry {
    pub players: Vec<PlayerEntry>,
}

impl RosterEntry {
    pub fn new(players: Vec<PlayerEntry>) -> Self {
        Self { players }
    }

    pub fn find_player(&self, player_id: Uuid) -> Option<&PlayerEntry> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Adds a new player or replaces the one sharing the same id.
    pub fn with_player(
        &self,
        input: PlayerInput,
    ) -> Result<(RosterEntry, PlayerEntry), RosterError> {
        let player = match input {
            PlayerInput::New {
                name,
                skill,
                position,
                is_playing,
            } => PlayerEntry {
                id: Uuid::new_v4(),
                name,
                skill,
                position,
                is_playing,
            },
            PlayerInput::Existing(existing) => {
                if self.find_player(existing.id).is_none() {
                    return Err(RosterError::PlayerNotFound(existing.id));
                }
                existing
            }
        };
        validate_player(&player)?;
        let mut players = self.players.clone();
        if let Some(existing) = players.iter_mut().find(|p| p.id == player.id) {
            *existing = player.clone();
        } else {
            players.push(player.clone());
        }
        Ok((RosterEntry::new(players), player))
    }

    pub fn without_player(&self, player_id: Uuid) -> Result<RosterEntry, RosterError> {
        if self.find_player(player_id).is_none() {
            return Err(RosterError::PlayerNotFound(player_id));
        }
        Ok(RosterEntry::new(
            self.players
                .iter()
                .filter(|p| p.id != player_id)
                .cloned()
                .collect(),
        ))
    }

    /// Flips the participation flag of a single player.
    pub fn toggled(&self, player_id: Uuid) -> Result<RosterEntry, RosterError> {
        let mut players = self.players.clone();
        let player = players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(RosterError::PlayerNotFound(player_id))?;
        player.is_playing = !player.is_playing;
        Ok(RosterEntry::new(players))
    }

    pub fn cleared(&self) -> RosterEntry {
        RosterEntry::default()
    }
}

fn validate_player(player: &PlayerEntry) -> Result<(), RosterError> {
    if player.name.trim().is_empty() {
        return Err(RosterError::EmptyName);
    }
    if !(MIN_SKILL..=MAX_SKILL).contains(&player.skill) {
        return Err(RosterError::InvalidSkill(player.skill));
    }
    Ok(())
}

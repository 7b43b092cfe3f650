use crate::{
    constants::MIN_ACTIVE_PLAYERS,
    errors::GenerationError,
    shapes::{player::PlayerEntry, roster::RosterEntry},
};

/// Players flagged as playing, in roster order.
pub fn active_players(roster: &RosterEntry) -> Vec<PlayerEntry> {
    roster
        .players
        .iter()
        .filter(|p| p.is_playing)
        .cloned()
        .collect()
}

/// Filters the roster and checks there are enough players to start.
pub fn eligible_players(roster: &RosterEntry) -> Result<Vec<PlayerEntry>, GenerationError> {
    let active = active_players(roster);
    if active.len() < MIN_ACTIVE_PLAYERS {
        return Err(GenerationError::InsufficientActivePlayers);
    }
    Ok(active)
}

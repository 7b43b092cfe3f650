use crate::{
    constants::GOALKEEPERS_PER_MATCH,
    errors::GenerationError,
    generation::filter::eligible_players,
    shapes::{
        enums::PositionEnum, player::PlayerEntry, roster::RosterEntry, teams::GeneratedTeams,
    },
};
use rand::{seq::SliceRandom, Rng};

/// Filters the roster and splits the playing players into two teams.
pub fn create_teams<R: Rng + ?Sized>(
    roster: &RosterEntry,
    rng: &mut R,
) -> Result<GeneratedTeams, GenerationError> {
    let active = eligible_players(roster)?;
    partition(&active, rng)
}

/// Splits already filtered players into two teams.
///
/// The first two goalkeepers anchor the teams; any further goalkeeper sits
/// out. Outfield players are shuffled, grouped by position (defenders,
/// midfielders, forwards), ordered by skill within each group and then dealt
/// alternately, starting with team A. Dealing stops as soon as one side
/// outgrows `players_per_team + 1`, so trailing players may be left out.
pub fn partition<R: Rng + ?Sized>(
    active: &[PlayerEntry],
    rng: &mut R,
) -> Result<GeneratedTeams, GenerationError> {
    let (goalkeepers, mut others): (Vec<&PlayerEntry>, Vec<&PlayerEntry>) =
        active.iter().partition(|p| p.is_goalkeeper());
    if goalkeepers.len() < GOALKEEPERS_PER_MATCH {
        return Err(GenerationError::InsufficientGoalkeepers);
    }
    others.shuffle(rng);

    let mut teams = [vec![goalkeepers[0].clone()], vec![goalkeepers[1].clone()]];
    let players_per_team = active.len().saturating_sub(GOALKEEPERS_PER_MATCH) / 2;
    for (i, player) in dealing_order(&others).into_iter().enumerate() {
        teams[i % 2].push(player.clone());
        if teams.iter().any(|t| t.len() > players_per_team + 1) {
            break;
        }
    }

    let [team_a, team_b] = teams;
    if team_a.len() != team_b.len() {
        return Err(GenerationError::UnbalancedTeams);
    }
    Ok(GeneratedTeams { team_a, team_b })
}

// sort_by is stable: equal skills keep their shuffled order
fn dealing_order<'a>(others: &[&'a PlayerEntry]) -> Vec<&'a PlayerEntry> {
    PositionEnum::OUTFIELD
        .iter()
        .flat_map(|position| {
            let mut group: Vec<&PlayerEntry> = others
                .iter()
                .filter(|p| p.position == *position)
                .copied()
                .collect();
            group.sort_by(|a, b| b.skill.cmp(&a.skill));
            group
        })
        .collect()
}

use crate::shapes::{enums::TeamSideEnum, player::PlayerEntry};

/// The outcome of a successful split: two sides of equal size, one goalkeeper each.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedTeams {
    pub team_a: Vec<PlayerEntry>,
    pub team_b: Vec<PlayerEntry>,
}

impl GeneratedTeams {
    pub fn side(&self, side: TeamSideEnum) -> &[PlayerEntry] {
        match side {
            TeamSideEnum::A => &self.team_a,
            TeamSideEnum::B => &self.team_b,
        }
    }

    pub fn total_skill(&self, side: TeamSideEnum) -> u32 {
        self.side(side).iter().map(|p| p.skill as u32).sum()
    }

    pub fn players_per_side(&self) -> usize {
        self.team_a.len()
    }
}

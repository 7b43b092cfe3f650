use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable label used by the selection widgets.
pub trait FriendlyName {
    fn friendly_name(&self) -> String;
}

/// The position a player usually covers on the pitch.
///
/// - **Goalkeeper**:
///   Exactly one per team. Goalkeepers are seated first, one on each side,
///   before anybody else is assigned.
///
/// - **Defender**, **Midfielder**, **Forward**:
///   Outfield players. They are distributed alternately between the two
///   teams, grouped in this order and strongest first within each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionEnum {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionEnum {
    pub const ALL: [PositionEnum; 4] = [
        PositionEnum::Goalkeeper,
        PositionEnum::Defender,
        PositionEnum::Midfielder,
        PositionEnum::Forward,
    ];

    /// Outfield positions in the order they are dealt to the teams.
    pub const OUTFIELD: [PositionEnum; 3] = [
        PositionEnum::Defender,
        PositionEnum::Midfielder,
        PositionEnum::Forward,
    ];

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PositionEnum::Goalkeeper)
    }
}

impl fmt::Display for PositionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PositionEnum::Goalkeeper => "goalkeeper",
            PositionEnum::Defender => "defender",
            PositionEnum::Midfielder => "midfielder",
            PositionEnum::Forward => "forward",
        };
        write!(f, "{}", label)
    }
}

impl FriendlyName for PositionEnum {
    fn friendly_name(&self) -> String {
        let label = match self {
            PositionEnum::Goalkeeper => "Goalkeeper",
            PositionEnum::Defender => "Defender",
            PositionEnum::Midfielder => "Midfielder",
            PositionEnum::Forward => "Forward",
        };
        label.to_string()
    }
}

/// Where a team generation request currently stands.
///
/// - **Idle**: nothing has been requested yet.
/// - **Computing**: the progress schedule is running; no result is visible.
/// - **Succeeded**: two teams are available.
/// - **Failed**: the last attempt ended with a generation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenerationPhaseEnum {
    #[default]
    Idle,
    Computing,
    Succeeded,
    Failed,
}

/// Identifies one of the two generated sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSideEnum {
    A,
    B,
}

impl fmt::Display for TeamSideEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TeamSideEnum::A => "Team A",
            TeamSideEnum::B => "Team B",
        };
        write!(f, "{}", label)
    }
}

/// Skill rating on the 1 to 3 scale, used by the skill selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLevel(pub u8);

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [SkillLevel(1), SkillLevel(2), SkillLevel(3)];
}

impl FriendlyName for SkillLevel {
    fn friendly_name(&self) -> String {
        format!("{} {}", self.0, skill_stars(self.0))
    }
}

pub fn skill_stars(skill: u8) -> String {
    "●".repeat(skill as usize)
}

use crate::shapes::enums::PositionEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub skill: u8,
    pub position: PositionEnum,
    #[serde(default = "default_is_playing")]
    pub is_playing: bool,
}

fn default_is_playing() -> bool {
    true
}

impl PlayerEntry {
    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }
}

impl std::fmt::Display for PlayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.skill)
    }
}

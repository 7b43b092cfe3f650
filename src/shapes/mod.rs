pub mod enums;
pub mod player;
pub mod progress;
pub mod roster;
pub mod settings;
pub mod teams;

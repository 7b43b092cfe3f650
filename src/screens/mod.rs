pub mod components;
pub mod edit_player_screen;
pub mod roster_screen;
pub mod screen;

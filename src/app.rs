use std::sync::Arc;

use crate::{
    providers::{roster_reader::RosterReader, roster_writer::RosterWriter},
    screens::{roster_screen::RosterScreen, screen::ScreenAsync},
    shapes::roster::RosterEntry,
};

pub struct App {
    screens: Vec<Box<dyn ScreenAsync>>,
}

impl App {
    pub fn new<
        RR: RosterReader + Send + Sync + 'static,
        RW: RosterWriter + Send + Sync + 'static,
    >(
        roster: RosterEntry,
        roster_reader: Arc<RR>,
        roster_writer: Arc<RW>,
    ) -> Self {
        Self {
            screens: vec![Box::new(RosterScreen::new(
                roster,
                roster_reader,
                roster_writer,
            ))],
        }
    }

    pub fn current_screen(&mut self) -> Option<&mut Box<dyn ScreenAsync>> {
        self.screens.last_mut()
    }

    pub fn push_screen(&mut self, screen: Box<dyn ScreenAsync>) {
        self.screens.push(screen);
    }

    /// Pops `count` screens, always keeping the root one.
    pub async fn pop_screen(&mut self, refresh: bool, count: Option<u8>) {
        let count = count.unwrap_or(0) as usize;
        if count > 0 {
            let to_pop = count.min(self.screens.len().saturating_sub(1));
            for _ in 0..to_pop {
                self.screens.pop();
            }
            if let Some(prev) = self.screens.last_mut() {
                if refresh {
                    prev.refresh_data().await;
                }
            }
        }
    }
}

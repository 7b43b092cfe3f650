use crate::{
    errors::GenerationError,
    generation::{filter::eligible_players, partitioner::create_teams},
    logging::logger::{log_error, log_info, log_warning},
    shapes::{
        progress::{GenerationProgress, ProgressSchedule},
        roster::RosterEntry,
        teams::GeneratedTeams,
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::{
    spawn,
    sync::mpsc::{unbounded_channel, UnboundedReceiver},
    task::JoinHandle,
    time::{interval_at, sleep_until, Instant},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    Progress(GenerationProgress),
    Finished(Result<GeneratedTeams, GenerationError>),
}

/// Delays the team split behind a fake progress bar.
///
/// Progress starts at 0 and grows by `step` on every tick, capped at 100;
/// ticks stop once the cap is reached. When `reveal_delay` elapses the ticks
/// are halted, a final `{100, not in progress}` report is emitted and the
/// partitioner runs exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressSimulator {
    schedule: ProgressSchedule,
}

impl ProgressSimulator {
    pub fn new(schedule: ProgressSchedule) -> Self {
        Self { schedule }
    }

    pub async fn run<R, F>(
        &self,
        roster: &RosterEntry,
        rng: &mut R,
        mut on_progress: F,
    ) -> Result<GeneratedTeams, GenerationError>
    where
        R: Rng + ?Sized,
        F: FnMut(GenerationProgress),
    {
        // no timers are started for a roster that cannot be split
        eligible_players(roster)?;
        let mut progress = GenerationProgress::started();
        on_progress(progress);
        let start = Instant::now();
        let mut ticker = interval_at(
            start + self.schedule.tick_interval,
            self.schedule.tick_interval,
        );
        let reveal = sleep_until(start + self.schedule.reveal_delay);
        tokio::pin!(reveal);
        let mut ticking = true;
        loop {
            tokio::select! {
                biased;
                _ = &mut reveal => break,
                _ = ticker.tick(), if ticking => {
                    progress = progress.advanced(self.schedule.step);
                    on_progress(progress);
                    ticking = !progress.is_saturated();
                }
            }
        }
        on_progress(GenerationProgress::completed());
        create_teams(roster, rng)
    }
}

/// Owns the background task of the current generation request.
///
/// Starting a new request aborts the pending one and drops its channel, so
/// events of a superseded request never reach the caller.
#[derive(Debug, Default)]
pub struct GenerationHandle {
    task: Option<JoinHandle<()>>,
    receiver: Option<UnboundedReceiver<GenerationEvent>>,
}

impl GenerationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, roster: RosterEntry, schedule: ProgressSchedule) {
        if self.cancel() {
            log_warning("pending team generation cancelled by a new request");
        }
        let (tx, rx) = unbounded_channel();
        log_info(
            format!(
                "team generation started for a roster of {} players",
                roster.len()
            )
            .as_str(),
        );
        let task = spawn(async move {
            let mut rng = StdRng::from_entropy();
            let progress_tx = tx.clone();
            let result = ProgressSimulator::new(schedule)
                .run(&roster, &mut rng, |progress| {
                    let _ = progress_tx.send(GenerationEvent::Progress(progress));
                })
                .await;
            match &result {
                Ok(teams) => log_info(
                    format!(
                        "teams generated with {} players per side",
                        teams.players_per_side()
                    )
                    .as_str(),
                ),
                Err(e) => log_error(format!("could not generate teams: {}", e).as_str()),
            }
            let _ = tx.send(GenerationEvent::Finished(result));
        });
        self.task = Some(task);
        self.receiver = Some(rx);
    }

    /// Aborts the pending request, if any. Returns whether a running task was stopped.
    pub fn cancel(&mut self) -> bool {
        self.receiver = None;
        match self.task.take() {
            Some(task) if !task.is_finished() => {
                task.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn try_next(&mut self) -> Option<GenerationEvent> {
        self.receiver.as_mut()?.try_recv().ok()
    }
}

impl Drop for GenerationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

use crate::{
    errors::GenerationError,
    generation::simulator::GenerationEvent,
    shapes::{
        enums::GenerationPhaseEnum, progress::GenerationProgress, teams::GeneratedTeams,
    },
};

/// Everything the presentation layer needs to know about team generation.
///
/// Transitions are pure: each returns the next state and leaves the
/// receiver untouched. A failed attempt keeps the teams of the last
/// successful one; a successful attempt replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationState {
    pub phase: GenerationPhaseEnum,
    pub progress: GenerationProgress,
    pub teams: Option<GeneratedTeams>,
    pub error: Option<GenerationError>,
}

impl GenerationState {
    pub fn started(&self) -> Self {
        Self {
            phase: GenerationPhaseEnum::Computing,
            progress: GenerationProgress::started(),
            teams: self.teams.clone(),
            error: None,
        }
    }

    /// Progress reports outside of a computation, or going backwards, are ignored.
    pub fn with_progress(&self, progress: GenerationProgress) -> Self {
        if self.phase != GenerationPhaseEnum::Computing || progress.value < self.progress.value
        {
            return self.clone();
        }
        Self {
            progress,
            ..self.clone()
        }
    }

    pub fn finished(&self, result: Result<GeneratedTeams, GenerationError>) -> Self {
        match result {
            Ok(teams) => Self {
                phase: GenerationPhaseEnum::Succeeded,
                progress: GenerationProgress::completed(),
                teams: Some(teams),
                error: None,
            },
            Err(error) => Self {
                phase: GenerationPhaseEnum::Failed,
                progress: GenerationProgress {
                    value: self.progress.value,
                    in_progress: false,
                },
                teams: self.teams.clone(),
                error: Some(error),
            },
        }
    }

    pub fn apply(&self, event: GenerationEvent) -> Self {
        match event {
            GenerationEvent::Progress(progress) => self.with_progress(progress),
            GenerationEvent::Finished(result) => self.finished(result),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == GenerationPhaseEnum::Computing
    }

    /// Teams are hidden while a new computation is running.
    pub fn visible_teams(&self) -> Option<&GeneratedTeams> {
        if self.is_loading() {
            None
        } else {
            self.teams.as_ref()
        }
    }
}

/// How the hero intro behaves for a given mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroMode {
    /// First mount this session: loading sequence and assembly animation run.
    Play,
    /// Intro already played: start assembled, no loader.
    Skip,
}

/// Session-scoped state owned by the application root and handed to views
/// explicitly. Lives for the page session; views come and go around it.
#[derive(Clone, Debug, Default)]
pub struct Session {
    intro_played: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intro_played(&self) -> bool {
        self.intro_played
    }

    /// Claim the one-time intro. Only the first call in a session plays it.
    pub fn claim_intro(&mut self) -> IntroMode {
        if self.intro_played {
            IntroMode::Skip
        } else {
            self.intro_played = true;
            IntroMode::Play
        }
    }
}

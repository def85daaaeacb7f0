use crate::constants::{VIDEO_MUTED_CLASS, VIDEO_PLAYING_CLASS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenAction {
    Enter,
    Exit,
}

/// Enter fullscreen when nothing is fullscreen, otherwise leave it.
pub fn fullscreen_action(something_fullscreen: bool) -> FullscreenAction {
    if something_fullscreen {
        FullscreenAction::Exit
    } else {
        FullscreenAction::Enter
    }
}

/// Classes a video section carries for its current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaUi {
    pub playing: bool,
    pub muted: bool,
}

impl MediaUi {
    /// `(class, present)` pairs to apply to the section element.
    pub fn classes(&self) -> [(&'static str, bool); 2] {
        [
            (VIDEO_PLAYING_CLASS, self.playing),
            (VIDEO_MUTED_CLASS, self.muted),
        ]
    }
}

/// Play/pause/mute state of the page video.
///
/// Starts out playing and muted, matching browser autoplay. A play request is
/// only reflected as playing once the element confirms it; a rejection (for
/// example an autoplay policy) falls back to paused.
#[derive(Clone, Debug)]
pub struct MediaState {
    playing: bool,
    muted: bool,
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            playing: true,
            muted: true,
        }
    }
}

impl MediaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn ui(&self) -> MediaUi {
        MediaUi {
            playing: self.playing,
            muted: self.muted,
        }
    }

    /// What a click on the video should do. Pausing takes effect immediately.
    pub fn toggle_play(&mut self) -> PlaybackCommand {
        if self.playing {
            self.playing = false;
            PlaybackCommand::Pause
        } else {
            PlaybackCommand::Play
        }
    }

    pub fn on_play_resolved(&mut self) {
        self.playing = true;
    }

    pub fn on_play_rejected(&mut self) {
        self.playing = false;
    }

    /// Flip mute; returns the new muted flag.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

/// One step of the cosmetic loader: at `at_ms` the display jumps to `percent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyframe {
    pub at_ms: u32,
    pub percent: u8,
}

// Perceived-progress choreography; not tied to asset readiness.
pub const LOADING_KEYFRAMES: &[Keyframe] = &[
    Keyframe { at_ms: 0, percent: 0 },
    Keyframe { at_ms: 180, percent: 15 },
    Keyframe { at_ms: 650, percent: 45 },
    Keyframe { at_ms: 1100, percent: 72 },
    Keyframe { at_ms: 1500, percent: 90 },
    Keyframe { at_ms: 1900, percent: 100 },
];

/// Wall-clock time after which the loader is dismissed unconditionally.
pub const LOADING_DURATION_MS: u32 = 2300;

#[derive(Clone, Copy, Debug)]
pub struct LoadingSequence {
    keyframes: &'static [Keyframe],
    duration_ms: u32,
}

impl Default for LoadingSequence {
    fn default() -> Self {
        Self::new(LOADING_KEYFRAMES, LOADING_DURATION_MS)
    }
}

impl LoadingSequence {
    /// `keyframes` must be sorted by `at_ms`.
    pub fn new(keyframes: &'static [Keyframe], duration_ms: u32) -> Self {
        let last = keyframes.last().map(|k| k.at_ms).unwrap_or(0);
        Self {
            keyframes,
            duration_ms: duration_ms.max(last),
        }
    }

    pub fn keyframes(&self) -> &'static [Keyframe] {
        self.keyframes
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Displayed percentage `elapsed_ms` after start: held at the latest
    /// keyframe reached, 100 once complete.
    pub fn percent_at(&self, elapsed_ms: f64) -> u8 {
        if self.is_complete(elapsed_ms) {
            return 100;
        }
        self.keyframes
            .iter()
            .take_while(|k| k.at_ms as f64 <= elapsed_ms)
            .last()
            .map(|k| k.percent)
            .unwrap_or(0)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }
}

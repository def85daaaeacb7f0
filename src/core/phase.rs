use crate::constants::PHASE_COOLDOWN_MS;

/// Discrete narrative beat of the hero showcase, always within `MIN..=MAX`.
///
/// Phase 0 is the resting state; phase 4 is "released", after which further
/// downward scrolling belongs to the page again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phase(u8);

impl Phase {
    pub const MIN: Phase = Phase(0);
    pub const MAX: Phase = Phase(4);

    pub fn new(index: u8) -> Option<Phase> {
        (index <= Self::MAX.0).then_some(Phase(index))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }

    #[inline]
    pub fn is_released(self) -> bool {
        self == Self::MAX
    }

    /// Neighbouring phase in `direction`, or `None` at a bound or when still.
    pub fn step(self, direction: ScrollDirection) -> Option<Phase> {
        match direction {
            ScrollDirection::Forward if self < Self::MAX => Some(Phase(self.0 + 1)),
            ScrollDirection::Backward if self > Self::MIN => Some(Phase(self.0 - 1)),
            _ => None,
        }
    }

    /// Which overlay copy is shown while this phase is current.
    pub fn overlay(self) -> OverlayCopy {
        OverlayCopy {
            line_one: self.0 == 1,
            line_two: self.0 == 2,
            call_to_action: self.0 >= 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayCopy {
    pub line_one: bool,
    pub line_two: bool,
    pub call_to_action: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Forward,
    Backward,
    Still,
}

impl ScrollDirection {
    /// Sign of a wheel `deltaY`; zero and NaN are `Still`.
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            ScrollDirection::Forward
        } else if delta_y < 0.0 {
            ScrollDirection::Backward
        } else {
            ScrollDirection::Still
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseState {
    pub phase: Phase,
    /// Timestamp (ms) of the last accepted transition.
    pub last_transition_ms: Option<f64>,
}

/// Pure transition function of the phase machine.
///
/// Moves one step in `direction` when the bound allows it and more than
/// `cooldown_ms` has passed since the last accepted transition; otherwise the
/// state is returned unchanged.
pub fn transition(
    state: PhaseState,
    direction: ScrollDirection,
    now_ms: f64,
    cooldown_ms: f64,
) -> PhaseState {
    let Some(next) = state.phase.step(direction) else {
        return state;
    };
    let cooled = match state.last_transition_ms {
        Some(last) => now_ms - last > cooldown_ms,
        None => true,
    };
    if !cooled {
        return state;
    }
    PhaseState {
        phase: next,
        last_transition_ms: Some(now_ms),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelOutcome {
    /// The gesture belongs to the phase machine; native scroll must be suppressed.
    pub consumed: bool,
    /// `(from, to)` when the phase changed.
    pub transition: Option<(Phase, Phase)>,
}

/// Wheel-driven phase machine with the pinned-section guard.
#[derive(Clone, Debug)]
pub struct PhaseSequencer {
    state: PhaseState,
    cooldown_ms: f64,
}

impl Default for PhaseSequencer {
    fn default() -> Self {
        Self::new(PHASE_COOLDOWN_MS)
    }
}

impl PhaseSequencer {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            state: PhaseState::default(),
            cooldown_ms: cooldown_ms.max(0.0),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn state(&self) -> PhaseState {
        self.state
    }

    #[inline]
    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    /// Feed one wheel event. `pinned` reports whether the hero section sits at
    /// the top of the viewport; when it does not, the event is left to the page.
    ///
    /// A pinned gesture that could move the phase is consumed even while the
    /// cooldown rejects it, so the tail of a fast swipe does not scroll the page.
    pub fn on_wheel(
        &mut self,
        direction: ScrollDirection,
        now_ms: f64,
        pinned: bool,
    ) -> WheelOutcome {
        if !pinned || self.state.phase.step(direction).is_none() {
            return WheelOutcome::default();
        }
        let from = self.state.phase;
        self.state = transition(self.state, direction, now_ms, self.cooldown_ms);
        let to = self.state.phase;
        if to != from {
            log::info!("[phase] {} -> {}", from.index(), to.index());
        }
        WheelOutcome {
            consumed: true,
            transition: (to != from).then_some((from, to)),
        }
    }
}

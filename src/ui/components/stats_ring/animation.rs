//! # Fill Animation
//!
//! Time-driven progress state machine behind the stats ring. A run is a
//! single anchor on the host clock and every progress scalar is a pure
//! function of the sampled time, so canceling a run means dropping or
//! replacing that one anchor. No callback can outlive it.
//!
//! The machine has two states: idle (no data, all scalars read 0) and
//! running (looping per the mode's rule until stopped or restarted).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long one 0 -> 1 fill takes.
pub const FILL_DURATION: Duration = Duration::from_millis(3000);

/// Delay before a fresh run starts filling (and between sequential cycles).
pub const START_DELAY: Duration = Duration::from_millis(1000);

/// Number of stages driven in [`FillMode::Sequential`].
pub const STAGE_COUNT: usize = 4;

/// Strategy for mapping progress scalars onto drawn arc angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMode {
    /// All segments grow together over one shared scalar.
    #[default]
    Parallel,
    /// Four fixed 90-degree quadrants fill one after another.
    Sequential,
    /// Each segment grows both ways out of the start of its 90-degree slot.
    Bidirectional,
    /// The whole ring rotates while it grows.
    Rotating,
}

impl FillMode {
    pub const ALL: [FillMode; 4] = [
        FillMode::Parallel,
        FillMode::Sequential,
        FillMode::Bidirectional,
        FillMode::Rotating,
    ];

    /// Mode from its configuration index; unknown values fall back to the
    /// default.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => FillMode::Parallel,
            1 => FillMode::Sequential,
            2 => FillMode::Bidirectional,
            3 => FillMode::Rotating,
            _ => FillMode::default(),
        }
    }

    /// Display name for mode selectors.
    pub fn label(self) -> &'static str {
        match self {
            FillMode::Parallel => "Parallel",
            FillMode::Sequential => "Sequential",
            FillMode::Bidirectional => "Bidirectional",
            FillMode::Rotating => "Rotating",
        }
    }
}

/// Progress scalars for one frame, each in [0, 1].
///
/// Only [`FillMode::Sequential`] drives more than the first stage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageProgress {
    pub stages: [f32; STAGE_COUNT],
}

impl StageProgress {
    pub const ZERO: StageProgress = StageProgress {
        stages: [0.0; STAGE_COUNT],
    };

    /// The single scalar shared by every mode except `Sequential`.
    pub fn primary(&self) -> f32 {
        self.stages[0]
    }
}

/// Looping fill animation for one widget instance.
///
/// [`Self::restart`] always tears down the run in flight before anchoring
/// the new one; [`Self::stop`] returns to idle.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    mode: FillMode,
    run_started_at: Option<f64>,
}

impl AnimationDriver {
    pub fn new(mode: FillMode) -> Self {
        Self {
            mode,
            run_started_at: None,
        }
    }

    pub fn mode(&self) -> FillMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.run_started_at.is_some()
    }

    /// Begin a fresh run at progress zero, anchored at host-clock time `now`
    /// (seconds).
    pub fn restart(&mut self, now: f64) {
        self.run_started_at = Some(now);
    }

    /// Return to idle; all scalars read zero until the next restart.
    pub fn stop(&mut self) {
        self.run_started_at = None;
    }

    /// Progress scalars at host-clock time `now` (seconds).
    pub fn sample(&self, now: f64) -> StageProgress {
        let Some(started_at) = self.run_started_at else {
            return StageProgress::ZERO;
        };
        let elapsed = (now - started_at).max(0.0);

        match self.mode {
            FillMode::Sequential => sequential_progress(elapsed),
            FillMode::Parallel | FillMode::Bidirectional | FillMode::Rotating => {
                let mut progress = StageProgress::ZERO;
                progress.stages[0] = looping_progress(elapsed);
                progress
            }
        }
    }
}

/// One shared scalar: hold at zero through the start delay, then fill
/// linearly and wrap straight into the next cycle with no further delay.
fn looping_progress(elapsed: f64) -> f32 {
    let delay = START_DELAY.as_secs_f64();
    let duration = FILL_DURATION.as_secs_f64();

    if elapsed < delay {
        return 0.0;
    }
    let in_cycle = (elapsed - delay) % duration;
    ((in_cycle / duration) as f32).clamp(0.0, 1.0)
}

/// Four stages back to back, then a full-ring hold for the delay interval
/// before the whole sequence runs again. Stage k+1 cannot move until stage k
/// has reached 1.
fn sequential_progress(elapsed: f64) -> StageProgress {
    let duration = FILL_DURATION.as_secs_f64();
    let delay = START_DELAY.as_secs_f64();
    let cycle = STAGE_COUNT as f64 * duration + delay;
    let in_cycle = elapsed % cycle;

    let mut progress = StageProgress::ZERO;
    for (index, stage) in progress.stages.iter_mut().enumerate() {
        let stage_start = index as f64 * duration;
        *stage = (((in_cycle - stage_start) / duration) as f32).clamp(0.0, 1.0);
    }
    progress
}

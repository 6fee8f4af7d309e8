//! Game state and transitions
//!
//! One `GameState` value owns everything the mini-game knows: score,
//! jump animation phase, the unlock latch, and the collision feedback
//! timer. The state is created when the feature mounts and becomes
//! inert the instant it unlocks; every transition is a silent no-op
//! afterwards.

use crate::settings::Tuning;

use super::ease;

/// Jump animation phase. A jump is two sequential timed legs; `elapsed`
/// is the time spent in the current leg so far (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpPhase {
    /// Runner at rest on the track
    Grounded,
    /// First leg: accelerating up toward the peak
    Rising { elapsed: f32 },
    /// Second leg: dropping back to rest
    Falling { elapsed: f32 },
}

/// What an obstacle-cycle pulse did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Pulse arrived after unlock; nothing changed
    Ignored,
    /// Score advanced, threshold not yet reached
    Scored,
    /// Score reached the threshold; the state is now terminal
    Unlocked,
}

/// Complete mini-game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Progress toward unlock, `0..=score_max`
    pub score: u32,
    /// Current jump leg
    pub jump: JumpPhase,
    /// One-way unlock latch
    pub unlocked: bool,
    /// Runner's vertical displacement from rest (px, negative = up)
    pub runner_offset: f32,
    /// Remaining collision-feedback time; the pulse cannot restart
    /// while this is positive
    pub flash_secs: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            jump: JumpPhase::Grounded,
            unlocked: false,
            runner_offset: 0.0,
            flash_secs: 0.0,
        }
    }

    /// True while either jump leg is in flight
    #[inline]
    pub fn is_jumping(&self) -> bool {
        !matches!(self.jump, JumpPhase::Grounded)
    }

    /// True while the collision feedback pulse is showing
    #[inline]
    pub fn is_flashing(&self) -> bool {
        self.flash_secs > 0.0
    }

    /// Start a jump. Requests while already jumping or after unlock are
    /// dropped, no queueing. Returns whether the jump started.
    pub fn request_jump(&mut self) -> bool {
        if self.unlocked || self.is_jumping() {
            return false;
        }
        self.jump = JumpPhase::Rising { elapsed: 0.0 };
        true
    }

    /// One full obstacle traversal survived
    pub fn on_obstacle_cycle(&mut self, tuning: &Tuning) -> CycleOutcome {
        if self.unlocked {
            return CycleOutcome::Ignored;
        }
        self.score = (self.score + tuning.score_step).min(tuning.score_max);
        if self.score >= tuning.score_max {
            self.unlocked = true;
            CycleOutcome::Unlocked
        } else {
            CycleOutcome::Scored
        }
    }

    /// Runner touched the obstacle. Zeroes the score (idempotent at 0)
    /// and starts the feedback pulse unless one is already in flight.
    /// Returns whether a new pulse started.
    pub fn on_collision(&mut self, tuning: &Tuning) -> bool {
        if self.unlocked {
            return false;
        }
        self.score = 0;
        if self.is_flashing() {
            return false;
        }
        let secs = tuning.effective_flash_secs();
        if secs <= 0.0 {
            return false;
        }
        self.flash_secs = secs;
        true
    }

    /// Score as a display percentage, clamped to `[0, 100]` on every
    /// read regardless of the internal value.
    pub fn progress_percent(&self, tuning: &Tuning) -> u32 {
        let max = tuning.score_max.max(1);
        let clamped = self.score.min(max) as u64;
        ((clamped * 100 / max as u64) as u32).min(100)
    }

    /// Advance the jump legs and the feedback timer by `dt` seconds.
    /// Returns true if the feedback pulse expired during this step.
    pub fn advance(&mut self, dt: f32, tuning: &Tuning) -> bool {
        self.jump = match self.jump {
            JumpPhase::Grounded => JumpPhase::Grounded,
            JumpPhase::Rising { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= tuning.jump_rise_secs {
                    // Carry the remainder into the fall leg
                    JumpPhase::Falling {
                        elapsed: elapsed - tuning.jump_rise_secs,
                    }
                } else {
                    JumpPhase::Rising { elapsed }
                }
            }
            JumpPhase::Falling { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= tuning.jump_fall_secs {
                    JumpPhase::Grounded
                } else {
                    JumpPhase::Falling { elapsed }
                }
            }
        };

        self.runner_offset = match self.jump {
            JumpPhase::Grounded => 0.0,
            JumpPhase::Rising { elapsed } => {
                tuning.jump_peak_px * ease::rise(elapsed / tuning.jump_rise_secs)
            }
            JumpPhase::Falling { elapsed } => {
                tuning.jump_peak_px * (1.0 - ease::fall(elapsed / tuning.jump_fall_secs))
            }
        };

        let was_flashing = self.is_flashing();
        if was_flashing {
            self.flash_secs = (self.flash_secs - dt).max(0.0);
        }
        was_flashing && !self.is_flashing()
    }
}

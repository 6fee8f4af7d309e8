//! Per-frame evaluation step
//!
//! The driver calls [`tick`] once per display frame with the real
//! elapsed time. A tick advances the jump and feedback timers, re-reads
//! live sprite geometry, and applies the collision consequences before
//! returning, so the score reset is always visible before the next
//! frame is scheduled.

use crate::settings::Tuning;

use super::collision::GeometryProvider;
use super::state::GameState;

/// Whether the driver should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Keep ticking
    Continue,
    /// Stop for good: the game unlocked or the sprites are gone
    Halted,
}

/// What happened during one tick, for the driver's DOM writes
#[derive(Debug, Clone, Copy)]
pub struct TickOutcome {
    pub status: TickStatus,
    /// The runner overlapped the obstacle this frame
    pub collided: bool,
    /// A new feedback pulse began (apply the flash styles)
    pub flash_started: bool,
    /// The feedback pulse expired (restore baseline styles)
    pub flash_ended: bool,
}

/// Evaluate one frame
pub fn tick<G: GeometryProvider>(
    state: &mut GameState,
    geometry: &G,
    tuning: &Tuning,
    dt: f32,
) -> TickOutcome {
    if state.unlocked {
        return TickOutcome {
            status: TickStatus::Halted,
            collided: false,
            flash_started: false,
            flash_ended: false,
        };
    }

    let flash_ended = state.advance(dt, tuning);

    // Geometry is read fresh every frame; a detached sprite means the
    // surrounding page tore the game down, so wind the loop down too.
    let (Some(runner), Some(obstacle)) = (geometry.runner_box(), geometry.obstacle_box()) else {
        return TickOutcome {
            status: TickStatus::Halted,
            collided: false,
            flash_started: false,
            flash_ended,
        };
    };

    let collided = runner.overlaps(&obstacle);
    let flash_started = collided && state.on_collision(tuning);

    TickOutcome {
        status: TickStatus::Continue,
        collided,
        flash_started,
        flash_ended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Aabb;
    use crate::sim::state::CycleOutcome;

    /// Synthetic geometry standing in for the DOM
    struct FixedBoxes {
        runner: Option<Aabb>,
        obstacle: Option<Aabb>,
    }

    impl GeometryProvider for FixedBoxes {
        fn runner_box(&self) -> Option<Aabb> {
            self.runner
        }
        fn obstacle_box(&self) -> Option<Aabb> {
            self.obstacle
        }
    }

    const DT: f32 = 1.0 / 60.0;

    fn apart() -> FixedBoxes {
        FixedBoxes {
            runner: Some(Aabb::from_edges(0.0, 0.0, 40.0, 40.0)),
            obstacle: Some(Aabb::from_edges(200.0, 0.0, 240.0, 40.0)),
        }
    }

    fn touching() -> FixedBoxes {
        FixedBoxes {
            runner: Some(Aabb::from_edges(0.0, 0.0, 40.0, 40.0)),
            obstacle: Some(Aabb::from_edges(30.0, 0.0, 70.0, 40.0)),
        }
    }

    #[test]
    fn test_miss_leaves_score_alone() {
        let t = Tuning::default();
        let mut state = GameState::new();
        state.on_obstacle_cycle(&t);

        let outcome = tick(&mut state, &apart(), &t, DT);
        assert_eq!(outcome.status, TickStatus::Continue);
        assert!(!outcome.collided);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_hit_resets_score_and_flashes() {
        let t = Tuning::default();
        let mut state = GameState::new();
        for _ in 0..4 {
            state.on_obstacle_cycle(&t);
        }

        let outcome = tick(&mut state, &touching(), &t, DT);
        assert_eq!(outcome.status, TickStatus::Continue);
        assert!(outcome.collided);
        assert!(outcome.flash_started);
        assert_eq!(state.score, 0);
        assert!(state.is_flashing());
    }

    #[test]
    fn test_sustained_contact_flashes_once() {
        let t = Tuning::default();
        let mut state = GameState::new();
        let geometry = touching();

        assert!(tick(&mut state, &geometry, &t, DT).flash_started);
        // The contact persists over the following frames; the pulse
        // must not restart, the reset stays a harmless 0 -> 0
        assert!(!tick(&mut state, &geometry, &t, DT).flash_started);
        assert!(!tick(&mut state, &geometry, &t, DT).flash_started);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_flash_expiry_reported() {
        let t = Tuning::default();
        let mut state = GameState::new();
        tick(&mut state, &touching(), &t, DT);

        // Move clear of the obstacle, let the pulse run out
        let outcome = tick(&mut state, &apart(), &t, t.flash_secs + DT);
        assert!(outcome.flash_ended);
        assert!(!state.is_flashing());
    }

    #[test]
    fn test_missing_sprite_halts_without_collision() {
        let t = Tuning::default();
        let mut state = GameState::new();
        state.on_obstacle_cycle(&t);

        let gone = FixedBoxes {
            runner: Some(Aabb::from_edges(0.0, 0.0, 40.0, 40.0)),
            obstacle: None,
        };
        let outcome = tick(&mut state, &gone, &t, DT);
        assert_eq!(outcome.status, TickStatus::Halted);
        assert!(!outcome.collided);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_unlocked_halts_immediately() {
        let t = Tuning::default();
        let mut state = GameState::new();
        for _ in 0..10 {
            state.on_obstacle_cycle(&t);
        }
        assert!(state.unlocked);

        // Even with overlapping sprites, an unlocked game never ticks
        let outcome = tick(&mut state, &touching(), &t, DT);
        assert_eq!(outcome.status, TickStatus::Halted);
        assert!(!outcome.collided);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_full_session_to_unlock() {
        let t = Tuning::default();
        let mut state = GameState::new();
        let geometry = apart();

        let mut unlocks = 0;
        for _ in 0..10 {
            assert_eq!(tick(&mut state, &geometry, &t, DT).status, TickStatus::Continue);
            if state.on_obstacle_cycle(&t) == CycleOutcome::Unlocked {
                unlocks += 1;
            }
        }
        assert_eq!(unlocks, 1);
        assert_eq!(tick(&mut state, &geometry, &t, DT).status, TickStatus::Halted);
    }
}

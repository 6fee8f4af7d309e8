//! Deterministic gameplay module
//!
//! All mini-game logic lives here. This module must stay pure:
//! - Time arrives as an explicit `dt`, never from a clock
//! - Sprite geometry arrives through `GeometryProvider`, never from the DOM
//! - No rendering or platform dependencies

pub mod collision;
pub mod ease;
pub mod state;
pub mod tick;

pub use collision::{Aabb, GeometryProvider};
pub use state::{CycleOutcome, GameState, JumpPhase};
pub use tick::{TickOutcome, TickStatus, tick};

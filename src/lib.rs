//! Logo Runner - the obstacle mini-game that guards the hidden work grid
//!
//! Core modules:
//! - `sim`: Deterministic gameplay (jump animation, collisions, score state)
//! - `settings`: Data-driven tuning with LocalStorage overrides
//!
//! The wasm entry point in `main.rs` wires DOM anchors and input events to
//! the sim and drives it with a cancellable `requestAnimationFrame` loop.

pub mod settings;
pub mod sim;

pub use settings::Tuning;

/// Game configuration defaults
pub mod consts {
    /// Runner displacement at the top of a jump (px, negative = up)
    pub const JUMP_PEAK_PX: f32 = -140.0;
    /// Duration of the rise leg (seconds)
    pub const JUMP_RISE_SECS: f32 = 0.26;
    /// Duration of the fall leg (seconds)
    pub const JUMP_FALL_SECS: f32 = 0.22;

    /// Score gained per survived obstacle cycle
    pub const SCORE_STEP: u32 = 10;
    /// Score at which the hidden grid unlocks
    pub const SCORE_MAX: u32 = 100;

    /// Duration of the collision feedback pulse (seconds)
    pub const FLASH_SECS: f32 = 0.18;
    /// Vertical nudge applied to the runner during the pulse (px)
    pub const FLASH_NUDGE_PX: f32 = -6.0;

    /// Delay between revealed items (milliseconds per index)
    pub const REVEAL_STAGGER_MS: u32 = 120;
}

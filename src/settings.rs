//! Game tuning and preferences
//!
//! Every adjustable constant in one place, overridable per-site via
//! LocalStorage without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Adjustable gameplay constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Jump feel ===
    /// Runner displacement at the top of a jump (px, negative = up)
    pub jump_peak_px: f32,
    /// Rise leg duration (seconds)
    pub jump_rise_secs: f32,
    /// Fall leg duration (seconds)
    pub jump_fall_secs: f32,

    // === Scoring ===
    /// Score gained per survived obstacle cycle
    pub score_step: u32,
    /// Score at which the hidden grid unlocks
    pub score_max: u32,

    // === Collision feedback ===
    /// Feedback pulse duration (seconds)
    pub flash_secs: f32,
    /// Vertical nudge during the pulse (px)
    pub flash_nudge_px: f32,

    // === Unlock reveal ===
    /// Delay between revealed items (milliseconds per index)
    pub reveal_stagger_ms: u32,

    // === Accessibility ===
    /// Suppress the flash pulse and the reveal stagger
    pub reduced_motion: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_peak_px: consts::JUMP_PEAK_PX,
            jump_rise_secs: consts::JUMP_RISE_SECS,
            jump_fall_secs: consts::JUMP_FALL_SECS,
            score_step: consts::SCORE_STEP,
            score_max: consts::SCORE_MAX,
            flash_secs: consts::FLASH_SECS,
            flash_nudge_px: consts::FLASH_NUDGE_PX,
            reveal_stagger_ms: consts::REVEAL_STAGGER_MS,
            reduced_motion: false,
        }
    }
}

impl Tuning {
    /// Effective pulse duration (respects reduced_motion)
    pub fn effective_flash_secs(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { self.flash_secs }
    }

    /// Effective reveal stagger (respects reduced_motion)
    pub fn effective_stagger_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            self.reveal_stagger_ms
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "logo_runner_tuning";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning overrides from LocalStorage");
                    return tuning;
                }
            }
        }

        log::debug!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_playable() {
        let t = Tuning::default();
        assert!(t.jump_peak_px < 0.0);
        assert!(t.jump_rise_secs > 0.0);
        assert!(t.jump_fall_secs > 0.0);
        assert!(t.score_step > 0);
        assert!(t.score_max >= t.score_step);
        // Exactly ten survived cycles from zero reach the threshold
        assert_eq!(t.score_max / t.score_step, 10);
    }

    #[test]
    fn test_reduced_motion_suppresses_effects() {
        let mut t = Tuning::default();
        assert!(t.effective_flash_secs() > 0.0);
        assert!(t.effective_stagger_ms() > 0);

        t.reduced_motion = true;
        assert_eq!(t.effective_flash_secs(), 0.0);
        assert_eq!(t.effective_stagger_ms(), 0);
    }
}

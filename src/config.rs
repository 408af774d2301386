use thiserror::Error;

use crate::components::LAYER_GROUND;

/// All tuning the character is constructed with. Immutable after spawn —
/// the state machine only ever reads it.
#[derive(Clone, Debug)]
pub struct CharacterConfig {
    /// Horizontal speed while running (and sliding, and half of it as
    /// hurt knockback).
    pub run_speed: f32,
    /// Instantaneous vertical velocity applied on jump.
    pub jump_impulse: f32,
    /// Length of the downward ground probe from the character's origin.
    pub probe_distance: f32,
    /// Collision layers the ground probe tests against.
    pub ground_mask: u32,
    pub attack_duration: f32,
    pub slide_duration: f32,
    pub stand_duration: f32,
    pub hurt_duration: f32,
    /// Starting hit points.
    pub life: u32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            run_speed: 4.0,
            jump_impulse: 8.0,
            probe_distance: 0.7,
            ground_mask: LAYER_GROUND,
            attack_duration: 1.0,
            slide_duration: 1.0,
            stand_duration: 0.5,
            hurt_duration: 0.2,
            life: 3,
        }
    }
}

/// Rejected configurations. Construction fails fast; the per-tick step
/// function itself has no error path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("starting life must be at least 1")]
    ZeroLife,
    #[error("ground mask selects no collision layers")]
    EmptyGroundMask,
}

impl CharacterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("run_speed", self.run_speed),
            ("jump_impulse", self.jump_impulse),
            ("probe_distance", self.probe_distance),
            ("attack_duration", self.attack_duration),
            ("slide_duration", self.slide_duration),
            ("stand_duration", self.stand_duration),
            ("hurt_duration", self.hurt_duration),
        ];
        for (name, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.life == 0 {
            return Err(ConfigError::ZeroLife);
        }
        if self.ground_mask == 0 {
            return Err(ConfigError::EmptyGroundMask);
        }
        Ok(())
    }
}

use glam::Vec2;

use crate::config::{CharacterConfig, ConfigError};
use crate::fsm::StateMachine;

// ---------------------------------------------------------------------------
// Locomotion states
// ---------------------------------------------------------------------------

/// All discrete states the character can be in. Exactly one is active per
/// tick.
///
/// Transition logic lives in `systems::player` (where it has access to the
/// input snapshot and current velocity) rather than here so that this file
/// stays pure data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharState {
    /// Standing still, no movement input.
    Idle,
    /// Grounded horizontal movement at run speed.
    Run,
    /// The tick the jump impulse fires. Auto-advances to Glide on its own
    /// tick — the one state that does not wait a tick after entry.
    Jump,
    /// Airborne, ascending or falling, with full horizontal control.
    Glide,
    /// Grounded attack; locked until the attack timer expires.
    Attack,
    /// Holding down while grounded.
    Crouch,
    /// Burst of speed along facing, launched from Crouch. Ends with a stop.
    Slide,
    /// Recovery after a slide before control returns.
    Stand,
    /// Knockback after a hit; costs one life when the timer expires.
    Hurt,
    /// Terminal. No exits, ever.
    Death,
}

impl CharState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Run => "Run",
            Self::Jump => "Jump",
            Self::Glide => "Glide",
            Self::Attack => "Attack",
            Self::Crouch => "Crouch",
            Self::Slide => "Slide",
            Self::Stand => "Stand",
            Self::Hurt => "Hurt",
            Self::Death => "Death",
        }
    }
}

/// Which way the character visually faces. Mirrors facing-dependent
/// velocities (slide travel, hurt knockback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

// ---------------------------------------------------------------------------
// Character — the state the machine owns
// ---------------------------------------------------------------------------

/// Everything the locomotion state machine owns for one character. Mutated
/// exclusively by `systems::player::step_character`; the only external write
/// is `pending_hit`, set by the collision collaborator.
pub struct Character {
    pub fsm: StateMachine<CharState>,
    pub config: CharacterConfig,
    /// Remaining hit points. Reaches 0 only via the Death transition.
    pub life: u32,
    /// Latched true when Death is entered; never cleared.
    pub is_dead: bool,
    pub facing: Facing,
    /// Set by a hazard contact, consumed by the Hurt/Death transition.
    /// A second hit while one is pending has no additional effect.
    pub pending_hit: bool,
    /// Clip selected by the most recent step, consumed by the animation sink.
    pub animation: &'static str,
}

impl Character {
    /// Fails fast on invalid tuning; the per-tick step has no error path.
    pub fn new(config: CharacterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            fsm: StateMachine::new(CharState::Idle),
            life: config.life,
            config,
            is_dead: false,
            facing: Facing::Right,
            pending_hit: false,
            animation: CharState::Idle.name(),
        })
    }

    pub fn state(&self) -> CharState {
        self.fsm.state
    }

    /// Collision-notifier entry point: latch a hit for the next tick to
    /// consume. Dead characters ignore further hits.
    pub fn notify_hit(&mut self) {
        if !self.is_dead {
            self.pending_hit = true;
        }
    }
}

/// The command pair one tick of the state machine emits.
pub struct StepOutput {
    pub velocity: Vec2,
    pub animation: &'static str,
}

// ---------------------------------------------------------------------------
// Animation sink
// ---------------------------------------------------------------------------

/// Receives the selected clip each tick. Re-selecting the current clip is a
/// no-op here so the state machine never has to care about clip restarts.
pub struct AnimationPlayer {
    pub current: &'static str,
}

impl AnimationPlayer {
    pub fn new(initial: &'static str) -> Self {
        Self { current: initial }
    }

    /// Returns true when the clip actually changed.
    pub fn play(&mut self, clip: &'static str) -> bool {
        if self.current == clip {
            return false;
        }
        self.current = clip;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_character_starts_idle_with_configured_life() {
        let ch = Character::new(CharacterConfig::default()).unwrap();
        assert_eq!(ch.state(), CharState::Idle);
        assert_eq!(ch.life, 3);
        assert!(!ch.is_dead);
        assert_eq!(ch.facing, Facing::Right);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = CharacterConfig {
            slide_duration: -1.0,
            ..Default::default()
        };
        assert!(Character::new(config).is_err());
    }

    #[test]
    fn replaying_the_same_clip_is_a_no_op() {
        let mut player = AnimationPlayer::new("Idle");
        assert!(!player.play("Idle"));
        assert!(player.play("Run"));
        assert!(!player.play("Run"));
        assert_eq!(player.current, "Run");
    }
}

use glam::Vec2;
use hecs::{Entity, World};
use tracing::debug;

use crate::components::{
    CharState, Character, CollisionEvent, Facing, Layers, Player, StepOutput, Transform, Velocity,
    LAYER_HAZARD,
};
use crate::engine::input::InputSnapshot;
use crate::systems::raycast::probe_ground;

// ---------------------------------------------------------------------------
// The per-tick step — the whole state machine lives here
// ---------------------------------------------------------------------------

/// Advance the character one fixed tick.
///
/// `velocity` is the character's current velocity as integrated by the motion
/// sink; the returned command is what the sink should apply this tick. The
/// vertical component passes through untouched except for the jump impulse
/// and the slide stop.
///
/// In-tick order: sensing → facing → active-state action and timer →
/// active-state exits → global hit interrupt. At most one transition fires
/// per tick, and the entered state's own logic runs on the *next* tick —
/// with the single exception of Jump, which auto-advances to Glide on its
/// own tick.
pub fn step_character(
    ch: &mut Character,
    input: &InputSnapshot,
    velocity: Vec2,
    dt: f32,
) -> StepOutput {
    // Sensing: latch an edge-triggered hit into the pending flag.
    if input.hit {
        ch.notify_hit();
    }

    if ch.is_dead {
        // Terminal: the step stays callable forever and keeps returning the
        // frozen pair. Facing and timers no longer move.
        return StepOutput { velocity, animation: CharState::Death.name() };
    }

    // Facing follows the most recent nonzero horizontal input while alive.
    if input.horizontal_axis > 0.0 {
        ch.facing = Facing::Right;
    } else if input.horizontal_axis < 0.0 {
        ch.facing = Facing::Left;
    }

    ch.fsm.tick(dt);

    let state = ch.fsm.state;
    let axis = input.horizontal_axis;
    let crouch = input.crouch_held();
    let run = ch.config.run_speed;

    // Active-state action: select the clip and the velocity command. Runs
    // before exit evaluation so the tick's effects land even when a
    // transition fires the same tick.
    let animation = match state {
        CharState::Glide => {
            if velocity.y > 0.0 {
                "Jump"
            } else {
                "Fall"
            }
        }
        other => other.name(),
    };

    let mut vel = velocity;
    match state {
        CharState::Run | CharState::Glide => vel.x = run * axis,
        CharState::Jump => vel = Vec2::new(run * axis, ch.config.jump_impulse),
        CharState::Slide => {
            vel.x = match ch.facing {
                Facing::Right => run,
                Facing::Left => -run,
            };
        }
        CharState::Hurt => {
            // Knockback away from facing. A hit landing while already in
            // Hurt is swallowed here, before the interrupt check, so Hurt
            // never re-enters itself.
            ch.pending_hit = false;
            vel.x = match ch.facing {
                Facing::Right => -0.5 * run,
                Facing::Left => 0.5 * run,
            };
        }
        _ => {}
    }

    // Exit transitions, first match wins. Timer expiries reset the counter
    // through StateMachine::go; the slide stop and the hurt life cost belong
    // to the expiry, not to the entry of the next state.
    let chosen = match state {
        CharState::Idle => idle_exit(input, axis, crouch),

        CharState::Run => {
            if input.grounded && input.jump_held {
                Some(CharState::Jump)
            } else if axis == 0.0 {
                Some(CharState::Idle)
            } else {
                None
            }
        }

        // Unconditional one-tick state: Glide starts next tick.
        CharState::Jump => Some(CharState::Glide),

        CharState::Glide => {
            if input.grounded {
                Some(if axis != 0.0 { CharState::Run } else { CharState::Idle })
            } else {
                None
            }
        }

        CharState::Attack => {
            (ch.fsm.elapsed > ch.config.attack_duration).then_some(CharState::Idle)
        }

        CharState::Crouch => {
            if !crouch {
                Some(CharState::Idle)
            } else if input.jump_held {
                Some(CharState::Slide)
            } else {
                None
            }
        }

        CharState::Slide => {
            if ch.fsm.elapsed > ch.config.slide_duration {
                vel.x = 0.0;
                Some(CharState::Stand)
            } else {
                None
            }
        }

        CharState::Stand => (ch.fsm.elapsed > ch.config.stand_duration).then(|| {
            if axis != 0.0 {
                CharState::Run
            } else if crouch {
                CharState::Crouch
            } else {
                CharState::Idle
            }
        }),

        CharState::Hurt => {
            if ch.fsm.elapsed > ch.config.hurt_duration {
                ch.life -= 1;
                Some(if axis != 0.0 {
                    CharState::Run
                } else if crouch {
                    CharState::Crouch
                } else if ch.life == 0 {
                    CharState::Death
                } else {
                    CharState::Idle
                })
            } else {
                None
            }
        }

        CharState::Death => None,
    };

    // Global hit interrupt: evaluated after the state's own logic, overriding
    // whatever exit it chose this tick. At one life or less the hit routes
    // straight to Death without another Hurt cycle.
    let next = if ch.pending_hit {
        ch.pending_hit = false;
        if ch.life <= 1 {
            Some(CharState::Death)
        } else {
            Some(CharState::Hurt)
        }
    } else {
        chosen
    };

    if let Some(next) = next {
        enter(ch, next, &mut vel, axis);
    }

    ch.animation = animation;
    StepOutput { velocity: vel, animation }
}

/// Idle's exits, top to bottom. Nothing leaves Idle while airborne.
fn idle_exit(input: &InputSnapshot, axis: f32, crouch: bool) -> Option<CharState> {
    if !input.grounded {
        return None;
    }
    if input.attack_held && axis == 0.0 {
        Some(CharState::Attack)
    } else if crouch {
        Some(CharState::Crouch)
    } else if input.jump_held {
        Some(CharState::Jump)
    } else if axis != 0.0 {
        Some(CharState::Run)
    } else {
        None
    }
}

/// Apply entry effects and commit the transition.
fn enter(ch: &mut Character, next: CharState, vel: &mut Vec2, axis: f32) {
    match next {
        CharState::Jump => {
            // Impulse fires on the transition tick so the motion sink sees it
            // immediately.
            *vel = Vec2::new(ch.config.run_speed * axis, ch.config.jump_impulse);
        }
        CharState::Death => {
            ch.life = 0;
            ch.is_dead = true;
        }
        _ => {}
    }
    debug!(
        from = ch.fsm.state.name(),
        to = next.name(),
        life = ch.life,
        "state transition"
    );
    ch.fsm.go(next);
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Sense the environment and step every player character one fixed tick.
/// `controls` carries the device/script half of the snapshot; grounding is
/// probed here, and hazard hits arrive separately via [`hazard_system`].
pub fn character_state_system(world: &mut World, controls: &InputSnapshot, dt: f32) {
    let players: Vec<(Entity, Vec2, f32, u32)> = world
        .query::<(&Transform, &Character)>()
        .with::<&Player>()
        .iter()
        .map(|(e, (t, ch))| (e, t.position, ch.config.probe_distance, ch.config.ground_mask))
        .collect();

    for (entity, origin, probe_distance, mask) in players {
        let grounded = probe_ground(world, origin, probe_distance, mask);
        let input = InputSnapshot { grounded, ..*controls };

        if let Ok((ch, vel)) = world.query_one_mut::<(&mut Character, &mut Velocity)>(entity) {
            let out = step_character(ch, &input, vel.0, dt);
            vel.0 = out.velocity;
        }
    }
}

/// Latch pending hits from this tick's contacts. A contact counts when the
/// other party occupies the hazard layer. Hits while one is already pending,
/// or after death, have no additional effect.
pub fn hazard_system(world: &mut World, events: &[CollisionEvent]) {
    let mut hit = Vec::new();
    for event in events {
        for (me, other) in [
            (event.entity_a, event.entity_b),
            (event.entity_b, event.entity_a),
        ] {
            let is_character = world.get::<&Character>(me).is_ok();
            let hazardous = world
                .get::<&Layers>(other)
                .map_or(false, |layers| layers.0 & LAYER_HAZARD != 0);
            if is_character && hazardous {
                hit.push(me);
            }
        }
    }
    for entity in hit {
        if let Ok(ch) = world.query_one_mut::<&mut Character>(entity) {
            ch.notify_hit();
        }
    }
}

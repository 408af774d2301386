use glam::Vec2;
use hecs::World;

use crate::components::{Static, Transform, Velocity};

/// Fixed simulation timestep. The state machine, the motion sink, and the
/// collision pass all advance at this rate.
pub const PHYSICS_DT: f32 = 1.0 / 60.0;

const GRAVITY: Vec2 = Vec2::new(0.0, -25.0);

/// The motion sink: apply gravity and integrate positions for one fixed step.
/// Vertical velocity is owned here — the state machine only ever overrides it
/// for the jump impulse and the slide stop.
pub fn physics_step(world: &mut World) {
    for (_entity, (transform, vel)) in world
        .query_mut::<(&mut Transform, &mut Velocity)>()
        .without::<&Static>()
    {
        // Semi-implicit Euler: update velocity first, then position.
        vel.0 += GRAVITY * PHYSICS_DT;
        transform.position += vel.0 * PHYSICS_DT;
    }
}

use glam::Vec2;
use hecs::{Entity, World};

use crate::config::{CharacterConfig, ConfigError};
use crate::scene::prefabs::{spawn_hazard, spawn_platform, spawn_player};

/// Small demo course: a long floor with a spike strip partway along it.
/// The player spawns in the air above the left end and drops in.
pub fn load_test_scene(world: &mut World) -> Result<Entity, ConfigError> {
    // Floor top surface at y = 0, spanning x in [-3, 21].
    spawn_platform(world, Vec2::new(9.0, -1.0), Vec2::new(12.0, 1.0));
    // Spikes sitting on the floor at x = 6.
    spawn_hazard(world, Vec2::new(6.0, 0.5), Vec2::new(0.3, 0.5));

    spawn_player(world, Vec2::new(0.0, 2.0), CharacterConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{AnimationPlayer, CharState, Character, Transform};
    use crate::engine::input::InputSnapshot;
    use crate::systems::{
        animation_system, character_state_system, collision_system, hazard_system, physics_step,
        PHYSICS_DT,
    };

    /// Full host-loop run: drop in, land, run right, hit the spikes three
    /// times, die. Exercises every collaborator end to end.
    #[test]
    fn running_into_the_spikes_is_eventually_fatal() {
        let mut world = World::new();
        let player = load_test_scene(&mut world).unwrap();

        let controls = InputSnapshot {
            horizontal_axis: 1.0,
            ..Default::default()
        };

        let mut saw_run = false;
        for _ in 0..600 {
            character_state_system(&mut world, &controls, PHYSICS_DT);
            physics_step(&mut world);
            let events = collision_system(&mut world);
            hazard_system(&mut world, &events);
            animation_system(&mut world);

            let ch = world.get::<&Character>(player).unwrap();
            saw_run = saw_run || ch.state() == CharState::Run;
            if ch.is_dead {
                break;
            }
        }

        let ch = world.get::<&Character>(player).unwrap();
        assert!(saw_run, "character never entered Run on the way in");
        assert!(ch.is_dead, "character should have died on the spikes");
        assert_eq!(ch.life, 0);
        assert_eq!(ch.state(), CharState::Death);

        // The corpse lies near the spikes, not at the spawn point.
        let transform = world.get::<&Transform>(player).unwrap();
        assert!(transform.position.x > 3.0);
        drop(ch);
        drop(transform);

        // One more tick: the sink settles on the death clip and stays there.
        character_state_system(&mut world, &controls, PHYSICS_DT);
        animation_system(&mut world);
        assert_eq!(world.get::<&AnimationPlayer>(player).unwrap().current, "Death");
    }
}

use hecs::World;
use tracing::debug;

use crate::components::{AnimationPlayer, Character};

/// Push each character's selected clip into its animation sink. Re-selecting
/// the playing clip is a no-op inside the sink, so this can run every tick.
pub fn animation_system(world: &mut World) {
    for (_entity, (ch, player)) in world.query_mut::<(&Character, &mut AnimationPlayer)>() {
        if player.play(ch.animation) {
            debug!(clip = ch.animation, "animation change");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CharacterConfig;

    #[test]
    fn sink_follows_the_selected_clip() {
        let mut world = World::new();
        let mut ch = Character::new(CharacterConfig::default()).unwrap();
        ch.animation = "Run";
        let entity = world.spawn((ch, AnimationPlayer::new("Idle")));

        animation_system(&mut world);
        assert_eq!(world.get::<&AnimationPlayer>(entity).unwrap().current, "Run");

        // Unchanged selection leaves the sink alone.
        animation_system(&mut world);
        assert_eq!(world.get::<&AnimationPlayer>(entity).unwrap().current, "Run");
    }
}

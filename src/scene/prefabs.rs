use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{
    AnimationPlayer, CharState, Character, Collider, Layers, Player, Static, Transform, Velocity,
    LAYER_GROUND, LAYER_HAZARD,
};
use crate::config::{CharacterConfig, ConfigError};

/// Character half size. The ground probe starts at the entity origin, so the
/// configured probe distance must exceed this for grounding to register.
const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(0.35, 0.5);

/// Spawn the player character with its state machine, collider, and
/// animation sink. Fails if the configuration is invalid.
pub fn spawn_player(
    world: &mut World,
    position: Vec2,
    config: CharacterConfig,
) -> Result<Entity, ConfigError> {
    let character = Character::new(config)?;
    Ok(world.spawn((
        character,
        Player,
        Transform::new(position),
        Velocity(Vec2::ZERO),
        Collider { half_extents: PLAYER_HALF_EXTENTS },
        AnimationPlayer::new(CharState::Idle.name()),
    )))
}

/// Solid, walkable geometry.
pub fn spawn_platform(world: &mut World, center: Vec2, half_extents: Vec2) -> Entity {
    world.spawn((
        Transform::new(center),
        Collider { half_extents },
        Layers(LAYER_GROUND),
        Static,
    ))
}

/// Damaging sensor volume — contact sets the character's pending hit.
pub fn spawn_hazard(world: &mut World, center: Vec2, half_extents: Vec2) -> Entity {
    world.spawn((
        Transform::new(center),
        Collider { half_extents },
        Layers(LAYER_HAZARD),
        Static,
    ))
}

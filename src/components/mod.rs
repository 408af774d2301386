use glam::Vec2;
use hecs::Entity;

mod character;

pub use character::{AnimationPlayer, CharState, Character, Facing, StepOutput};

/// World-space position. The simulation is a 2D side view: +x right, +y up.
pub struct Transform {
    pub position: Vec2,
}

impl Transform {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

/// Linear velocity in world space. The vertical component belongs to the
/// physics step (gravity, contact resolution); the state machine only writes
/// it for the jump impulse and the slide stop.
pub struct Velocity(pub Vec2);

/// Axis-aligned collision box centered on the entity's Transform.
pub struct Collider {
    pub half_extents: Vec2,
}

/// Collision layer bitmask. An entity occupies the layers whose bits are set;
/// probes and masks test with a bitwise AND.
#[derive(Clone, Copy)]
pub struct Layers(pub u32);

/// Walkable geometry the ground probe can hit.
pub const LAYER_GROUND: u32 = 1 << 0;
/// Damaging contacts: touching a collider on this layer sets the
/// character's pending-hit flag.
pub const LAYER_HAZARD: u32 = 1 << 1;

/// Marker: entity is immovable level geometry.
pub struct Static;

/// Marker: this entity is the player character.
pub struct Player;

/// Contact produced by the detection phase.
/// `contact_normal` points from entity_a toward entity_b.
pub struct CollisionEvent {
    pub entity_a: Entity,
    pub entity_b: Entity,
    pub contact_normal: Vec2,
    pub penetration_depth: f32,
}

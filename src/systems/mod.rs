mod animation;
mod collision;
mod physics;
mod player;
pub mod raycast;

pub use animation::animation_system;
pub use collision::collision_system;
pub use physics::{physics_step, PHYSICS_DT};
pub use player::{character_state_system, hazard_system, step_character};

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Collider, Layers, Transform};

pub struct RaycastHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Cast a ray against every collider whose layers intersect `mask`, returning
/// the nearest hit within `max_distance`.
pub fn raycast(
    world: &World,
    origin: Vec2,
    direction: Vec2,
    max_distance: f32,
    mask: u32,
) -> Option<RaycastHit> {
    let dir = direction.normalize();
    let mut best: Option<RaycastHit> = None;

    for (entity, (transform, collider, layers)) in
        world.query::<(&Transform, &Collider, &Layers)>().iter()
    {
        if layers.0 & mask == 0 {
            continue;
        }

        if let Some(t) = ray_aabb_intersection(origin, dir, transform.position, collider.half_extents)
        {
            if t > 0.0 && t <= max_distance {
                let is_closer = best.as_ref().map_or(true, |b| t < b.distance);
                if is_closer {
                    best = Some(RaycastHit { entity, distance: t });
                }
            }
        }
    }

    best
}

/// The grounded sense: a straight-down probe of fixed range from the
/// character's origin against the configured ground mask.
pub fn probe_ground(world: &World, origin: Vec2, probe_distance: f32, mask: u32) -> bool {
    raycast(world, origin, Vec2::NEG_Y, probe_distance, mask).is_some()
}

fn ray_aabb_intersection(origin: Vec2, dir: Vec2, center: Vec2, half: Vec2) -> Option<f32> {
    let min = center - half;
    let max = center + half;
    let inv_dir = Vec2::new(1.0 / dir.x, 1.0 / dir.y);

    let t1 = (min.x - origin.x) * inv_dir.x;
    let t2 = (max.x - origin.x) * inv_dir.x;
    let t3 = (min.y - origin.y) * inv_dir.y;
    let t4 = (max.y - origin.y) * inv_dir.y;

    let tmin = t1.min(t2).max(t3.min(t4));
    let tmax = t1.max(t2).min(t3.max(t4));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }
    // If tmin < 0, ray starts inside the box — return tmax
    Some(if tmin < 0.0 { tmax } else { tmin })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{LAYER_GROUND, LAYER_HAZARD};

    fn world_with_floor() -> World {
        let mut world = World::new();
        // Floor slab: top surface at y = 0.
        world.spawn((
            Transform::new(Vec2::new(0.0, -1.0)),
            Collider { half_extents: Vec2::new(10.0, 1.0) },
            Layers(LAYER_GROUND),
        ));
        world
    }

    #[test]
    fn probe_finds_ground_within_range() {
        let world = world_with_floor();
        assert!(probe_ground(&world, Vec2::new(0.0, 0.5), 0.7, LAYER_GROUND));
    }

    #[test]
    fn probe_misses_ground_out_of_range() {
        let world = world_with_floor();
        assert!(!probe_ground(&world, Vec2::new(0.0, 2.0), 0.7, LAYER_GROUND));
    }

    #[test]
    fn probe_respects_the_layer_mask() {
        let world = world_with_floor();
        assert!(!probe_ground(&world, Vec2::new(0.0, 0.5), 0.7, LAYER_HAZARD));
    }

    #[test]
    fn raycast_returns_the_nearest_hit() {
        let mut world = world_with_floor();
        // A platform closer to the origin than the floor.
        let platform = world.spawn((
            Transform::new(Vec2::new(0.0, 1.0)),
            Collider { half_extents: Vec2::new(1.0, 0.25) },
            Layers(LAYER_GROUND),
        ));

        let hit = raycast(&world, Vec2::new(0.0, 2.0), Vec2::NEG_Y, 5.0, LAYER_GROUND)
            .expect("should hit the platform");
        assert_eq!(hit.entity, platform);
        assert!((hit.distance - 0.75).abs() < 1e-5);
    }
}

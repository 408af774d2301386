use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Collider, CollisionEvent, Layers, Static, Transform, Velocity, LAYER_HAZARD};

struct ColliderEntry {
    entity: Entity,
    position: Vec2,
    half_extents: Vec2,
    layers: u32,
}

/// AABB overlap test. `a` is the dynamic body, `b` the static one; the
/// returned normal points from a toward b along the axis of least overlap.
fn test_pair(a: &ColliderEntry, b: &ColliderEntry) -> Option<CollisionEvent> {
    let diff = b.position - a.position;
    let overlap = a.half_extents + b.half_extents - diff.abs();
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return None;
    }

    let (contact_normal, penetration_depth) = if overlap.x < overlap.y {
        (Vec2::new(diff.x.signum(), 0.0), overlap.x)
    } else {
        (Vec2::new(0.0, diff.y.signum()), overlap.y)
    };

    Some(CollisionEvent {
        entity_a: a.entity,
        entity_b: b.entity,
        contact_normal,
        penetration_depth,
    })
}

/// Detect dynamic-vs-static contacts and resolve the solid ones.
///
/// Hazard-layer colliders are sensors: they produce an event (for the hazard
/// notifier) but never push the body or touch its velocity. Solid contacts
/// push the dynamic body out along the contact normal and kill the velocity
/// component driving into the surface — landing on a floor zeroes vy,
/// running into a wall zeroes vx.
pub fn collision_system(world: &mut World) -> Vec<CollisionEvent> {
    let dynamics: Vec<ColliderEntry> = world
        .query::<(&Transform, &Collider)>()
        .with::<&Velocity>()
        .without::<&Static>()
        .iter()
        .map(|(entity, (t, c))| ColliderEntry {
            entity,
            position: t.position,
            half_extents: c.half_extents,
            layers: 0,
        })
        .collect();

    let statics: Vec<ColliderEntry> = world
        .query::<(&Transform, &Collider, &Layers)>()
        .with::<&Static>()
        .iter()
        .map(|(entity, (t, c, layers))| ColliderEntry {
            entity,
            position: t.position,
            half_extents: c.half_extents,
            layers: layers.0,
        })
        .collect();

    let mut events = Vec::new();
    for body in &dynamics {
        for geo in &statics {
            let Some(event) = test_pair(body, geo) else {
                continue;
            };

            let sensor = geo.layers & LAYER_HAZARD != 0;
            if !sensor {
                if let Ok((transform, vel)) =
                    world.query_one_mut::<(&mut Transform, &mut Velocity)>(body.entity)
                {
                    transform.position -= event.contact_normal * event.penetration_depth;
                    let into_surface = vel.0.dot(event.contact_normal);
                    if into_surface > 0.0 {
                        vel.0 -= event.contact_normal * into_surface;
                    }
                }
            }
            events.push(event);
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::LAYER_GROUND;

    fn spawn_floor(world: &mut World) -> Entity {
        world.spawn((
            Transform::new(Vec2::new(0.0, -1.0)),
            Collider { half_extents: Vec2::new(10.0, 1.0) },
            Layers(LAYER_GROUND),
            Static,
        ))
    }

    #[test]
    fn landing_is_resolved_and_vertical_velocity_zeroed() {
        let mut world = World::new();
        spawn_floor(&mut world);
        // Body sunk 0.2 into the floor (top surface y=0), still falling.
        let body = world.spawn((
            Transform::new(Vec2::new(0.0, 0.3)),
            Collider { half_extents: Vec2::new(0.5, 0.5) },
            Velocity(Vec2::new(1.0, -5.0)),
        ));

        let events = collision_system(&mut world);
        assert_eq!(events.len(), 1);

        let transform = world.get::<&Transform>(body).unwrap();
        assert!((transform.position.y - 0.5).abs() < 1e-5);
        let vel = world.get::<&Velocity>(body).unwrap();
        assert_eq!(vel.0.y, 0.0);
        // Horizontal motion is untouched by a floor contact.
        assert_eq!(vel.0.x, 1.0);
    }

    #[test]
    fn separated_bodies_produce_no_events() {
        let mut world = World::new();
        spawn_floor(&mut world);
        world.spawn((
            Transform::new(Vec2::new(0.0, 3.0)),
            Collider { half_extents: Vec2::new(0.5, 0.5) },
            Velocity(Vec2::ZERO),
        ));

        assert!(collision_system(&mut world).is_empty());
    }

    #[test]
    fn hazards_are_sensors_only() {
        let mut world = World::new();
        let spikes = world.spawn((
            Transform::new(Vec2::ZERO),
            Collider { half_extents: Vec2::new(0.5, 0.5) },
            Layers(LAYER_HAZARD),
            Static,
        ));
        let body = world.spawn((
            Transform::new(Vec2::new(0.25, 0.0)),
            Collider { half_extents: Vec2::new(0.5, 0.5) },
            Velocity(Vec2::new(-2.0, 0.0)),
        ));

        let events = collision_system(&mut world);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].entity_b, spikes);

        // No pushback, no velocity change.
        let transform = world.get::<&Transform>(body).unwrap();
        assert_eq!(transform.position, Vec2::new(0.25, 0.0));
        let vel = world.get::<&Velocity>(body).unwrap();
        assert_eq!(vel.0, Vec2::new(-2.0, 0.0));
    }
}

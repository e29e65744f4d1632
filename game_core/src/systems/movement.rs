use crate::Bird;
use hecs::World;

/// Integrate gravity for one frame.
///
/// Displacement uses the velocity carried in from the previous frame; gravity
/// only affects the next frame's displacement. Hitting the ceiling clamps the
/// bird to 0 and kills its velocity.
pub fn integrate_bird(world: &mut World, gravity: f32) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.y += bird.vel;
        bird.vel += gravity;

        if bird.y < 0.0 {
            bird.y = 0.0;
            bird.vel = 0.0;
        }
    }
}

/// Overwrite the bird's velocity with an upward impulse
pub fn apply_jump(world: &mut World, strength: f32) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.vel = -strength;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_bird;

    fn bird_of(world: &World) -> Bird {
        let mut query = world.query::<&Bird>();
        *query.iter().next().map(|(_e, b)| b).unwrap()
    }

    #[test]
    fn test_first_frame_uses_carried_velocity() {
        let mut world = World::new();
        create_bird(&mut world, 100.0);

        integrate_bird(&mut world, 0.5);

        let bird = bird_of(&world);
        assert_eq!(bird.y, 100.0, "No displacement on the first frame from rest");
        assert_eq!(bird.vel, 0.5);

        integrate_bird(&mut world, 0.5);
        let bird = bird_of(&world);
        assert_eq!(bird.y, 100.5);
        assert_eq!(bird.vel, 1.0);
    }

    #[test]
    fn test_descent_is_monotonic_once_falling() {
        let mut world = World::new();
        create_bird(&mut world, 10.0);
        integrate_bird(&mut world, 0.1);

        let mut last_y = bird_of(&world).y;
        for _ in 0..200 {
            integrate_bird(&mut world, 0.1);
            let y = bird_of(&world).y;
            assert!(y > last_y, "Bird should keep falling: {} -> {}", last_y, y);
            last_y = y;
        }
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut world = World::new();
        create_bird(&mut world, 100.0);

        for vel in [12.0, -1.0, 0.0] {
            for (_e, bird) in world.query_mut::<&mut Bird>() {
                bird.vel = vel;
            }
            apply_jump(&mut world, 4.0);
            assert_eq!(bird_of(&world).vel, -4.0, "Prior velocity {} ignored", vel);
        }
    }

    #[test]
    fn test_ceiling_clamp() {
        let mut world = World::new();
        create_bird(&mut world, 2.0);
        apply_jump(&mut world, 5.0);

        integrate_bird(&mut world, 0.1);

        let bird = bird_of(&world);
        assert_eq!(bird.y, 0.0, "Bird must not go above the ceiling");
        assert_eq!(bird.vel, 0.0, "Velocity resets on clamp");
    }
}

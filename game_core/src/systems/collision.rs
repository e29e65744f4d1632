use crate::{Bird, Config, Events, PipePair};
use hecs::World;

/// Check the bird against the ground and every pipe segment.
///
/// Sets `events.hit_ground` or `events.hit_pipe` and returns true on the
/// first terminal collision; remaining checks are skipped.
pub fn check_collisions(world: &World, config: &Config, events: &mut Events) -> bool {
    let bird = {
        let mut query = world.query::<&Bird>();
        query.iter().next().map(|(_e, bird)| bird.bounds(config))
    };
    let Some(bird) = bird else {
        return false;
    };

    if bird.bottom() >= config.ground_top() {
        events.hit_ground = true;
        return true;
    }

    for (_entity, pipe) in world.query::<&PipePair>().iter() {
        let bounds = pipe.bounds(config);
        if bounds.segments().iter().any(|seg| bird.overlaps(seg)) {
            events.hit_pipe = Some(pipe.slot);
            return true;
        }
    }

    false
}

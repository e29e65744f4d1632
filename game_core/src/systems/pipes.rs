//! Obstacle pool: a fixed set of pipe pairs that scroll left and get recycled
//! at the right edge instead of being despawned.

use crate::{Config, Events, GameRng, PipeBounds, PipePair};
use hecs::World;

/// Despawn any existing pipe pairs and spawn a fresh pool of `config.pipe_count`
pub fn spawn_all(world: &mut World, config: &Config, rng: &mut GameRng) {
    let existing: Vec<hecs::Entity> = world
        .query::<&PipePair>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    for entity in existing {
        // Entity came from the query above, despawn cannot miss
        let _ = world.despawn(entity);
    }

    for slot in 0..config.pipe_count {
        let bottom = rng.percent_in(config.bottom_min_percent, config.bottom_max_percent);
        world.spawn((PipePair::new(
            slot,
            config.spawn_x(slot),
            bottom,
            config.top_percent(bottom),
        ),));
    }
}

/// Scroll every pair left by `speed`, recycling pairs that left the screen
pub fn advance_pipes(
    world: &mut World,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
    speed: f32,
) {
    for (_entity, pipe) in world.query_mut::<&mut PipePair>() {
        pipe.x -= speed;

        if pipe.right(config) < 0.0 {
            let bottom = rng.percent_in(config.bottom_min_percent, config.bottom_max_percent);
            pipe.bottom_percent = bottom;
            pipe.top_percent = config.top_percent(bottom);
            pipe.x = config.recycle_x();
            pipe.passed = false;
            events.pipes_recycled += 1;
        }
    }
}

/// Current hitboxes of the pair occupying `slot`
pub fn pipe_bounds(world: &World, config: &Config, slot: usize) -> Option<PipeBounds> {
    world
        .query::<&PipePair>()
        .iter()
        .find(|(_e, pipe)| pipe.slot == slot)
        .map(|(_e, pipe)| pipe.bounds(config))
}

/// Pipe pairs ordered by slot
pub fn pipes_by_slot(world: &World) -> Vec<PipePair> {
    let mut pipes: Vec<PipePair> = world
        .query::<&PipePair>()
        .iter()
        .map(|(_e, pipe)| *pipe)
        .collect();
    pipes.sort_by_key(|p| p.slot);
    pipes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (World, Config, GameRng, Events) {
        (World::new(), Config::new(), GameRng::new(12345), Events::new())
    }

    #[test]
    fn test_spawn_all_creates_staggered_pool() {
        let (mut world, config, mut rng, _events) = setup();
        spawn_all(&mut world, &config, &mut rng);

        let pipes = pipes_by_slot(&world);
        assert_eq!(pipes.len(), config.pipe_count);
        for (i, pipe) in pipes.iter().enumerate() {
            assert_eq!(pipe.slot, i);
            assert_eq!(pipe.x, config.spawn_x(i));
            assert!(!pipe.passed);
            assert!((20..50).contains(&pipe.bottom_percent));
            assert_eq!(pipe.bottom_percent + pipe.top_percent + config.gap_percent, 100);
        }
    }

    #[test]
    fn test_spawn_all_replaces_existing_pool() {
        let (mut world, config, mut rng, _events) = setup();
        spawn_all(&mut world, &config, &mut rng);
        spawn_all(&mut world, &config, &mut rng);

        assert_eq!(world.query::<&PipePair>().iter().count(), config.pipe_count);
    }

    #[test]
    fn test_advance_scrolls_left() {
        let (mut world, config, mut rng, mut events) = setup();
        spawn_all(&mut world, &config, &mut rng);

        advance_pipes(&mut world, &config, &mut rng, &mut events, 3.0);

        for pipe in pipes_by_slot(&world) {
            assert_eq!(pipe.x, config.spawn_x(pipe.slot) - 3.0);
        }
        assert_eq!(events.pipes_recycled, 0);
    }

    #[test]
    fn test_recycle_when_fully_off_screen() {
        let (mut world, config, mut rng, mut events) = setup();
        spawn_all(&mut world, &config, &mut rng);
        for (_e, pipe) in world.query_mut::<&mut PipePair>() {
            if pipe.slot == 2 {
                pipe.x = -config.pipe_width + 1.0;
                pipe.passed = true;
            }
        }

        // Right edge still on screen: 1.0 - 0.5 > 0
        advance_pipes(&mut world, &config, &mut rng, &mut events, 0.5);
        assert_eq!(events.pipes_recycled, 0);

        // Right edge now at -0.5
        advance_pipes(&mut world, &config, &mut rng, &mut events, 1.0);
        assert_eq!(events.pipes_recycled, 1);

        let pipe = pipes_by_slot(&world)[2];
        assert_eq!(pipe.x, config.recycle_x());
        assert!(!pipe.passed, "Recycling clears the passed flag");
        assert_eq!(pipe.bottom_percent + pipe.top_percent + config.gap_percent, 100);
    }

    #[test]
    fn test_pool_size_invariant_over_long_play() {
        let (mut world, config, mut rng, mut events) = setup();
        spawn_all(&mut world, &config, &mut rng);

        let mut recycled = 0;
        for _ in 0..20_000 {
            events.clear();
            advance_pipes(&mut world, &config, &mut rng, &mut events, config.scroll_speed);
            recycled += events.pipes_recycled;
        }

        assert!(recycled > config.pipe_count as u32, "Pool should have cycled");
        let pipes = pipes_by_slot(&world);
        assert_eq!(pipes.len(), config.pipe_count);
        let slots: Vec<usize> = pipes.iter().map(|p| p.slot).collect();
        assert_eq!(slots, (0..config.pipe_count).collect::<Vec<_>>());
    }

    #[test]
    fn test_recycled_pool_layout_is_uneven() {
        let (mut world, config, mut rng, mut events) = setup();
        spawn_all(&mut world, &config, &mut rng);

        // Let every slot recycle at least once before measuring
        let warmup = ((config.spawn_x(config.pipe_count) + config.pipe_width)
            / config.scroll_speed) as usize;
        let mut min_gap = f32::MAX;
        for frame in 0..warmup + 5000 {
            advance_pipes(&mut world, &config, &mut rng, &mut events, config.scroll_speed);
            let mut xs: Vec<f32> = pipes_by_slot(&world).iter().map(|p| p.x).collect();
            for x in &xs {
                assert!(*x >= -config.pipe_width - config.scroll_speed);
                assert!(*x <= config.spawn_x(config.pipe_count - 1));
            }
            if frame < warmup {
                continue;
            }
            xs.sort_by(|a, b| a.total_cmp(b));
            for pair in xs.windows(2) {
                min_gap = min_gap.min(pair[1] - pair[0]);
            }
        }

        // Re-entry at a fixed x crowds some neighbours closer than the spacing
        assert!(min_gap > 0.0, "Two pairs should never share a left edge");
        assert!(min_gap < config.pipe_spacing / 2.0, "min gap {}", min_gap);
    }

    #[test]
    fn test_pipe_bounds_by_slot() {
        let (mut world, config, mut rng, _events) = setup();
        spawn_all(&mut world, &config, &mut rng);

        let bounds = pipe_bounds(&world, &config, 1).unwrap();
        assert_eq!(bounds.bottom.left(), config.spawn_x(1));
        assert_eq!(bounds.top.left(), config.spawn_x(1));
        assert!(pipe_bounds(&world, &config, config.pipe_count).is_none());
    }
}

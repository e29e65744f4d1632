use crate::{Config, Events, PipePair, Score};
use hecs::World;

/// Award a point for each pipe pair the bird has fully cleared.
///
/// A pair scores once per approach: its `passed` flag stays set until the
/// pair is recycled.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let bird_left = config.player_x;

    for (_entity, pipe) in world.query_mut::<&mut PipePair>() {
        if !pipe.passed && pipe.right(config) < bird_left {
            pipe.passed = true;
            score.increment();
            events.pipes_passed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_pipe;

    fn setup_world() -> (World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    #[test]
    fn test_scores_when_pipe_cleared() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_pipe(&mut world, &config, 0, config.player_x - config.pipe_width - 1.0, 30);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.points, 1);
        assert_eq!(events.pipes_passed, 1);
    }

    #[test]
    fn test_no_score_while_edges_align() {
        let (mut world, config, mut score, mut events) = setup_world();
        // Right edge exactly at the bird's left edge: not strictly left yet
        create_pipe(&mut world, &config, 0, config.player_x - config.pipe_width, 30);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.points, 0);
    }

    #[test]
    fn test_scores_once_per_approach() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_pipe(&mut world, &config, 0, config.player_x - config.pipe_width - 1.0, 30);

        for _ in 0..10 {
            check_scoring(&mut world, &config, &mut score, &mut events);
        }

        assert_eq!(score.points, 1, "Passed flag prevents repeat scoring");
    }

    #[test]
    fn test_scores_again_after_recycle() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_pipe(&mut world, &config, 0, config.player_x - config.pipe_width - 1.0, 30);
        check_scoring(&mut world, &config, &mut score, &mut events);

        // Simulate a recycle bringing the slot back for another approach
        for (_e, pipe) in world.query_mut::<&mut PipePair>() {
            pipe.passed = false;
        }
        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.points, 2);
    }

    #[test]
    fn test_pipes_ahead_do_not_score() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_pipe(&mut world, &config, 0, config.player_x + 100.0, 30);
        create_pipe(&mut world, &config, 1, config.player_x, 30);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.points, 0);
    }
}

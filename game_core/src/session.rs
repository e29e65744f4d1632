//! One play-through, from start trigger to terminal collision.

use crate::systems::{apply_jump, pipe_bounds, pipes_by_slot, spawn_all};
use crate::{create_bird, step, Aabb, Bird, Config, Events, GameRng, Metrics, PipeBounds, Score};
use hecs::World;

/// Geometry handed to the presentation layer each frame
#[derive(Debug, Clone)]
pub struct SceneView {
    pub player: Aabb,
    pub pipes: Vec<(usize, PipeBounds)>, // (slot, bounds), ordered by slot
    pub ground_top: f32,
    pub score: u32,
}

/// Everything a single run owns. Built fresh for every run so nothing leaks
/// from one run into the next.
pub struct Session {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub frame: u64,
}

impl Session {
    pub fn new(metrics: &impl Metrics, rng: GameRng) -> Self {
        let config = Config::from_metrics(&metrics.snapshot());
        let mut world = World::new();
        let mut rng = rng;

        create_bird(&mut world, config.player_start_y());
        spawn_all(&mut world, &config, &mut rng);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            frame: 0,
        }
    }

    /// Advance one frame; true when the run just ended
    pub fn step(&mut self) -> bool {
        self.frame += 1;
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        )
    }

    pub fn jump(&mut self) {
        apply_jump(&mut self.world, self.config.jump_strength);
    }

    pub fn bird(&self) -> Option<Bird> {
        let mut query = self.world.query::<&Bird>();
        query.iter().next().map(|(_e, bird)| *bird)
    }

    pub fn pipe_bounds(&self, slot: usize) -> Option<PipeBounds> {
        pipe_bounds(&self.world, &self.config, slot)
    }

    pub fn pipe_count(&self) -> usize {
        self.world.query::<&crate::PipePair>().iter().count()
    }

    pub fn scene(&self) -> SceneView {
        let player = self
            .bird()
            .map(|bird| bird.bounds(&self.config))
            .unwrap_or_else(|| Bird::new(self.config.player_start_y()).bounds(&self.config));
        let pipes = pipes_by_slot(&self.world)
            .into_iter()
            .map(|pipe| (pipe.slot, pipe.bounds(&self.config)))
            .collect();

        SceneView {
            player,
            pipes,
            ground_top: self.config.ground_top(),
            score: self.score.points,
        }
    }
}

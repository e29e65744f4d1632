pub mod components;
pub mod config;
pub mod controller;
pub mod fsm;
pub mod map;
pub mod metrics;
pub mod params;
pub mod persistence;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use fsm::*;
pub use map::*;
pub use metrics::*;
pub use params::*;
pub use persistence::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of the Flappy simulation.
///
/// Returns true when a terminal collision ended the run this frame. Scoring
/// is skipped on that frame.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    // Clear events at start of frame
    events.clear();

    // 1. Scroll and recycle pipes
    advance_pipes(world, config, rng, events, config.scroll_speed);

    // 2. Gravity
    integrate_bird(world, config.gravity);

    // 3. Ground and pipe collisions
    if check_collisions(world, config, events) {
        return true;
    }

    // 4. Pipes cleared this frame
    check_scoring(world, config, score, events);

    false
}

/// Helper to create the bird entity
pub fn create_bird(world: &mut World, y: f32) -> hecs::Entity {
    world.spawn((Bird::new(y),))
}

/// Helper to create a single pipe pair with a given bottom height
pub fn create_pipe(
    world: &mut World,
    config: &Config,
    slot: usize,
    x: f32,
    bottom_percent: u32,
) -> hecs::Entity {
    world.spawn((PipePair::new(
        slot,
        x,
        bottom_percent,
        config.top_percent(bottom_percent),
    ),))
}

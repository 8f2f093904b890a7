pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod fsm;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use scheduler::*;
pub use state::*;

use hecs::World;
use systems::*;

pub use systems::{apply_key, Key};

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Reflect off top/bottom walls
    check_wall_bounce(world, config, events);

    // 3. Side walls: a point ends the tick
    if check_scoring(world, config, score, events, rng) {
        return;
    }

    // 4. Paddles
    check_paddle_hits(world, config, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if the ball left the board through a side wall.
///
/// Returns `true` when a point was scored; the ball has then already been
/// respawned and nothing else should touch it this tick.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    let mut scored = false;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Wall the ball went out through
        let exit = if ball.pos.x <= 0.0 {
            Side::Left
        } else if ball.pos.x >= config.board.width {
            Side::Right
        } else {
            continue;
        };

        let scorer = exit.opponent();
        score.award(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }

        ball.respawn(config, rng);
        scored = true;
    }

    scored
}

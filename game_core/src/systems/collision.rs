use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn check_wall_bounce(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let height = config.board.height;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= radius || ball.pos.y >= height - radius {
            ball.dir.y = -ball.dir.y;
            events.wall_bounce = true;
        }
    }
}

/// Bounce the ball off either paddle.
///
/// The two paddle checks are independent: both guards are evaluated against
/// the same snapshot of the ball, so overlapping geometry could register a
/// hit on both sides in one tick.
pub fn check_paddle_hits(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let snapshot = *ball;

        for paddle in &paddles {
            if !paddle.spans(snapshot.pos.y) {
                continue;
            }

            match paddle.side {
                Side::Left if snapshot.pos.x <= paddle.right_edge() + radius => {
                    // Snap to the face so the ball cannot stick inside
                    ball.pos.x = paddle.right_edge() + radius;
                    events.left_paddle_hit = true;
                }
                Side::Right if snapshot.pos.x >= paddle.x - radius => {
                    ball.pos.x = paddle.x - radius;
                    events.right_paddle_hit = true;
                }
                _ => continue,
            }

            ball.dir.x = -ball.dir.x;
            ball.speed += config.ball_speed_increment;
            log::debug!(
                "ball hit {:?} paddle, speed now {}",
                paddle.side,
                ball.speed
            );
        }
    }
}

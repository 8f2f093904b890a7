use crate::Ball;
use hecs::World;

/// Advance the ball one tick: `pos += speed * dir` on each axis.
///
/// No sub-stepping. A fast enough ball can skip over a paddle's hit zone
/// in a single tick.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.velocity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_speed_along_direction() {
        let mut world = World::new();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, -1.0), 3.0),
        );

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(103.0, 97.0));
            assert_eq!(ball.dir, Vec2::new(1.0, -1.0), "Direction unchanged");
            assert_eq!(ball.speed, 3.0, "Speed unchanged");
        }
    }

    #[test]
    fn test_no_ball_is_a_no_op() {
        let mut world = World::new();
        move_ball(&mut world);
        assert_eq!(world.len(), 0);
    }
}

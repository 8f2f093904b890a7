use crate::{Config, Paddle, Side};
use hecs::World;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "w" | "W" => Key::W,
            "s" | "S" => Key::S,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            _ => Key::Other,
        }
    }

    /// Paddle and vertical direction (-1 = up, 1 = down) this key drives
    pub fn paddle_move(self) -> Option<(Side, i8)> {
        match self {
            Key::W => Some((Side::Left, -1)),
            Key::S => Some((Side::Left, 1)),
            Key::ArrowUp => Some((Side::Right, -1)),
            Key::ArrowDown => Some((Side::Right, 1)),
            Key::Other => None,
        }
    }
}

/// Move the paddle bound to `key` by one step.
///
/// The move is skipped entirely if it would push the paddle off the board.
/// Returns whether a paddle moved.
pub fn apply_key(world: &mut World, config: &Config, key: Key) -> bool {
    let Some((side, dir)) = key.paddle_move() else {
        return false;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != side {
            continue;
        }
        let target = paddle.y + dir as f32 * config.paddle_step;
        if !config.board.holds_paddle(target, paddle.height) {
            return false;
        }
        paddle.y = target;
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    fn setup_world() -> (World, Config) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Paddle::spawn(Side::Left, &config));
        create_paddle(&mut world, Paddle::spawn(Side::Right, &config));
        (world, config)
    }

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .expect("paddle exists")
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("w"), Key::W);
        assert_eq!(Key::from_key_name("W"), Key::W);
        assert_eq!(Key::from_key_name("S"), Key::S);
        assert_eq!(Key::from_key_name("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_key_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_key_name("Enter"), Key::Other);
        assert_eq!(Key::from_key_name("ArrowLeft"), Key::Other);
    }

    #[test]
    fn test_w_at_top_keeps_left_paddle_at_zero() {
        let (mut world, config) = setup_world();
        assert_eq!(paddle_y(&world, Side::Left), 0.0);

        let moved = apply_key(&mut world, &config, Key::W);

        assert!(!moved);
        assert_eq!(paddle_y(&world, Side::Left), 0.0);
    }

    #[test]
    fn test_s_moves_left_paddle_down_one_step() {
        let (mut world, config) = setup_world();

        assert!(apply_key(&mut world, &config, Key::S));

        assert_eq!(paddle_y(&world, Side::Left), 50.0);
        assert_eq!(paddle_y(&world, Side::Right), 400.0, "Other paddle untouched");
    }

    #[test]
    fn test_arrows_move_right_paddle() {
        let (mut world, config) = setup_world();

        assert!(!apply_key(&mut world, &config, Key::ArrowDown), "Already at bottom");
        assert_eq!(paddle_y(&world, Side::Right), 400.0);

        assert!(apply_key(&mut world, &config, Key::ArrowUp));
        assert_eq!(paddle_y(&world, Side::Right), 350.0);
        assert_eq!(paddle_y(&world, Side::Left), 0.0);
    }

    #[test]
    fn test_move_rejected_when_it_would_overshoot() {
        let (mut world, config) = setup_world();
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Left {
                paddle.y = 30.0;
            }
        }

        assert!(!apply_key(&mut world, &config, Key::W));
        assert_eq!(paddle_y(&world, Side::Left), 30.0, "Not clamped, just skipped");
    }

    #[test]
    fn test_paddles_stay_on_board_under_key_mashing() {
        let (mut world, config) = setup_world();
        let keys = [Key::S, Key::S, Key::ArrowUp, Key::W, Key::ArrowDown];
        for i in 0..500 {
            apply_key(&mut world, &config, keys[i % keys.len()]);
            for side in [Side::Left, Side::Right] {
                let y = paddle_y(&world, side);
                assert!(
                    (0.0..=config.board.height - config.paddle_height).contains(&y),
                    "{side:?} paddle left the board at y={y}"
                );
            }
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let (mut world, config) = setup_world();
        assert!(!apply_key(&mut world, &config, Key::Other));
        assert_eq!(paddle_y(&world, Side::Left), 0.0);
        assert_eq!(paddle_y(&world, Side::Right), 400.0);
    }
}

use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which player a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component. `x`/`y` are the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    /// Paddle at its starting corner
    pub fn spawn(side: Side, config: &Config) -> Self {
        let pos = config.paddle_spawn(side);
        Self::new(side, pos.x, pos.y, config.paddle_width, config.paddle_height)
    }

    /// Strictly inside the vertical span; touching an end does not count
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2, // each component is -1 or 1
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2, speed: f32) -> Self {
        Self { pos, dir, speed }
    }

    /// Distance covered per tick on each axis
    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Reset ball to the board center with base speed and a fresh direction
    pub fn respawn(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.board.center();
        self.dir = random_direction(rng);
        self.speed = config.ball_speed_initial;
    }
}

/// Each axis independently -1 or +1 with equal odds
pub fn random_direction(rng: &mut GameRng) -> Vec2 {
    let mut pick = || if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    let x = pick();
    let y = pick();
    Vec2::new(x, y)
}

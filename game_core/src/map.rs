use glam::Vec2;

use crate::components::Side;

/// The playing field. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ball spawn point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner a paddle starts from: left paddle at the top-left,
    /// right paddle at the bottom-right.
    pub fn paddle_spawn(&self, side: Side, paddle_width: f32, paddle_height: f32) -> Vec2 {
        match side {
            Side::Left => Vec2::ZERO,
            Side::Right => Vec2::new(self.width - paddle_width, self.height - paddle_height),
        }
    }

    /// Whether a paddle whose top edge sits at `y` is fully on the board
    pub fn holds_paddle(&self, y: f32, paddle_height: f32) -> bool {
        y >= 0.0 && y <= self.height - paddle_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let board = Board::new(700.0, 500.0);
        assert_eq!(board.center(), Vec2::new(350.0, 250.0));
    }

    #[test]
    fn test_paddle_spawns() {
        let board = Board::new(700.0, 500.0);
        assert_eq!(board.paddle_spawn(Side::Left, 25.0, 100.0), Vec2::ZERO);
        assert_eq!(
            board.paddle_spawn(Side::Right, 25.0, 100.0),
            Vec2::new(675.0, 400.0)
        );
    }

    #[test]
    fn test_holds_paddle() {
        let board = Board::new(700.0, 500.0);
        assert!(board.holds_paddle(0.0, 100.0));
        assert!(board.holds_paddle(400.0, 100.0));
        assert!(!board.holds_paddle(-50.0, 100.0));
        assert!(!board.holds_paddle(450.0, 100.0));
    }
}

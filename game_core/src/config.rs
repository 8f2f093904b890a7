use std::time::Duration;

use crate::{Board, ConfigError, Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board: Board,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: Board::new(Params::BOARD_WIDTH, Params::BOARD_HEIGHT),
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            tick_interval_ms: Params::TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default rules on a board of the given size
    pub fn with_board(width: f32, height: f32) -> Self {
        Self {
            board: Board::new(width, height),
            ..Self::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Starting top-left corner for a paddle
    pub fn paddle_spawn(&self, side: Side) -> glam::Vec2 {
        self.board
            .paddle_spawn(side, self.paddle_width, self.paddle_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Board { width, height } = self.board;
        // Written as negations so NaN fails too
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        if !(self.paddle_width > 0.0
            && self.paddle_height > 0.0
            && self.paddle_height <= height
            && self.paddle_width * 2.0 < width)
        {
            return Err(ConfigError::PaddleTooLarge {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if !(self.ball_radius > 0.0 && self.ball_radius * 2.0 < height) {
            return Err(ConfigError::BadBallRadius(self.ball_radius));
        }
        if !(self.paddle_step > 0.0) {
            return Err(ConfigError::BadPaddleStep(self.paddle_step));
        }
        if !(self.ball_speed_initial >= 1.0) {
            return Err(ConfigError::BadInitialSpeed(self.ball_speed_initial));
        }
        if !(self.ball_speed_increment >= 0.0) {
            return Err(ConfigError::BadSpeedIncrement(self.ball_speed_increment));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_tick_interval() {
        let config = Config::new();
        assert_eq!(config.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_paddle_spawn() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn(Side::Left), glam::Vec2::new(0.0, 0.0));
        assert_eq!(
            config.paddle_spawn(Side::Right),
            glam::Vec2::new(675.0, 400.0)
        );
    }

    #[test]
    fn test_with_board_keeps_rules() {
        let config = Config::with_board(800.0, 600.0);
        assert_eq!(config.board, Board::new(800.0, 600.0));
        assert_eq!(config.paddle_step, Params::PADDLE_STEP);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::with_board(0.0, 500.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBoard { .. })
        ));

        config = Config::new();
        config.paddle_height = 600.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooLarge { .. })
        ));

        config = Config::new();
        config.ball_radius = 250.0;
        assert_eq!(config.validate(), Err(ConfigError::BadBallRadius(250.0)));

        config = Config::new();
        config.paddle_step = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::BadPaddleStep(0.0)));

        config = Config::new();
        config.ball_speed_initial = 0.5;
        assert_eq!(config.validate(), Err(ConfigError::BadInitialSpeed(0.5)));

        config = Config::new();
        config.ball_speed_increment = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BadSpeedIncrement(-1.0))
        );

        config = Config::new();
        config.tick_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }
}

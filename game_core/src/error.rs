use thiserror::Error;

/// Rejected game configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must have a positive size, got {width}x{height}")]
    EmptyBoard { width: f32, height: f32 },

    #[error("paddle {width}x{height} does not fit on the board")]
    PaddleTooLarge { width: f32, height: f32 },

    #[error("ball radius {0} must be positive and leave room between the walls")]
    BadBallRadius(f32),

    #[error("paddle step must be positive, got {0}")]
    BadPaddleStep(f32),

    #[error("initial ball speed must be at least 1, got {0}")]
    BadInitialSpeed(f32),

    #[error("ball speed increment must not be negative, got {0}")]
    BadSpeedIncrement(f32),

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

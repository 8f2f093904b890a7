/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board (pixels)
    pub const BOARD_WIDTH: f32 = 700.0;
    pub const BOARD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_STEP: f32 = 50.0; // Displacement per key press

    // Ball
    pub const BALL_RADIUS: f32 = 12.5;
    pub const BALL_SPEED_INITIAL: f32 = 1.0;
    pub const BALL_SPEED_INCREMENT: f32 = 1.0; // Added on every paddle hit, no cap

    // Loop
    pub const TICK_INTERVAL_MS: u64 = 10;
}

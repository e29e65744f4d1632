/// Game tuning parameters for Flappy
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Fallback display metrics (px), used when the host cannot report them
    pub const BLOCK_SIZE: f32 = 40.0;
    pub const PIPE_SIZE: f32 = 80.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const GROUND_SIZE: f32 = 40.0;
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    // Obstacle pool
    pub const PIPE_COUNT: usize = 5;
    pub const PIPE_GAP_PERCENT: u32 = 40;
    pub const PIPE_BOTTOM_MIN_PERCENT: u32 = 20; // inclusive
    pub const PIPE_BOTTOM_MAX_PERCENT: u32 = 50; // exclusive
    pub const PIPE_SPACING_MULTIPLIER: f32 = 6.0; // spacing = pipe size * 6

    // Physics, scaled by pipe size
    pub const GRAVITY_DIVISOR: f32 = 800.0;
    pub const JUMP_DIVISOR: f32 = 20.0;
    pub const SPEED_DIVISOR: f32 = 32.0;

    // Player
    pub const PLAYER_X_MULTIPLIER: f32 = 1.5; // x = player size * 1.5
}

use crate::{Metrics, MetricsSnapshot, Params};

/// Game configuration, derived from a metrics snapshot at session start
#[derive(Debug, Clone)]
pub struct Config {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub player_size: f32,
    pub player_x: f32,
    pub ground_size: f32,
    pub pipe_width: f32,
    pub pipe_count: usize,
    pub pipe_spacing: f32,
    pub gap_percent: u32,
    pub bottom_min_percent: u32,
    pub bottom_max_percent: u32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub scroll_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_metrics(&MetricsSnapshot::default())
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale every length and physics constant from the given metrics
    pub fn from_metrics(metrics: &impl Metrics) -> Self {
        let pipe = metrics.pipe_size();
        let player = metrics.player_size();
        Self {
            viewport_width: metrics.viewport_width(),
            viewport_height: metrics.viewport_height(),
            player_size: player,
            player_x: player * Params::PLAYER_X_MULTIPLIER,
            ground_size: metrics.ground_size(),
            pipe_width: pipe,
            pipe_count: Params::PIPE_COUNT,
            pipe_spacing: pipe * Params::PIPE_SPACING_MULTIPLIER,
            gap_percent: Params::PIPE_GAP_PERCENT,
            bottom_min_percent: Params::PIPE_BOTTOM_MIN_PERCENT,
            bottom_max_percent: Params::PIPE_BOTTOM_MAX_PERCENT,
            gravity: pipe / Params::GRAVITY_DIVISOR,
            jump_strength: pipe / Params::JUMP_DIVISOR,
            scroll_speed: pipe / Params::SPEED_DIVISOR,
        }
    }

    /// Player top edge at session start (middle of the viewport)
    pub fn player_start_y(&self) -> f32 {
        self.viewport_height / 2.0
    }

    /// Y of the ground's top edge
    pub fn ground_top(&self) -> f32 {
        self.viewport_height - self.ground_size
    }

    /// X where a pipe pair is placed when spawned into `slot`
    pub fn spawn_x(&self, slot: usize) -> f32 {
        self.viewport_width + self.pipe_spacing + slot as f32 * self.pipe_spacing
    }

    /// X where a recycled pipe pair re-enters
    pub fn recycle_x(&self) -> f32 {
        self.viewport_width + self.pipe_spacing
    }

    /// Top segment height for a given bottom height, both in percent
    pub fn top_percent(&self, bottom_percent: u32) -> u32 {
        100u32.saturating_sub(bottom_percent + self.gap_percent)
    }

    /// Convert a percentage of the viewport height to pixels
    pub fn percent_to_px(&self, percent: u32) -> f32 {
        self.viewport_height * percent as f32 / 100.0
    }
}

//! Display-derived sizing.
//!
//! Every length in the simulation is scaled from these values. A session takes
//! one [`MetricsSnapshot`] when it starts and keeps it until it ends, so a
//! resize mid-game never changes the physics of the running session.

use crate::Params;

/// Source of display-derived sizes, in pixels.
///
/// Implementations must not fail: when the underlying value is unavailable
/// they return the matching [`Params`] default.
pub trait Metrics {
    fn block_size(&self) -> f32;
    fn pipe_size(&self) -> f32;
    fn player_size(&self) -> f32;
    fn ground_size(&self) -> f32;
    fn viewport_width(&self) -> f32;
    fn viewport_height(&self) -> f32;

    /// Capture every value at once
    fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            block_size: self.block_size(),
            pipe_size: self.pipe_size(),
            player_size: self.player_size(),
            ground_size: self.ground_size(),
            viewport_width: self.viewport_width(),
            viewport_height: self.viewport_height(),
        }
    }
}

/// Frozen copy of a [`Metrics`] provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub block_size: f32,
    pub pipe_size: f32,
    pub player_size: f32,
    pub ground_size: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        FixedMetrics.snapshot()
    }
}

/// Constant metrics taken from [`Params`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMetrics;

impl Metrics for FixedMetrics {
    fn block_size(&self) -> f32 {
        Params::BLOCK_SIZE
    }

    fn pipe_size(&self) -> f32 {
        Params::PIPE_SIZE
    }

    fn player_size(&self) -> f32 {
        Params::PLAYER_SIZE
    }

    fn ground_size(&self) -> f32 {
        Params::GROUND_SIZE
    }

    fn viewport_width(&self) -> f32 {
        Params::VIEWPORT_WIDTH
    }

    fn viewport_height(&self) -> f32 {
        Params::VIEWPORT_HEIGHT
    }
}

impl Metrics for MetricsSnapshot {
    fn block_size(&self) -> f32 {
        self.block_size
    }

    fn pipe_size(&self) -> f32 {
        self.pipe_size
    }

    fn player_size(&self) -> f32 {
        self.player_size
    }

    fn ground_size(&self) -> f32 {
        self.ground_size
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn snapshot(&self) -> MetricsSnapshot {
        *self
    }
}

/// Parse a CSS length such as `"48px"` or `" 3.5 "`, falling back to `default`.
///
/// Only the leading numeric part is used; units are ignored.
pub fn parse_length(raw: &str, default: f32) -> f32 {
    let trimmed = raw.trim();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(trimmed.len());
    match trimmed[..end].parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

use crate::{Aabb, Config};

/// Bird component - the player sprite
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub y: f32,   // Top edge (px, 0 = ceiling)
    pub vel: f32, // px per frame, positive = down
}

impl Bird {
    pub fn new(y: f32) -> Self {
        Self { y, vel: 0.0 }
    }

    /// Hitbox at the fixed player column
    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_rect(config.player_x, self.y, config.player_size, config.player_size)
    }
}

/// PipePair component - one pooled obstacle slot
#[derive(Debug, Clone, Copy)]
pub struct PipePair {
    pub slot: usize,
    pub x: f32,             // Left edge (px)
    pub bottom_percent: u32, // Height of the bottom segment, % of viewport
    pub top_percent: u32,   // Height of the top segment, % of viewport
    pub passed: bool,       // Already scored on this approach
}

impl PipePair {
    pub fn new(slot: usize, x: f32, bottom_percent: u32, top_percent: u32) -> Self {
        Self {
            slot,
            x,
            bottom_percent,
            top_percent,
            passed: false,
        }
    }

    pub fn right(&self, config: &Config) -> f32 {
        self.x + config.pipe_width
    }

    /// Live hitboxes for both segments
    pub fn bounds(&self, config: &Config) -> PipeBounds {
        let floor = config.viewport_height;
        let bottom_height = config.percent_to_px(self.bottom_percent);
        let top_height = config.percent_to_px(self.top_percent);
        PipeBounds {
            bottom: Aabb::from_rect(
                self.x,
                floor - bottom_height,
                config.pipe_width,
                bottom_height,
            ),
            top: Aabb::from_rect(self.x, 0.0, config.pipe_width, top_height),
        }
    }
}

/// Bounding boxes of a pipe pair's two segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeBounds {
    pub bottom: Aabb, // Rises from the floor
    pub top: Aabb,    // Hangs from the ceiling
}

impl PipeBounds {
    pub fn segments(&self) -> [Aabb; 2] {
        [self.bottom, self.top]
    }
}

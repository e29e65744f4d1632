/// Session score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.points += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Uniform integer in `[min, max)`; returns `min` for an empty range
    pub fn percent_in(&mut self, min: u32, max: u32) -> u32 {
        use rand::Rng;
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub hit_ground: bool,
    pub hit_pipe: Option<usize>, // Slot of the pipe that was hit
    pub pipes_passed: u32,
    pub pipes_recycled: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.hit_ground = false;
        self.hit_pipe = None;
        self.pipes_passed = 0;
        self.pipes_recycled = 0;
    }
}

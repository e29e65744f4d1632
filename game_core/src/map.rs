use glam::Vec2;

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::from_rect(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = Aabb::from_rect(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::from_rect(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::from_rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Aabb::from_rect(0.0, 0.0, 10.0, 10.0);
        // Same rows, far to the right
        let b = Aabb::from_rect(50.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        // Same columns, far below
        let c = Aabb::from_rect(0.0, 50.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_from_rect_edges() {
        let a = Aabb::from_rect(3.0, 4.0, 10.0, 20.0);
        assert_eq!((a.left(), a.right()), (3.0, 13.0));
        assert_eq!((a.top(), a.bottom()), (4.0, 24.0));
    }
}

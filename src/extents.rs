use crate::*;

/// An axis aligned region of the plane: `origin` and `size` (width, height).
///
/// The region is half open, `origin.x <= x < origin.x + width`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Extents {
    pub origin: Point,
    pub size: (u32, u32),
}

impl Extents {
    pub fn new(origin: Point, width: u32, height: u32) -> Self {
        Self {
            origin,
            size: (width, height),
        }
    }

    /// Region from `min` (inclusive) to `max` (exclusive). Inverted corners give an empty region.
    pub fn from_min_max(min: Point, max: Point) -> Self {
        let (w, h) = min.delta(max);
        Self::new(min, w.max(0) as u32, h.max(0) as u32)
    }

    /// The exclusive far corner.
    pub fn max(&self) -> Point {
        let x = self.origin.x as i64 + self.size.0 as i64;
        let y = self.origin.y as i64 + self.size.1 as i64;
        Point::new(x.min(i32::MAX as i64) as i32, y.min(i32::MAX as i64) as i32)
    }

    /// Width and height, cut back to what fits below `i32::MAX`.
    pub fn reachable_size(&self) -> (u32, u32) {
        let max = self.max();
        let w = max.x as i64 - self.origin.x as i64;
        let h = max.y as i64 - self.origin.y as i64;
        (w as u32, h as u32)
    }

    /// The number of distinct integer points inside.
    pub fn area(&self) -> u64 {
        let (w, h) = self.reachable_size();
        w as u64 * h as u64
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }
}

impl Envelops<Point> for Extents {
    fn envelops(&self, p: Point) -> bool {
        let max = self.max();
        self.origin.x <= p.x && p.x < max.x && self.origin.y <= p.y && p.y < max.y
    }
}

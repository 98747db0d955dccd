use crate::*;
use std::cmp;

/// A line segment from `start` to `end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The floor of the Euclidean length.
    pub fn distance(&self) -> u64 {
        let (dx, dy) = self.start.delta(self.end);
        isqrt((dx as i128 * dx as i128 + dy as i128 * dy as i128) as u128)
    }

    /// The implicit form of the infinite line through both end points.
    pub fn equation(&self) -> LineEq {
        let (sx, sy) = (self.start.x as i128, self.start.y as i128);
        let a = self.end.y as i128 - sy;
        let b = sx - self.end.x as i128;
        LineEq { a, b, c: a * sx + b * sy }
    }

    /// Intersection of the two _infinite_ lines, truncated toward zero.
    ///
    /// Returns `None` if the lines are parallel (zero determinant). Coordinates past the `i32`
    /// range saturate.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        self.crossing(other).map(Crossing::truncate)
    }

    /// The exact intersection of the two _infinite_ lines, or `None` if they are parallel.
    pub fn crossing(&self, other: &Line) -> Option<Crossing> {
        let LineEq { a: a1, b: b1, c: c1 } = self.equation();
        let LineEq { a: a2, b: b2, c: c2 } = other.equation();

        let det = a1 * b2 - a2 * b1;
        if det == 0 {
            return None;
        }

        let sign = det.signum();
        Some(Crossing {
            x: (b2 * c1 - b1 * c2) * sign,
            y: (a1 * c2 - a2 * c1) * sign,
            d: det.abs(),
        })
    }
}

/// A rational point `(x / d, y / d)`, with `d > 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub x: i128,
    pub y: i128,
    pub d: i128,
}

impl Crossing {
    /// Round each coordinate toward zero, saturating to the `i32` range.
    pub fn truncate(self) -> Point {
        Point::new(saturate(self.x / self.d), saturate(self.y / self.d))
    }

    /// Compare the x coordinate against a whole `x`.
    pub fn cmp_x(&self, x: i32) -> cmp::Ordering {
        self.x.cmp(&(x as i128 * self.d))
    }

    /// Compare the y coordinate against a whole `y`.
    pub fn cmp_y(&self, y: i32) -> cmp::Ordering {
        self.y.cmp(&(y as i128 * self.d))
    }
}

impl From<Point> for Crossing {
    fn from(p: Point) -> Self {
        Crossing {
            x: p.x as i128,
            y: p.y as i128,
            d: 1,
        }
    }
}

/// A 2D line defined by `Ax + By = C`, in exact integer arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineEq {
    /// The `A` value.
    pub a: i128,
    /// The `B` value.
    pub b: i128,
    /// The `C` value.
    pub c: i128,
}

impl LineEq {
    /// The residual `Ax + By - C`; zero when the point is on the line.
    pub fn residual(&self, p: Point) -> i128 {
        self.a * p.x as i128 + self.b * p.y as i128 - self.c
    }
}

fn saturate(v: i128) -> i32 {
    v.clamp(i32::MIN as i128, i32::MAX as i128) as i32
}

/// Integer square root (floor).
fn isqrt(n: u128) -> u64 {
    // the float estimate is within a few units, walk it onto the exact floor
    let mut r = (n as f64).sqrt() as u128;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r as u64
}

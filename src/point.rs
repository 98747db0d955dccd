use crate::*;
use rand::Rng;

/// A site on the plane, in integer canvas coordinates.
///
/// Equality is on the coordinate pair. The _identity_ of a placed point lives in the
/// [`PointStore`] as a [`PointId`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Difference as wide integers, so extreme coordinates do not overflow.
    pub fn delta(self, to: Point) -> (i64, i64) {
        (to.x as i64 - self.x as i64, to.y as i64 - self.y as i64)
    }

    /// Is `other` inside the axis aligned box of half-width `reach` centred here?
    pub fn near(self, other: Point, reach: i32) -> bool {
        let (dx, dy) = self.delta(other);
        let reach = reach as i64;
        dx.abs() <= reach && dy.abs() <= reach
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An RGB colour used to paint sets and the points they cover.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) string.
    ///
    /// An empty string, or a lone `#`, is black.
    pub fn from_hex(hex: &str) -> Result<Self, &'static str> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.is_empty() {
            return Ok(Self::BLACK);
        }
        if hex.len() != 6 || !hex.is_ascii() {
            return Err("colour must be six hex digits");
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| "colour contains non-hex digits")
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// A random light colour, each channel in `150..250`.
    ///
    /// Light colours keep black point markers readable on top of a set.
    pub fn pastel<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(
            rng.gen_range(150..250),
            rng.gen_range(150..250),
            rng.gen_range(150..250),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

use crate::geometry::primitives::Point;

/// Planar 2D vector, the representation used by the containment engine.
/// For projected [`Point`]s, `.0` holds the latitude and `.1` the longitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2(pub f64, pub f64);

impl Vector2 {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    /// Rounds both components through `f32`.
    ///
    /// Reproduces the lossy single precision projection of legacy consumers,
    /// for callers that need their containment results bit for bit.
    pub fn to_single_precision(self) -> Self {
        Vector2(self.0 as f32 as f64, self.1 as f32 as f64)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2(x, y)
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl PartialEq<Point> for Vector2 {
    fn eq(&self, other: &Point) -> bool {
        other == self
    }
}

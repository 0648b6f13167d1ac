//! A point in the plane
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::RADIUS_SQ;
use crate::impl_display;

/// A 2-D point `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance from the origin
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// `true` if the point lies in the closed unit disk.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::Point;
    /// assert!(Point::new(0.6, 0.8).in_unit_circle());
    /// assert!(!Point::new(0.8, 0.8).in_unit_circle());
    /// ```
    #[inline]
    pub fn in_unit_circle(&self) -> bool {
        self.norm_sq() <= RADIUS_SQ
    }

    /// The 0/1 indicator of [`Point::in_unit_circle`]
    #[inline]
    pub fn hit(&self) -> u8 {
        u8::from(self.in_unit_circle())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<&Point> for String {
    fn from(pt: &Point) -> String {
        format!("({}, {})", pt.x, pt.y)
    }
}

impl_display!(Point);

/// Classify each point as inside (1) or outside (0) the unit circle.
///
/// The output is parallel to `points`.
pub fn classify(points: &[Point]) -> Vec<u8> {
    points.iter().map(Point::hit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_basic_impls;

    test_basic_impls!(Point::new(0.25, -0.5));

    #[test]
    fn origin_is_inside() {
        assert!(Point::new(0.0, 0.0).in_unit_circle());
    }

    #[test]
    fn boundary_counts_as_inside() {
        assert!(Point::new(1.0, 0.0).in_unit_circle());
        assert!(Point::new(0.0, -1.0).in_unit_circle());
    }

    #[test]
    fn corners_are_outside() {
        for (x, y) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
            assert_eq!(Point::new(x, y).hit(), 0);
        }
    }

    #[test]
    fn classify_is_parallel_to_points() {
        let pts: Vec<Point> = vec![
            (0.0, 0.0).into(),
            (0.9, 0.9).into(),
            (-0.5, 0.5).into(),
        ];
        assert_eq!(classify(&pts), vec![1, 0, 1]);
    }

    #[test]
    fn classify_empty() {
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(0.5, -1.0).to_string(), "(0.5, -1)");
    }
}

//! Axis-aligned ellipse geometry.
//!
//! All outline formulas are closed-form; the only non-trivial one is the
//! central-line intersection, see
//! <http://mathworld.wolfram.com/Ellipse-LineIntersection.html>.

use crate::geometry::point::Point;
use crate::geometry::sector::EllipticSector;
use crate::utils::angle::{atan_yx, wrap_to_2pi, TWO_PI};
use std::f64::consts::PI;

/// Ellipse with semi-axes `a` (horizontal) and `b` (vertical).
///
/// The `center` is carried as part of the value; the outline formulas
/// operate relative to the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub a: f64,
    pub b: f64,
    pub center: Point,
}

/// Result of splitting an ellipse outline into sectors.
#[derive(Clone, Debug)]
pub struct Sectorization<'a> {
    /// Outline points at the parametric split angles.
    pub points: Vec<Point>,
    /// The sectors between consecutive outline angles.
    pub sectors: Vec<EllipticSector<'a>>,
}

impl Ellipse {
    /// Ellipse centered at the origin.
    pub fn new(a: f64, b: f64) -> Self {
        Self::with_center(a, b, Point::default())
    }

    pub fn with_center(a: f64, b: f64, center: Point) -> Self {
        Ellipse { a, b, center }
    }

    /// Area of the ellipse, `π·a·b`.
    pub fn area(&self) -> f64 {
        PI * self.a * self.b
    }

    /// Outline point for the circular parameter `t`.
    ///
    /// Note that `t` is not the elliptical angle: the vector from the
    /// origin to the returned point generally encloses a different angle
    /// with the x-axis.
    pub fn point_at_t(&self, t: f64) -> Point {
        Point::new(self.a * t.cos(), self.b * t.sin())
    }

    /// Outline point whose diametral line encloses `theta` with the
    /// x-axis, found by intersecting with the bounding circle.
    pub fn point_at_theta(&self, theta: f64) -> Point {
        let r = self.a.max(self.b);
        let circular = Ellipse::new(r, r);
        self.central_line_intersection(circular.point_at_t(theta))
    }

    /// Intersection of the outline with the central line through `point`.
    ///
    /// The intersection is not unique; the mirror point `(-x, -y)` lies
    /// on the outline as well.
    pub fn central_line_intersection(&self, point: Point) -> Point {
        let base = (self.a * self.b)
            / (self.a * self.a * point.y * point.y + self.b * self.b * point.x * point.x).sqrt();
        Point::new(base * point.x, base * point.y)
    }

    /// Scale both semi-axes in place, returning the ellipse for chaining.
    pub fn scale(&mut self, scale_a: f64, scale_b: f64) -> &mut Self {
        self.a *= scale_a;
        self.b *= scale_b;
        self
    }

    /// Split the outline into `n` elliptic sectors by equal steps of the
    /// circular parameter, starting at `start_at`.
    ///
    /// Returns the outline points at the step angles together with the
    /// sectors spanned between consecutive outline angles.
    pub fn sectorize(&self, n: usize, start_at: f64) -> Sectorization<'_> {
        let step = TWO_PI / n as f64;
        let mut points = Vec::with_capacity(n);
        let mut sectors = Vec::with_capacity(n);
        let mut circular_angle = start_at + step;
        let mut theta_old = start_at;
        for _ in 0..n {
            let point = self.point_at_t(circular_angle);
            points.push(point);
            // atan2 yields half-radians in [-π, π]; map onto the full circle.
            let theta = wrap_to_2pi(atan_yx(point.x, point.y));
            sectors.push(EllipticSector::new(self, theta_old, theta));
            circular_angle += step;
            theta_old = theta;
        }
        Sectorization { points, sectors }
    }
}

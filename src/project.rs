//! Polar-to-Cartesian projection shared by every ring of the wheel.
//!
//! The canvas origin is the top-left corner; the wheel center sits at
//! `(R, R)` for outer radius `R`. Angles grow counter-clockwise on
//! screen, so the y component is negated. Every layer (zodiac, houses,
//! aspects, glyphs, degree ticks) goes through this one primitive, which
//! keeps them angularly consistent.

use glam::{DVec2, dvec2};
use std::f64::consts::FRAC_PI_6;

/// Project a polar coordinate onto the canvas.
///
/// `slice` advances in 30° steps (one zodiac wedge each), `offset_deg`
/// in degrees; both are measured from the wheel's rotation anchor.
/// Stable under `offset_deg ≡ offset_deg + 360`.
pub fn project(slice: f64, radius: f64, offset_deg: f64) -> DVec2 {
    let radial = FRAC_PI_6 * slice + offset_deg.to_radians();
    dvec2(
        radius * (radial.cos() + 1.0),
        radius * (-radial.sin() + 1.0),
    )
}

/// Project onto a ring inset from the wheel rim.
///
/// The composer expresses every ring as "the wheel radius minus an
/// inset"; the projected point is translated back by the inset so all
/// rings stay concentric around `(wheel_radius, wheel_radius)`.
pub fn ring_point(slice: f64, wheel_radius: f64, inset: f64, offset_deg: f64) -> DVec2 {
    project(slice, wheel_radius - inset, offset_deg) + DVec2::splat(inset)
}

/// Rotate a point about an origin by `deg` degrees, clockwise on screen
/// (the canvas y axis points down).
pub fn rotate_about(p: DVec2, origin: DVec2, deg: f64) -> DVec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    let d = p - origin;
    origin + dvec2(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

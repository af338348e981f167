//! Seed placement around a source.

use std::f64::consts::TAU;

use glam::DVec2;
use lof_core::vecmath::point_on_circle;

/// Evenly spaced seed points on the circle of `radius` around `center`.
///
/// The `i`-th seed (`i = 1..=count`) sits at angle `2π·i/count`, so the
/// last seed lands on angle `2π` (the +x direction). Yields nothing for
/// `count == 0`.
pub fn seed_points(center: DVec2, radius: f64, count: u32) -> impl Iterator<Item = DVec2> {
    (1..=count).map(move |i| {
        let angle = TAU * f64::from(i) / f64::from(count);
        point_on_circle(center, radius, angle)
    })
}

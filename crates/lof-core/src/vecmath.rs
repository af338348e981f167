//! 2-D vector helpers for field superposition.
//!
//! Thin functions over [`glam::DVec2`] with the exact zero-handling the
//! tracer relies on: a coincident point contributes no field, and
//! normalising a zero vector leaves it at zero.

use glam::DVec2;

/// Divide `v` by a precomputed `len`, leaving `v` unchanged when `len == 0`.
#[inline]
pub fn normalize_with_length(v: DVec2, len: f64) -> DVec2 {
    if len != 0.0 {
        v / len
    } else {
        v
    }
}

/// Normalise `v`; the zero vector maps to itself.
#[inline]
pub fn normalize(v: DVec2) -> DVec2 {
    normalize_with_length(v, v.length())
}

/// Point-charge contribution of charge `q` at `charge` to the field at `at`.
///
/// ```text
/// E = (at - charge) * q / |at - charge|²
/// ```
///
/// Returns zero when `at` coincides with `charge`.
#[inline]
pub fn point_charge_field(charge: DVec2, q: f64, at: DVec2) -> DVec2 {
    let d = at - charge;
    let r2 = d.length_squared();
    if r2 != 0.0 {
        d * (q / r2)
    } else {
        DVec2::ZERO
    }
}

/// Point on the circle of `radius` around `center` at `angle` radians.
#[inline]
pub fn point_on_circle(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + DVec2::new(angle.cos(), angle.sin()) * radius
}

//! Bézier-Auswertung und Abtastung kubischer Segmente.

use glam::Vec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// Gilt für beliebige `t`, nicht nur `[0, 1]`.
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Füllt `out` mit gleichmäßig im Parameter verteilten Kurvenpunkten.
///
/// Abtastung bei `t = j / (len - 1)`; erster Eintrag = P0, letzter = P3.
/// Ein Slice der Länge 1 erhält nur P0.
pub fn sample_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, out: &mut [Vec2]) {
    let Some(last) = out.len().checked_sub(1) else {
        return;
    };
    if last == 0 {
        out[0] = p0;
        return;
    }

    let denom = last as f32;
    for (j, sample) in out.iter_mut().enumerate() {
        *sample = cubic_bezier(p0, p1, p2, p3, j as f32 / denom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_bezier_endpoints() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(3.0, 10.0);
        let p2 = Vec2::new(7.0, 10.0);
        let p3 = Vec2::new(10.0, 0.0);

        let start = cubic_bezier(p0, p1, p2, p3, 0.0);
        let end = cubic_bezier(p0, p1, p2, p3, 1.0);

        assert!((start - p0).length() < 0.001);
        assert!((end - p3).length() < 0.001);
    }

    #[test]
    fn test_degenerate_curve_is_a_point() {
        let p = Vec2::new(0.3, -0.7);
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            let value = cubic_bezier(p, p, p, p, t);
            assert_relative_eq!(value.x, p.x, epsilon = 1e-6);
            assert_relative_eq!(value.y, p.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cubic_bezier_symmetry() {
        // B(0.5) = 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(0.0, 10.0);
        let p2 = Vec2::new(10.0, 0.0);
        let p3 = Vec2::new(10.0, 10.0);

        let mid = cubic_bezier(p0, p1, p2, p3, 0.5);
        assert!((mid - Vec2::new(5.0, 5.0)).length() < 0.001);
    }

    #[test]
    fn test_cubic_bezier_extrapolates_outside_unit_interval() {
        // Gerade Linie: B(t) = t * (3, 0) auch für t = 2
        let p0 = Vec2::ZERO;
        let p1 = Vec2::new(1.0, 0.0);
        let p2 = Vec2::new(2.0, 0.0);
        let p3 = Vec2::new(3.0, 0.0);

        let value = cubic_bezier(p0, p1, p2, p3, 2.0);
        assert_relative_eq!(value.x, 6.0, epsilon = 1e-5);
        assert_relative_eq!(value.y, 0.0);
    }

    #[test]
    fn test_sample_cubic_hits_endpoints() {
        let p0 = Vec2::new(-1.0, -1.0);
        let p1 = Vec2::new(-0.5, 1.0);
        let p2 = Vec2::new(0.5, 1.0);
        let p3 = Vec2::new(1.0, -1.0);

        let mut samples = [Vec2::ZERO; 30];
        sample_cubic(p0, p1, p2, p3, &mut samples);

        assert!((samples[0] - p0).length() < 1e-6);
        assert!((samples[29] - p3).length() < 1e-5);
        // Symmetrische Kurve: Abtastpunkte spiegeln sich an x = 0
        assert_relative_eq!(samples[5].x, -samples[24].x, epsilon = 1e-5);
    }

    #[test]
    fn test_sample_cubic_short_slices() {
        let mut empty: [Vec2; 0] = [];
        sample_cubic(Vec2::ONE, Vec2::ONE, Vec2::ONE, Vec2::ONE, &mut empty);

        let mut single = [Vec2::ZERO; 1];
        sample_cubic(Vec2::X, Vec2::Y, Vec2::Y, Vec2::ONE, &mut single);
        assert_eq!(single[0], Vec2::X);
    }
}

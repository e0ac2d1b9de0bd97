use std::f64::consts::PI;

/// Radius of the Lanczos-3 window, in source pixels.
pub const LANCZOS3_RADIUS: f64 = 3.0;

/// The Lanczos-3 kernel.
///
/// `L(t) = 3 sin(πt) sin(πt/3) / (πt)²` inside the window `|t| < 3`, with
/// `L(0) = 1` and `L(t) = 0` outside the window.
///
/// # Arguments
///
/// * `t` - The distance to the sample point, in (possibly stretched) source pixels.
///
/// # Examples
///
/// ```
/// use resample_imgproc::interpolation::lanczos3;
///
/// assert_eq!(lanczos3(0.0), 1.0);
/// assert_eq!(lanczos3(3.0), 0.0);
/// assert_eq!(lanczos3(-1.25), lanczos3(1.25));
/// ```
pub fn lanczos3(t: f64) -> f64 {
    // evaluate on |t| so that L(t) and L(-t) are bit-identical
    let t = t.abs();
    if t == 0.0 {
        return 1.0;
    }
    if t >= LANCZOS3_RADIUS {
        return 0.0;
    }

    let pix = PI * t;
    LANCZOS3_RADIUS * pix.sin() * (pix / LANCZOS3_RADIUS).sin() / (pix * pix)
}

#[cfg(test)]
mod tests {
    use super::lanczos3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lanczos3_center() {
        assert_eq!(lanczos3(0.0), 1.0);
        assert_eq!(lanczos3(-0.0), 1.0);
    }

    #[test]
    fn lanczos3_outside_window() {
        for t in [3.0, 3.0001, 4.5, 100.0, f64::INFINITY] {
            assert_eq!(lanczos3(t), 0.0);
            assert_eq!(lanczos3(-t), 0.0);
        }
    }

    #[test]
    fn lanczos3_symmetric() {
        let mut t = -3.5;
        while t <= 3.5 {
            assert_eq!(lanczos3(t), lanczos3(-t), "asymmetric at {t}");
            t += 0.01;
        }
    }

    #[test]
    fn lanczos3_zero_crossings() {
        // sin(πt) vanishes at every integer
        for t in [1.0, 2.0] {
            assert_abs_diff_eq!(lanczos3(t), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn lanczos3_known_values() {
        // 3 sin(π/2) sin(π/6) / (π/2)² = 6 / π²
        assert_abs_diff_eq!(lanczos3(0.5), 6.0 / (std::f64::consts::PI.powi(2)), epsilon = 1e-12);
        // negative lobe between 1 and 2
        assert!(lanczos3(1.5) < 0.0);
        // positive lobe between 2 and 3
        assert!(lanczos3(2.5) > 0.0);
    }
}

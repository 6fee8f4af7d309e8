//! Easing curves for the jump animation
//!
//! The jump is deliberately asymmetric: the rise decelerates and briefly
//! overshoots the peak before settling, the fall accelerates into the
//! ground. Both curves map normalized time `t in [0, 1]` to normalized
//! displacement with `f(0) = 0` and `f(1) = 1`.

/// Overshoot strength of the rise curve. Larger values swing further
/// past the peak before settling.
const RISE_OVERSHOOT: f32 = 1.2;

/// Rise leg: ease-out with overshoot (back-out family)
///
/// Peaks slightly above 1.0 about two thirds of the way in, returns to
/// exactly 1.0 at t = 1.0 so the fall leg starts from the nominal peak.
#[inline]
pub fn rise(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let c = RISE_OVERSHOOT;
    let u = t - 1.0;
    1.0 + (c + 1.0) * u * u * u + c * u * u
}

/// Fall leg: quadratic ease-in
#[inline]
pub fn fall(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rise_endpoints() {
        assert!(rise(0.0).abs() < 1e-6);
        assert!((rise(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rise_overshoots_peak() {
        // Somewhere mid-curve the displacement must exceed the peak
        let max = (0..=100)
            .map(|i| rise(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(max > 1.0, "rise never overshot: max={max}");
    }

    #[test]
    fn test_rise_clamps_out_of_range_input() {
        assert_eq!(rise(-0.5), rise(0.0));
        assert_eq!(rise(1.5), rise(1.0));
    }

    #[test]
    fn test_fall_endpoints_and_shape() {
        assert!(fall(0.0).abs() < 1e-6);
        assert!((fall(1.0) - 1.0).abs() < 1e-6);
        // Ease-in: slower than linear in the first half
        assert!(fall(0.5) < 0.5);
        // Monotone
        let mut prev = 0.0;
        for i in 1..=50 {
            let v = fall(i as f32 / 50.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}

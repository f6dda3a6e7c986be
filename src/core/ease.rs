// PagePulse - core/ease.rs
//
// Easing curves shared by the interaction animations.
// Inputs are normalised time in [0, 1]; out-of-range values are clamped
// so a late frame can never overshoot an animation past its endpoints.

/// Cubic ease-out: fast start, gentle landing.
/// Used by reveal fades and the notice slide-out.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out: gentle at both ends.
/// Used by animated anchor scrolling so long jumps do not whip the page.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(1.5), 1.0);
        assert_eq!(ease_in_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        // Ease-out covers more than half the distance by the halfway point.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_ease_in_out_is_symmetric_at_midpoint() {
        let mid = ease_in_out_cubic(0.5);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let v = ease_in_out_cubic(t);
            assert!(v >= prev, "ease_in_out_cubic not monotonic at t={t}");
            prev = v;
        }
    }
}

//! Easing functions for animations

/// Ease-out cubic: fast start, smooth deceleration into the target
///
/// `t` is clamped to `[0, 1]`, so callers may pass raw progress.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Maps [0,1] inputs to [0,1] outputs
        #[test]
        fn easing_bounded_output(t in 0.0f32..=1.0) {
            let result = ease_out_cubic(t);
            prop_assert!(result >= 0.0, "ease_out_cubic({}) = {} < 0", t, result);
            prop_assert!(result <= 1.0, "ease_out_cubic({}) = {} > 1", t, result);
        }

        /// Monotonically increasing
        #[test]
        fn easing_monotonic(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
            let (t_lo, t_hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            prop_assert!(
                ease_out_cubic(t_lo) <= ease_out_cubic(t_hi) + 0.001,
                "ease_out_cubic not monotonic: f({}) > f({})",
                t_lo, t_hi
            );
        }

        /// Never behind linear progress
        #[test]
        fn easing_ahead_of_linear(t in 0.0f32..=1.0) {
            prop_assert!(ease_out_cubic(t) + 0.0001 >= t);
        }
    }
}

// extensions/easing.rs
//
// Easing curves for alpha-over-lifetime fades.
// Pure math on normalized time, no pool state.

use serde::{Deserialize, Serialize};

/// Easing curve applied to a batch's normalized lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant rate.
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Stronger slow start: the burst holds its brightness, then drops.
    CubicIn,
    /// Stronger slow end.
    CubicOut,
    SineIn,
    SineOut,
    /// Dramatic late falloff.
    ExpoIn,
}

impl Easing {
    /// Apply the curve to `t`, clamped to [0, 1]. Returns a value in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::SineIn => 1.0 - (t * std::f32::consts::FRAC_PI_2).cos(),
            Easing::SineOut => (t * std::f32::consts::FRAC_PI_2).sin(),
            Easing::ExpoIn => {
                if t == 0.0 { 0.0 } else { 2.0_f32.powf(10.0 * t - 10.0) }
            }
        }
    }

    /// Remaining opacity at normalized time `t`: 1 at birth, 0 at expiry.
    #[inline]
    pub fn fade_out(self, t: f32) -> f32 {
        1.0 - self.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn quad_out_faster_start() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!(mid > 0.5, "QuadOut at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::CubicIn.apply(-3.0), 0.0);
        assert_eq!(Easing::CubicIn.apply(7.0), 1.0);
    }

    #[test]
    fn fade_out_runs_from_opaque_to_clear() {
        for easing in [Easing::Linear, Easing::QuadIn, Easing::SineOut, Easing::ExpoIn] {
            assert!((easing.fade_out(0.0) - 1.0).abs() < 1e-3, "{:?}", easing);
            assert!(easing.fade_out(1.0).abs() < 1e-3, "{:?}", easing);
        }
    }
}

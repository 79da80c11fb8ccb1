//! Wave field evaluation - pure displacement functions for the cube grid.
//!
//! Every pattern maps (original position, elapsed time, parameters) to a
//! scalar vertical displacement. Evaluation is side-effect free and total
//! over finite inputs; NaN/Infinity propagate per IEEE semantics.

use std::fmt;
use std::str::FromStr;

use crate::params::WaveParams;

/// FBM octave count
const FBM_OCTAVES: u32 = 4;

/// FBM frequency multiplier per octave
const FBM_LACUNARITY: f64 = 2.0;

/// FBM amplitude multiplier per octave
const FBM_GAIN: f64 = 0.5;

/// Spatial scale applied to positions before FBM sampling
const FBM_SCALE: f64 = 0.1;

/// Reference amplitude the combined pattern is calibrated against
const COMBINED_REFERENCE_AMPLITUDE: f64 = 0.5;

/// Selectable displacement pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveType {
    /// Radial sine wave expanding from the origin
    Sine,
    /// Fractal sum of a sinusoidal base pattern, pulsing over time
    Fbm,
    /// Expanding circular ripples
    Ripple,
    /// Sinusoidal noise stand-in (product of axis-aligned waves)
    Noise,
    /// Angular wave rotating around the origin
    Circular,
    /// Ripple + angular wave blend
    Combined,
}

impl WaveType {
    /// All patterns, in keyboard-shortcut order (1-6)
    pub const ALL: [WaveType; 6] = [
        WaveType::Sine,
        WaveType::Fbm,
        WaveType::Ripple,
        WaveType::Noise,
        WaveType::Circular,
        WaveType::Combined,
    ];

    /// Human-readable pattern name
    pub fn label(&self) -> &'static str {
        match self {
            WaveType::Sine => "Sine Wave",
            WaveType::Fbm => "Fractal Brownian Motion (FBM)",
            WaveType::Ripple => "Ripple",
            WaveType::Noise => "Noise",
            WaveType::Circular => "Circular",
            WaveType::Combined => "Combined",
        }
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WaveType {
    type Err = String;

    /// Parse a pattern name. Unknown names are an explicit error rather
    /// than a silent default, so configuration typos surface immediately.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sine" => Ok(WaveType::Sine),
            "fbm" => Ok(WaveType::Fbm),
            "ripple" => Ok(WaveType::Ripple),
            "noise" => Ok(WaveType::Noise),
            "circular" => Ok(WaveType::Circular),
            "combined" => Ok(WaveType::Combined),
            other => Err(format!("unrecognized wave type '{}'", other)),
        }
    }
}

/// Sinusoidal base pattern for FBM, in [0, 1]
fn pattern_2d(u: f64, v: f64) -> f64 {
    (u * 1.5).sin() * (v * 1.5).sin() * 0.5 + 0.5
}

/// Fractal sum of `pattern_2d` over octaves, normalized to [0, 1]
fn fbm(x: f64, z: f64) -> f64 {
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut total = 0.0;
    let mut max_value = 0.0;

    for _ in 0..FBM_OCTAVES {
        total += amplitude * pattern_2d(x * frequency, z * frequency);
        max_value += amplitude;
        amplitude *= FBM_GAIN;
        frequency *= FBM_LACUNARITY;
    }

    total / max_value
}

/// Evaluate the vertical displacement for a grid element.
///
/// # Arguments
/// * `x`, `z` - Element's original lattice position (world units)
/// * `t` - Elapsed time in seconds (monotonically non-decreasing)
/// * `wave_type` - Pattern to evaluate; read fresh each call, so switching
///   mid-animation jumps directly to the new pattern with no blending
/// * `params` - Parameter snapshot for this frame
pub fn evaluate(x: f64, z: f64, t: f64, wave_type: WaveType, params: &WaveParams) -> f64 {
    match wave_type {
        WaveType::Sine => {
            let distance = (x * x + z * z).sqrt();
            let offset = distance * params.frequency;
            (t * params.speed + offset).sin() * params.amplitude
        }
        WaveType::Fbm => {
            let normalized = fbm(x * FBM_SCALE, z * FBM_SCALE);
            // Recenter to [-1, 1], then pulse over time
            (normalized * 2.0 - 1.0) * params.amplitude * ((t * params.fbm_pulse).sin() + 1.0)
        }
        WaveType::Ripple => {
            let distance = (x * x + z * z).sqrt();
            (distance - t * 2.0).sin() * params.amplitude
        }
        WaveType::Noise => (x * 0.5 + t).sin() * (z * 0.5 + t).cos() * params.amplitude,
        WaveType::Circular => {
            let angle = z.atan2(x);
            (angle * 5.0 + t * 2.0).sin() * params.amplitude
        }
        WaveType::Combined => {
            let distance = (x * x + z * z).sqrt();
            let angle = z.atan2(x);
            let raw = (distance - t * 2.0).sin() * 0.3 + (angle * 3.0 + t).sin() * 0.3;
            // Calibrated against a reference amplitude of 0.5; the ratio
            // rescales rather than multiplying amplitude in directly
            raw * (params.amplitude / COMBINED_REFERENCE_AMPLITUDE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_zero_amplitude_zeroes_every_pattern() {
        let params = WaveParams {
            amplitude: 0.0,
            ..WaveParams::default()
        };

        for wave_type in WaveType::ALL {
            for (x, z, t) in [(0.0, 0.0, 0.0), (1.5, -2.0, 3.7), (-10.0, 4.2, 0.01)] {
                assert_eq!(
                    evaluate(x, z, t, wave_type, &params),
                    0.0,
                    "{:?} displaced with zero amplitude",
                    wave_type
                );
            }
        }
    }

    #[test]
    fn test_sine_at_origin_drops_offset_term() {
        let params = WaveParams {
            amplitude: 0.8,
            speed: 1.3,
            ..WaveParams::default()
        };

        for t in [0.0, 0.25, 1.0, 7.5] {
            let expected = (t * params.speed).sin() * params.amplitude;
            let actual = evaluate(0.0, 0.0, t, WaveType::Sine, &params);
            assert!((actual - expected).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_ripple_peak_at_quarter_period() {
        let params = WaveParams {
            amplitude: 1.0,
            ..WaveParams::default()
        };

        // d = pi/2, t = 0 => sin(pi/2) = 1 exactly
        let actual = evaluate(FRAC_PI_2, 0.0, 0.0, WaveType::Ripple, &params);
        assert!((actual - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_combined_calibration_at_reference_amplitude() {
        let params = WaveParams {
            amplitude: 0.5,
            ..WaveParams::default()
        };

        let (x, z, t): (f64, f64, f64) = (2.0, -1.5, 0.7);
        let d = (x * x + z * z).sqrt();
        let a = z.atan2(x);
        let raw = (d - t * 2.0).sin() * 0.3 + (a * 3.0 + t).sin() * 0.3;

        // amplitude / 0.5 = 1, so the result is the unscaled raw value
        let actual = evaluate(x, z, t, WaveType::Combined, &params);
        assert!((actual - raw).abs() < TOLERANCE);
    }

    #[test]
    fn test_combined_scales_linearly_with_amplitude() {
        let half = WaveParams {
            amplitude: 0.5,
            ..WaveParams::default()
        };
        let double = WaveParams {
            amplitude: 1.0,
            ..WaveParams::default()
        };

        let at_half = evaluate(3.0, 1.0, 2.0, WaveType::Combined, &half);
        let at_double = evaluate(3.0, 1.0, 2.0, WaveType::Combined, &double);
        assert!((at_double - at_half * 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_fbm_pulse_presets_diverge() {
        let pulse = WaveParams::default();
        let drift = WaveParams {
            fbm_pulse: 0.5,
            ..WaveParams::default()
        };

        // Same position and time, different time modulation
        let t = 1.0;
        let a = evaluate(4.0, 4.0, t, WaveType::Fbm, &pulse);
        let b = evaluate(4.0, 4.0, t, WaveType::Fbm, &drift);
        assert!((a - b).abs() > TOLERANCE);

        // Spatial term is shared: the ratio is the ratio of time envelopes
        let envelope_pulse = (t * 3.5_f64).sin() + 1.0;
        let envelope_drift = (t * 0.5_f64).sin() + 1.0;
        assert!((a / b - envelope_pulse / envelope_drift).abs() < TOLERANCE);
    }

    #[test]
    fn test_fbm_normalization_bounds() {
        // fbm itself stays in [0, 1], so the recentered value stays in
        // [-1, 1] and the displacement within amplitude * 2
        let params = WaveParams {
            amplitude: 1.0,
            ..WaveParams::default()
        };

        for i in 0..50 {
            let x = i as f64 * 1.7 - 40.0;
            let z = i as f64 * -2.3 + 25.0;
            let y = evaluate(x, z, 0.9, WaveType::Fbm, &params);
            assert!(y.abs() <= 2.0 + TOLERANCE);
        }
    }

    #[test]
    fn test_circular_at_origin_uses_atan2_convention() {
        // atan2(0, 0) = 0 by IEEE convention; the pattern reduces to
        // sin(t * 2) * amplitude
        let params = WaveParams {
            amplitude: 0.5,
            ..WaveParams::default()
        };

        let t = 1.2;
        let expected = (t * 2.0_f64).sin() * params.amplitude;
        let actual = evaluate(0.0, 0.0, t, WaveType::Circular, &params);
        assert!((actual - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let params = WaveParams::default();
        for wave_type in WaveType::ALL {
            let first = evaluate(1.0, 2.0, PI, wave_type, &params);
            let second = evaluate(1.0, 2.0, PI, wave_type, &params);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let params = WaveParams::default();
        assert!(evaluate(f64::NAN, 0.0, 0.0, WaveType::Sine, &params).is_nan());
        assert!(evaluate(f64::INFINITY, 0.0, 0.0, WaveType::Ripple, &params).is_nan());
    }

    #[test]
    fn test_wave_type_parsing() {
        assert_eq!("sine".parse::<WaveType>().unwrap(), WaveType::Sine);
        assert_eq!("FBM".parse::<WaveType>().unwrap(), WaveType::Fbm);
        assert_eq!("Combined".parse::<WaveType>().unwrap(), WaveType::Combined);

        let err = "perlin".parse::<WaveType>().unwrap_err();
        assert!(err.contains("unrecognized wave type"));
    }
}

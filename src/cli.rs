//! Command-line argument parsing.

use clap::Parser;

use crate::params::{RecordingConfig, WaveParams};
use crate::wave::WaveType;

/// Fast FBM pulse preset multiplier
const FBM_PULSE: f64 = 3.5;

/// Slow FBM drift preset multiplier
const FBM_DRIFT: f64 = 0.5;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavegrid")]
#[command(about = "Animated cube grid driven by procedural wave fields", long_about = None)]
pub struct Args {
    /// Initial wave type: sine, fbm, ripple, noise, circular, combined
    #[arg(long, value_name = "TYPE", default_value = "combined")]
    pub wave_type: String,

    /// Cubes per grid side (realized size is always odd)
    #[arg(long, value_name = "COUNT", default_value = "50")]
    pub grid_size: u32,

    /// Spacing between cube centers (world units)
    #[arg(long, value_name = "UNITS", default_value = "0.5")]
    pub spacing: f64,

    /// Peak wave displacement (world units)
    #[arg(long, value_name = "UNITS", default_value = "0.5", allow_negative_numbers = true)]
    pub amplitude: f64,

    /// Spatial frequency of the sine pattern
    #[arg(long, value_name = "FREQ", default_value = "0.5")]
    pub frequency: f64,

    /// Time scale of the sine pattern
    #[arg(long, value_name = "SCALE", default_value = "1.0")]
    pub speed: f64,

    /// FBM time-modulation preset: pulse (3.5) or drift (0.5)
    #[arg(long, value_name = "PRESET", default_value = "pulse")]
    pub fbm_preset: String,

    /// Record the animation to PNG frames (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,
}

impl Args {
    /// Parse the initial wave type; an unknown name is a startup error
    pub fn parse_wave_type(&self) -> Result<WaveType, String> {
        self.wave_type.parse()
    }

    /// Build the initial wave parameters from the arguments
    pub fn create_wave_params(&self) -> Result<WaveParams, String> {
        if self.spacing <= 0.0 {
            return Err(format!("spacing must be > 0, got {}", self.spacing));
        }
        if self.amplitude < 0.0 {
            return Err(format!("amplitude must be >= 0, got {}", self.amplitude));
        }

        let fbm_pulse = match self.fbm_preset.to_lowercase().as_str() {
            "pulse" => FBM_PULSE,
            "drift" => FBM_DRIFT,
            other => return Err(format!("unknown FBM preset '{}'", other)),
        };

        Ok(WaveParams {
            grid_size: self.grid_size,
            spacing: self.spacing,
            amplitude: self.amplitude,
            frequency: self.frequency,
            speed: self.speed,
            fbm_pulse,
        })
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| {
            let config = RecordingConfig::new(duration);

            // Create output directories
            std::fs::create_dir_all(config.frames_dir())
                .expect("Failed to create frames directory");

            config
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["wavegrid"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults_match_reference_configuration() {
        let args = args(&[]);
        assert_eq!(args.parse_wave_type().unwrap(), WaveType::Combined);

        let params = args.create_wave_params().unwrap();
        let reference = WaveParams::default();
        assert_eq!(params.grid_size, reference.grid_size);
        assert_eq!(params.spacing, reference.spacing);
        assert_eq!(params.amplitude, reference.amplitude);
        assert_eq!(params.frequency, reference.frequency);
        assert_eq!(params.speed, reference.speed);
        assert_eq!(params.fbm_pulse, reference.fbm_pulse);
    }

    #[test]
    fn test_fbm_presets() {
        assert_eq!(
            args(&["--fbm-preset", "drift"])
                .create_wave_params()
                .unwrap()
                .fbm_pulse,
            0.5
        );
        assert!(args(&["--fbm-preset", "wobble"]).create_wave_params().is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(args(&["--wave-type", "perlin"]).parse_wave_type().is_err());
        assert!(args(&["--spacing", "0"]).create_wave_params().is_err());
        assert!(args(&["--amplitude", "-1"]).create_wave_params().is_err());
    }
}

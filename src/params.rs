//! Parameter definitions with documented defaults and semantics.
//!
//! All tunable values live here with:
//! - Units (world units, seconds, radians) where they apply
//! - Documented ranges and meanings
//! - `Default` impls matching the reference configuration

/// Wave animation parameters, read fresh by the animator every frame.
///
/// Owned by the application and mutated between frames only (the single
/// event-loop thread serializes edits against ticks).
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Requested grid side length (cubes per side). The realized grid is
    /// always odd and symmetric about the origin:
    /// (2 * floor(grid_size / 2) + 1) per side. Values below 1 are
    /// clamped to 1 at regeneration.
    pub grid_size: u32,

    /// Spacing between adjacent cube centers (world units, > 0)
    pub spacing: f64,

    /// Peak vertical displacement (world units, >= 0)
    pub amplitude: f64,

    /// Spatial frequency of the sine pattern (radians per world unit)
    pub frequency: f64,

    /// Time scale of the sine pattern (dimensionless multiplier)
    pub speed: f64,

    /// FBM time-modulation multiplier. Two reference presets exist:
    /// 3.5 (fast pulse) and 0.5 (slow drift).
    pub fbm_pulse: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            grid_size: 50,
            spacing: 0.5,
            amplitude: 0.5,
            frequency: 0.5,
            speed: 1.0,
            fbm_pulse: 3.5,
        }
    }
}

/// Orbit camera configuration (pointer-driven view around the origin)
#[derive(Debug, Clone)]
pub struct OrbitConfig {
    /// Initial distance from the look-at target (world units)
    pub initial_distance: f32,

    /// Initial pitch above the horizon (radians)
    pub initial_pitch: f32,

    /// Yaw/pitch radians per pixel of pointer drag
    pub drag_sensitivity: f32,

    /// Distance change per scroll line
    pub zoom_sensitivity: f32,

    /// Fraction of the remaining offset to the target orientation applied
    /// each frame (0 = frozen, 1 = instant)
    pub damping: f32,

    /// Pitch clamp short of the poles (radians)
    pub pitch_limit: f32,

    /// Closest allowed zoom distance (world units)
    pub min_distance: f32,

    /// Farthest allowed zoom distance (world units)
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            // Matches an eye near (0, 15, 20) looking at the origin
            initial_distance: 25.0,
            initial_pitch: 0.6435, // atan(15 / 20)
            drag_sensitivity: 0.005,
            zoom_sensitivity: 1.5,
            damping: 0.05,
            pitch_limit: 1.55,
            min_distance: 2.0,
            max_distance: 120.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Side length of each cube before wave scaling (world units)
    pub cube_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            cube_size: 0.1,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: "recording".to_string(),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }
}

//! Orbit camera with damped pointer input.
//!
//! Drag input adjusts target yaw/pitch, scroll adjusts target distance;
//! the actual orientation eases toward the targets each frame so the view
//! settles smoothly after the pointer stops.

use glam::{Mat4, Vec3};

use crate::params::{OrbitConfig, RenderConfig};

/// Orbit camera state around a fixed look-at point
pub struct OrbitCamera {
    config: OrbitConfig,
    target: Vec3,

    // Smoothed orientation
    yaw: f32,
    pitch: f32,
    distance: f32,

    // Where the pointer input wants the orientation to be
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
}

impl OrbitCamera {
    /// Create a camera orbiting the origin with the configured start view
    pub fn new(config: OrbitConfig) -> Self {
        let pitch = config.initial_pitch;
        let distance = config.initial_distance;
        Self {
            config,
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch,
            distance,
            goal_yaw: 0.0,
            goal_pitch: pitch,
            goal_distance: distance,
        }
    }

    /// Apply a pointer drag delta (pixels)
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.goal_yaw += delta_x * self.config.drag_sensitivity;
        self.goal_pitch = (self.goal_pitch + delta_y * self.config.drag_sensitivity)
            .clamp(-self.config.pitch_limit, self.config.pitch_limit);
    }

    /// Apply a scroll delta (lines; positive = zoom in)
    pub fn zoom(&mut self, delta: f32) {
        self.goal_distance = (self.goal_distance - delta * self.config.zoom_sensitivity)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Ease the orientation toward the pointer goals (call once per frame)
    pub fn update(&mut self) {
        let k = self.config.damping;
        self.yaw += (self.goal_yaw - self.yaw) * k;
        self.pitch += (self.goal_pitch - self.pitch) * k;
        self.distance += (self.goal_distance - self.distance) * k;
    }

    /// Current eye position in world space
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, eye_position)
    pub fn view_proj(&self, render_config: &RenderConfig) -> (Mat4, Vec3) {
        let eye = self.eye();

        // Y stays up; the orbit never rolls
        let view = Mat4::look_at_rh(eye, self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        (proj * view, eye)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_eye_matches_reference_view() {
        let camera = OrbitCamera::new(OrbitConfig::default());
        let eye = camera.eye();

        // Roughly (0, 15, 20): above and behind the grid, yaw 0
        assert!((eye.x).abs() < 1e-3);
        assert!((eye.y - 15.0).abs() < 0.1);
        assert!((eye.z - 20.0).abs() < 0.1);
    }

    #[test]
    fn test_pitch_clamping() {
        let config = OrbitConfig::default();
        let limit = config.pitch_limit;
        let mut camera = OrbitCamera::new(config);

        // Drag far past the pole; pitch must stay clamped
        camera.orbit(0.0, 1e6);
        for _ in 0..500 {
            camera.update();
        }
        assert!(camera.pitch <= limit + 1e-4);
        assert!(camera.eye().is_finite());
    }

    #[test]
    fn test_zoom_clamping() {
        let config = OrbitConfig::default();
        let (min, max) = (config.min_distance, config.max_distance);
        let mut camera = OrbitCamera::new(config);

        camera.zoom(1e6);
        for _ in 0..500 {
            camera.update();
        }
        assert!(camera.distance >= min - 1e-3);

        camera.zoom(-1e6);
        for _ in 0..2000 {
            camera.update();
        }
        assert!(camera.distance <= max + 1e-3);
    }

    #[test]
    fn test_damping_converges_to_goal() {
        let mut camera = OrbitCamera::new(OrbitConfig::default());
        camera.orbit(200.0, 0.0);

        let goal = camera.goal_yaw;
        assert!(camera.yaw.abs() < goal.abs()); // not there yet

        for _ in 0..1000 {
            camera.update();
        }
        assert!((camera.yaw - goal).abs() < 1e-3);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = OrbitCamera::new(OrbitConfig::default());
        let render_config = RenderConfig::default();

        let (view_proj, eye) = camera.view_proj(&render_config);

        // Matrix should not be identity or zero
        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);

        assert!(eye.x.is_finite());
        assert!(eye.y.is_finite());
        assert!(eye.z.is_finite());
    }
}

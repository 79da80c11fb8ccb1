//! Cube grid layout and per-frame wave animation.
//!
//! The animator owns the element collection and applies the wave field to
//! every element once per frame. It has two states: idle (no elements,
//! before the first `regenerate`) and populated. Ticking an idle animator
//! is a no-op.

use glam::DVec3;

use crate::params::WaveParams;
use crate::wave::{self, WaveType};

/// Rotation applied around X per unit of displacement (radians)
const ROTATION_X_FACTOR: f64 = 3.0;

/// Rotation applied around Z per unit of displacement (radians)
const ROTATION_Z_FACTOR: f64 = 3.5;

/// Scale change per unit of displacement
const SCALE_FACTOR: f64 = 0.5;

/// Per-frame transform of one grid element, consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementTransform {
    pub position_y: f64,
    pub rotation_x: f64,
    pub rotation_z: f64,
    pub scale: f64,
}

/// One cube in the grid
#[derive(Debug, Clone)]
pub struct GridElement {
    /// Lattice position fixed at creation; y is always 0, only the wave
    /// displacement moves the element off-plane
    original: DVec3,

    /// Transform recomputed every tick, never persisted across frames
    pub transform: ElementTransform,
}

impl GridElement {
    fn new(x: f64, z: f64) -> Self {
        Self {
            original: DVec3::new(x, 0.0, z),
            transform: ElementTransform {
                scale: 1.0,
                ..ElementTransform::default()
            },
        }
    }

    pub fn original_position(&self) -> DVec3 {
        self.original
    }
}

/// Grid animator: element collection + per-frame wave application
#[derive(Debug, Default)]
pub struct GridAnimator {
    elements: Vec<GridElement>,
}

impl GridAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[GridElement] {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Realized side length for a requested grid size (always odd)
    pub fn side_length(grid_size: u32) -> u32 {
        let half = grid_size.max(1) / 2;
        2 * half + 1
    }

    /// Rebuild the grid from scratch on a square lattice centered at the
    /// origin, lattice coordinates in [-half, half] scaled by spacing.
    ///
    /// The previous elements are discarded wholesale even when the size
    /// is unchanged; the replacement is complete before any later tick
    /// can observe it, so no partial grid is ever visible.
    pub fn regenerate(&mut self, params: &WaveParams) {
        let half = i64::from(params.grid_size.max(1) / 2);
        let side = (2 * half + 1) as usize;

        let mut elements = Vec::with_capacity(side * side);
        for x in -half..=half {
            for z in -half..=half {
                elements.push(GridElement::new(
                    x as f64 * params.spacing,
                    z as f64 * params.spacing,
                ));
            }
        }

        self.elements = elements;
    }

    /// Advance the animation to time `t`: evaluate the wave field at every
    /// element's original position and write the resulting transform.
    ///
    /// Pure per element - two ticks with identical (t, wave_type, params)
    /// produce identical transforms.
    pub fn tick(&mut self, t: f64, wave_type: WaveType, params: &WaveParams) {
        for element in &mut self.elements {
            let wave_y =
                wave::evaluate(element.original.x, element.original.z, t, wave_type, params);

            element.transform = ElementTransform {
                position_y: element.original.y + wave_y,
                rotation_x: wave_y * ROTATION_X_FACTOR,
                rotation_z: wave_y * ROTATION_Z_FACTOR,
                scale: 1.0 + wave_y * SCALE_FACTOR,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with(grid_size: u32, spacing: f64) -> WaveParams {
        WaveParams {
            grid_size,
            spacing,
            ..WaveParams::default()
        }
    }

    #[test]
    fn test_regenerate_3x3_layout() {
        let mut animator = GridAnimator::new();
        animator.regenerate(&params_with(3, 1.0));

        assert_eq!(animator.element_count(), 9);

        let mut positions: Vec<(f64, f64)> = animator
            .elements()
            .iter()
            .map(|e| (e.original_position().x, e.original_position().z))
            .collect();
        positions.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut expected = Vec::new();
        for x in [-1.0, 0.0, 1.0] {
            for z in [-1.0, 0.0, 1.0] {
                expected.push((x, z));
            }
        }
        assert_eq!(positions, expected);

        for element in animator.elements() {
            assert_eq!(element.original_position().y, 0.0);
        }
    }

    #[test]
    fn test_element_count_is_odd_squared() {
        let mut animator = GridAnimator::new();
        for grid_size in [1, 2, 3, 4, 50, 51] {
            animator.regenerate(&params_with(grid_size, 0.5));
            let side = GridAnimator::side_length(grid_size) as usize;
            assert_eq!(side % 2, 1);
            assert_eq!(animator.element_count(), side * side);
        }
    }

    #[test]
    fn test_grid_size_clamped_to_one() {
        let mut animator = GridAnimator::new();
        animator.regenerate(&params_with(0, 0.5));

        // Degenerate but never empty: a single cube at the origin
        assert_eq!(animator.element_count(), 1);
        assert_eq!(animator.elements()[0].original_position(), DVec3::ZERO);
    }

    #[test]
    fn test_default_round_trip() {
        let mut animator = GridAnimator::new();
        animator.regenerate(&params_with(7, 2.0));

        // Reset to defaults and regenerate: exact default layout
        let defaults = WaveParams::default();
        animator.regenerate(&defaults);

        assert_eq!(animator.element_count(), 51 * 51);
        let max_coord = animator
            .elements()
            .iter()
            .map(|e| e.original_position().x.abs())
            .fold(0.0, f64::max);
        assert_eq!(max_coord, 25.0 * 0.5);
    }

    #[test]
    fn test_regenerate_discards_previous_elements() {
        let mut animator = GridAnimator::new();
        let params = params_with(3, 1.0);
        animator.regenerate(&params);
        animator.tick(2.0, WaveType::Sine, &params);
        assert!(animator.elements()[0].transform.position_y != 0.0);

        // Same size, but fresh elements with untouched transforms
        animator.regenerate(&params);
        assert_eq!(animator.elements()[0].transform.position_y, 0.0);
        assert_eq!(animator.elements()[0].transform.scale, 1.0);
    }

    #[test]
    fn test_tick_applies_transform_constants() {
        let mut animator = GridAnimator::new();
        let params = params_with(3, 1.0);
        animator.regenerate(&params);
        animator.tick(0.7, WaveType::Ripple, &params);

        for element in animator.elements() {
            let pos = element.original_position();
            let wave_y = crate::wave::evaluate(pos.x, pos.z, 0.7, WaveType::Ripple, &params);
            let t = element.transform;
            assert_eq!(t.position_y, wave_y);
            assert_eq!(t.rotation_x, wave_y * 3.0);
            assert_eq!(t.rotation_z, wave_y * 3.5);
            assert_eq!(t.scale, 1.0 + wave_y * 0.5);
        }
    }

    #[test]
    fn test_tick_is_idempotent() {
        let mut animator = GridAnimator::new();
        let params = params_with(5, 0.5);
        animator.regenerate(&params);

        animator.tick(1.3, WaveType::Combined, &params);
        let first: Vec<ElementTransform> =
            animator.elements().iter().map(|e| e.transform).collect();

        animator.tick(1.3, WaveType::Combined, &params);
        let second: Vec<ElementTransform> =
            animator.elements().iter().map(|e| e.transform).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_tick_on_idle_animator_is_noop() {
        let mut animator = GridAnimator::new();
        assert!(animator.is_empty());
        animator.tick(1.0, WaveType::Sine, &WaveParams::default());
        assert!(animator.is_empty());
    }

    #[test]
    fn test_wave_type_switch_has_no_blending() {
        let mut animator = GridAnimator::new();
        let params = params_with(3, 1.0);
        animator.regenerate(&params);

        // Transform after switching equals a fresh evaluation of the new
        // pattern; no trace of the previous pattern remains
        animator.tick(0.4, WaveType::Sine, &params);
        animator.tick(0.4, WaveType::Circular, &params);
        let switched: Vec<ElementTransform> =
            animator.elements().iter().map(|e| e.transform).collect();

        let mut fresh = GridAnimator::new();
        fresh.regenerate(&params);
        fresh.tick(0.4, WaveType::Circular, &params);
        let direct: Vec<ElementTransform> =
            fresh.elements().iter().map(|e| e.transform).collect();

        assert_eq!(switched, direct);
    }
}

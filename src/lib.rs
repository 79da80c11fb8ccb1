//! Wavegrid library - procedural wave-field cube grid animation

pub mod camera;
pub mod cli;
pub mod grid;
pub mod params;
pub mod rendering;
pub mod wave;

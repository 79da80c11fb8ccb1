//! Wavegrid - an animated grid of cubes riding procedural wave fields.
//!
//! Six selectable displacement patterns, live-adjustable parameters, and
//! an orbit camera. One redraw per frame advances the animation and
//! rewrites every cube's transform.

mod camera;
mod cli;
mod grid;
mod params;
mod rendering;
mod wave;

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use camera::OrbitCamera;
use cli::Args;
use grid::GridAnimator;
use params::{OrbitConfig, RecordingConfig, RenderConfig, WaveParams};
use rendering::{CubeInstance, RenderSystem, Uniforms};
use wave::WaveType;

/// Step applied by the parameter-editing keys
const PARAM_STEP: f64 = 0.1;

/// Step applied by the grid-size keys
const GRID_STEP: u32 = 2;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation state
    animator: GridAnimator,
    camera: OrbitCamera,
    wave_type: WaveType,
    params: WaveParams,

    // Configuration
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    // Pointer state for orbit input
    dragging: bool,
    last_cursor: Option<(f64, f64)>,

    // Time tracking
    start_time: Instant,
    frame_num: usize,
    instances: Vec<CubeInstance>,
}

impl App {
    fn new(args: &Args) -> Result<Self, String> {
        let wave_type = args.parse_wave_type()?;
        let params = args.create_wave_params()?;
        let recording_config = args.create_recording_config();

        let mut animator = GridAnimator::new();
        animator.regenerate(&params);
        println!(
            "Grid: {0}x{0} cubes ({1} total), spacing {2}",
            GridAnimator::side_length(params.grid_size),
            animator.element_count(),
            params.spacing
        );
        println!("Wave type: {}", wave_type);

        Ok(Self {
            window: None,
            render_system: None,
            animator,
            camera: OrbitCamera::new(OrbitConfig::default()),
            wave_type,
            params,
            render_config: RenderConfig::default(),
            recording_config,
            dragging: false,
            last_cursor: None,
            start_time: Instant::now(),
            frame_num: 0,
            instances: Vec::new(),
        })
    }

    fn set_wave_type(&mut self, wave_type: WaveType) {
        // No blending: the very next frame evaluates the new pattern
        self.wave_type = wave_type;
        println!("Wave type: {}", wave_type);
    }

    /// Rebuild the grid after a size/spacing edit or a reset
    fn regenerate_grid(&mut self) {
        self.animator.regenerate(&self.params);
        println!(
            "Regenerated grid: {0}x{0} cubes, spacing {1:.2}",
            GridAnimator::side_length(self.params.grid_size),
            self.params.spacing
        );
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Digit1 => self.set_wave_type(WaveType::Sine),
            KeyCode::Digit2 => self.set_wave_type(WaveType::Fbm),
            KeyCode::Digit3 => self.set_wave_type(WaveType::Ripple),
            KeyCode::Digit4 => self.set_wave_type(WaveType::Noise),
            KeyCode::Digit5 => self.set_wave_type(WaveType::Circular),
            KeyCode::Digit6 => self.set_wave_type(WaveType::Combined),

            KeyCode::ArrowUp => {
                self.params.amplitude += PARAM_STEP;
                println!("Amplitude: {:.2}", self.params.amplitude);
            }
            KeyCode::ArrowDown => {
                self.params.amplitude = (self.params.amplitude - PARAM_STEP).max(0.0);
                println!("Amplitude: {:.2}", self.params.amplitude);
            }
            KeyCode::ArrowRight => {
                self.params.frequency += PARAM_STEP;
                println!("Frequency: {:.2}", self.params.frequency);
            }
            KeyCode::ArrowLeft => {
                self.params.frequency -= PARAM_STEP;
                println!("Frequency: {:.2}", self.params.frequency);
            }
            KeyCode::PageUp => {
                self.params.speed += PARAM_STEP;
                println!("Speed: {:.2}", self.params.speed);
            }
            KeyCode::PageDown => {
                self.params.speed -= PARAM_STEP;
                println!("Speed: {:.2}", self.params.speed);
            }

            KeyCode::BracketRight => {
                self.params.grid_size += GRID_STEP;
                self.regenerate_grid();
            }
            KeyCode::BracketLeft => {
                self.params.grid_size = self.params.grid_size.saturating_sub(GRID_STEP).max(1);
                self.regenerate_grid();
            }
            KeyCode::Period => {
                self.params.spacing += PARAM_STEP;
                self.regenerate_grid();
            }
            KeyCode::Comma => {
                self.params.spacing = (self.params.spacing - PARAM_STEP).max(PARAM_STEP);
                self.regenerate_grid();
            }

            KeyCode::Digit0 => {
                // Reset to defaults, keeping the selected FBM preset
                let fbm_pulse = self.params.fbm_pulse;
                self.params = WaveParams {
                    fbm_pulse,
                    ..WaveParams::default()
                };
                println!("Parameters reset to defaults");
                self.regenerate_grid();
            }
            _ => {}
        }
    }

    /// Render a single frame
    ///
    /// Returns false once a recording has captured its final frame.
    fn render_frame(&mut self) -> bool {
        let Some(ref mut render_system) = self.render_system else {
            return true;
        };

        // Recording runs on a fixed timeline so the output is
        // frame-rate independent; live mode uses wall-clock time
        let time_s = match &self.recording_config {
            Some(config) => self.frame_num as f64 / config.fps as f64,
            None => self.start_time.elapsed().as_secs_f64(),
        };

        // Advance the animation: one wave evaluation per cube
        self.animator.tick(time_s, self.wave_type, &self.params);

        self.instances.clear();
        self.instances
            .extend(self.animator.elements().iter().map(CubeInstance::from_element));
        render_system.update_instances(&self.instances);

        // Ease the camera toward the pointer goals and upload uniforms
        self.camera.update();
        let (view_proj, eye) = self.camera.view_proj(&self.render_config);
        render_system.update_uniforms(&Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: eye.to_array(),
            time: time_s as f32,
        });

        if let Err(e) = render_system.render(self.frame_num) {
            eprintln!("Render error: {:?}", e);
        }
        self.frame_num += 1;

        match &self.recording_config {
            Some(config) if self.frame_num >= config.total_frames() => {
                println!(
                    "Recording complete: {} frames in {}",
                    config.total_frames(),
                    config.frames_dir()
                );
                false
            }
            _ => true,
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Wavegrid - Procedural Wave Patterns")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        // Initialize rendering system
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.render_config,
            self.animator.element_count(),
            self.recording_config.clone(),
        ))
        .unwrap();

        println!("\nWavegrid is running!");
        println!("Keys: 1-6 wave type, arrows amplitude/frequency, PgUp/PgDn speed,");
        println!("      [ ] grid size, , . spacing, 0 reset, ESC to quit");
        println!("Mouse: drag to orbit, scroll to zoom\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.start_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    self.handle_key(code);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = state == ElementState::Pressed;
                if !self.dragging {
                    self.last_cursor = None;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.dragging {
                    if let Some((last_x, last_y)) = self.last_cursor {
                        let dx = (position.x - last_x) as f32;
                        let dy = (position.y - last_y) as f32;
                        self.camera.orbit(dx, dy);
                    }
                    self.last_cursor = Some((position.x, position.y));
                } else {
                    self.last_cursor = None;
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.camera.zoom(lines);
            }
            WindowEvent::Resized(size) => {
                self.render_config.window_width = size.width;
                self.render_config.window_height = size.height;
                if let Some(ref mut render_system) = self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if !self.render_frame() {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

fn main() {
    let args = Args::parse();

    println!("Wavegrid - procedural wave-field cube grid");
    println!("Initializing...\n");

    let mut app = match App::new(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}

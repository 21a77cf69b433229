use std::time::Instant;

use log::debug;

use crate::camera::{Camera, Viewport};
use crate::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
use crate::renderer::{FrameBuffer, SceneRenderer};
use crate::scene::{self, Scene, DEFAULT_LAYERS};

/// Camera translation per discrete key press, in world units.
pub const KEY_PAN_STEP: f32 = 10.;
/// Camera rotation per arrow key press, in degrees.
pub const KEY_ROTATE_STEP: f32 = 5.;

/// Host-side output boundary.
///
/// The surface receives every finished frame plus the textual status line
/// and an instantaneous frames-per-second readout. Implementations decide
/// how (and whether) to show them.
pub trait DisplaySurface {
    fn present(&mut self, frame: &FrameBuffer);
    fn set_status(&mut self, status: &str);
    fn set_fps(&mut self, fps: f32);
}

/// Owns the camera and the current scene and drives the
/// mutate-camera-then-render cycle.
///
/// This is the only place that both mutates the camera and triggers a
/// render, keeping input handling decoupled from rendering logic. All
/// methods run synchronously on the caller's thread; the host event loop
/// serializes bursts of input.
pub struct Visualizer {
    camera: Camera,
    scene: Scene,
    renderer: SceneRenderer,
    word: String,
    layers: u32,
    last_pointer: (f32, f32),
    drag_button: Option<MouseButton>,
}

impl Visualizer {
    pub fn new(viewport: Viewport) -> Self {
        Visualizer {
            camera: Camera::new(viewport),
            scene: Scene::default(),
            renderer: SceneRenderer::default(),
            word: String::new(),
            layers: DEFAULT_LAYERS,
            last_pointer: (0., 0.),
            drag_button: None,
        }
    }

    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Starts visualizing a new word with wall-clock entropy.
    pub fn submit_word(&mut self, raw: &str, surface: &mut impl DisplaySurface) {
        self.submit_word_seeded(raw, scene::time_entropy(), surface);
    }

    /// Starts visualizing a new word with a fixed entropy value.
    ///
    /// The raw input is trimmed and lower-cased, the scene is fully
    /// regenerated, and the camera returns to its defaults before the first
    /// frame of the new word is rendered.
    pub fn submit_word_seeded(
        &mut self,
        raw: &str,
        entropy: u64,
        surface: &mut impl DisplaySurface,
    ) {
        self.word = raw.trim().to_lowercase();
        self.scene = Scene::generate(&self.word, self.layers, entropy);
        self.camera.reset();
        debug!("generated {} shapes for '{}'", self.scene.len(), self.word);
        surface.set_status(&format!("Visualizing '{}'", self.word));
        self.redraw(surface);
    }

    /// Feeds one input event through the camera bindings.
    ///
    /// Events that mutate the camera trigger exactly one re-render; all
    /// others (button transitions, unmapped keys) are tracked or ignored
    /// without drawing.
    pub fn handle_event(&mut self, event: InputEvent, surface: &mut impl DisplaySurface) {
        if self.apply_event(event) {
            self.redraw(surface);
        }
    }

    fn apply_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerButton {
                button, state, x, y,
            } => {
                match state {
                    MouseButtonState::Pressed => {
                        self.drag_button = Some(button);
                        self.last_pointer = (x, y);
                    }
                    MouseButtonState::Released => {
                        self.drag_button = None;
                    }
                }
                false
            }
            InputEvent::PointerMoved { x, y } => {
                let (last_x, last_y) = self.last_pointer;
                let (dx, dy) = (x - last_x, y - last_y);
                self.last_pointer = (x, y);
                match self.drag_button {
                    Some(MouseButton::Left) => {
                        self.camera.pan(dx, dy);
                        true
                    }
                    // right drag consumes only the vertical delta, as pitch
                    Some(MouseButton::Right) => {
                        self.camera.rotate(0., dy);
                        true
                    }
                    _ => false,
                }
            }
            InputEvent::MouseWheel { delta } => {
                self.camera.adjust_zoom(delta);
                true
            }
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
            } => match key {
                Key::W => {
                    self.camera.pan(0., -KEY_PAN_STEP);
                    true
                }
                Key::S => {
                    self.camera.pan(0., KEY_PAN_STEP);
                    true
                }
                Key::A => {
                    self.camera.pan(-KEY_PAN_STEP, 0.);
                    true
                }
                Key::D => {
                    self.camera.pan(KEY_PAN_STEP, 0.);
                    true
                }
                Key::Q => {
                    self.camera.dolly(-KEY_PAN_STEP);
                    true
                }
                Key::E => {
                    self.camera.dolly(KEY_PAN_STEP);
                    true
                }
                Key::ArrowLeft => {
                    self.camera.rotate(-KEY_ROTATE_STEP, 0.);
                    true
                }
                Key::ArrowRight => {
                    self.camera.rotate(KEY_ROTATE_STEP, 0.);
                    true
                }
                Key::ArrowUp => {
                    self.camera.rotate(0., -KEY_ROTATE_STEP);
                    true
                }
                Key::ArrowDown => {
                    self.camera.rotate(0., KEY_ROTATE_STEP);
                    true
                }
                Key::Unknown(_) => false,
            },
            InputEvent::Key { .. } => false,
        }
    }

    fn redraw(&mut self, surface: &mut impl DisplaySurface) {
        let start = Instant::now();
        let frame = self.renderer.render(&self.scene, &self.camera);
        let elapsed = start.elapsed().as_secs_f32();

        surface.present(&frame);
        surface.set_fps(if elapsed > 0. { 1. / elapsed } else { 0. });
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::scene::INFINITE_WORD;

    #[derive(Default)]
    struct RecordingSurface {
        presents: usize,
        frame_size: Option<(u32, u32)>,
        status: String,
        fps: Option<f32>,
    }

    impl DisplaySurface for RecordingSurface {
        fn present(&mut self, frame: &FrameBuffer) {
            self.presents += 1;
            self.frame_size = Some((frame.width(), frame.height()));
        }

        fn set_status(&mut self, status: &str) {
            self.status = status.to_string();
        }

        fn set_fps(&mut self, fps: f32) {
            self.fps = Some(fps);
        }
    }

    fn visualizer() -> Visualizer {
        Visualizer::new(Viewport::default())
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
        }
    }

    #[test]
    fn submit_word_normalizes_and_resets() {
        let mut viz = visualizer();
        let mut surface = RecordingSurface::default();

        viz.submit_word_seeded("  Nebula  ", 7, &mut surface);

        assert_eq!(viz.word(), "nebula");
        assert!(!viz.scene().is_empty());
        assert_eq!(viz.camera().position().z, -400.);
        assert_eq!(surface.status, "Visualizing 'nebula'");
        assert_eq!(surface.presents, 1);
        assert_eq!(surface.frame_size, Some((600, 600)));
        assert!(surface.fps.unwrap() >= 0.);
    }

    #[test]
    fn new_word_discards_camera_state() {
        let mut viz = visualizer();
        let mut surface = RecordingSurface::default();

        viz.handle_event(press(Key::D), &mut surface);
        viz.handle_event(InputEvent::MouseWheel { delta: 240. }, &mut surface);
        viz.submit_word_seeded(INFINITE_WORD, 1, &mut surface);

        assert_eq!(viz.camera().position().x, 0.);
        assert_eq!(viz.camera().zoom(), 1.0);
        assert_eq!(viz.scene().len(), DEFAULT_LAYERS as usize);
    }

    #[test]
    fn wheel_zooms_and_rerenders() {
        let mut viz = visualizer();
        let mut surface = RecordingSurface::default();

        viz.handle_event(InputEvent::MouseWheel { delta: 120. }, &mut surface);

        assert_relative_eq!(viz.camera().zoom(), 1.1);
        assert_eq!(surface.presents, 1);
    }

    #[test]
    fn left_drag_pans() {
        let mut viz = visualizer();
        let mut surface = RecordingSurface::default();

        viz.handle_event(
            InputEvent::PointerButton {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 100.,
                y: 100.,
            },
            &mut surface,
        );
        assert_eq!(surface.presents, 0);

        viz.handle_event(InputEvent::PointerMoved { x: 110., y: 95. }, &mut surface);

        assert_relative_eq!(viz.camera().position().x, 10.);
        assert_relative_eq!(viz.camera().position().y, -5.);
        assert_eq!(surface.presents, 1);
    }

    #[test]
    fn right_drag_pitches_only() {
        let mut viz = visualizer();
        let mut surface = RecordingSurface::default();

        viz.handle_event(
            InputEvent::PointerButton {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x: 0.,
                y: 0.,
            },
            &mut surface,
        );
        viz.handle_event(InputEvent::PointerMoved { x: 30., y: 12. }, &mut surface);

        assert_relative_eq!(viz.camera().pitch(), 12.);
        assert_eq!(viz.camera().yaw(), 0.);
        assert_eq!(viz.camera().position().x, 0.);
    }

    #[test]
    fn released_drag_stops_tracking() {
        let mut viz = visualizer();
        let mut surface = RecordingSurface::default();

        viz.handle_event(
            InputEvent::PointerButton {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 0.,
                y: 0.,
            },
            &mut surface,
        );
        viz.handle_event(
            InputEvent::PointerButton {
                button: MouseButton::Left,
                state: MouseButtonState::Released,
                x: 0.,
                y: 0.,
            },
            &mut surface,
        );
        viz.handle_event(InputEvent::PointerMoved { x: 50., y: 50. }, &mut surface);

        assert_eq!(viz.camera().position().x, 0.);
        assert_eq!(surface.presents, 0);
    }

    #[test]
    fn key_bindings_match_contract() {
        let mut viz = visualizer();
        let mut surface = RecordingSurface::default();

        viz.handle_event(press(Key::W), &mut surface);
        assert_relative_eq!(viz.camera().position().y, -KEY_PAN_STEP);
        viz.handle_event(press(Key::S), &mut surface);
        assert_relative_eq!(viz.camera().position().y, 0.);

        viz.handle_event(press(Key::A), &mut surface);
        assert_relative_eq!(viz.camera().position().x, -KEY_PAN_STEP);
        viz.handle_event(press(Key::D), &mut surface);
        assert_relative_eq!(viz.camera().position().x, 0.);

        viz.handle_event(press(Key::Q), &mut surface);
        assert_relative_eq!(viz.camera().position().z, -400. - KEY_PAN_STEP);
        viz.handle_event(press(Key::E), &mut surface);
        assert_relative_eq!(viz.camera().position().z, -400.);

        viz.handle_event(press(Key::ArrowRight), &mut surface);
        assert_relative_eq!(viz.camera().yaw(), KEY_ROTATE_STEP);
        viz.handle_event(press(Key::ArrowDown), &mut surface);
        assert_relative_eq!(viz.camera().pitch(), KEY_ROTATE_STEP);
        viz.handle_event(press(Key::ArrowLeft), &mut surface);
        viz.handle_event(press(Key::ArrowUp), &mut surface);
        assert_eq!(viz.camera().yaw(), 0.);
        assert_eq!(viz.camera().pitch(), 0.);

        assert_eq!(surface.presents, 10);
    }

    #[test]
    fn key_release_does_not_render() {
        let mut viz = visualizer();
        let mut surface = RecordingSurface::default();

        viz.handle_event(
            InputEvent::Key {
                key: Key::W,
                state: KeyState::Released,
            },
            &mut surface,
        );
        viz.handle_event(press(Key::Unknown(99)), &mut surface);

        assert_eq!(surface.presents, 0);
        assert_eq!(viz.camera().position().y, 0.);
    }
}

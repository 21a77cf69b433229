mod camera;
mod controller;
pub mod input;
mod renderer;
mod scene;

pub use camera::{Camera, Viewport, DEFAULT_VIEWPORT_SIZE, FOV, ZOOM_MAX, ZOOM_MIN};
pub use controller::{DisplaySurface, Visualizer, KEY_PAN_STEP, KEY_ROTATE_STEP};
pub use input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
pub use renderer::{
    draw_circle_outline, draw_line, draw_polygon_outline, draw_rect_outline, draw_text,
    FrameBuffer, RenderSettings, SceneRenderer, MIN_SCREEN_SIZE,
};
pub use scene::{
    time_entropy, Scene, Shape, ShapeKind, COLOR_PALETTE, DEFAULT_LAYERS, EMPTY_WORD_SEED,
    INFINITE_WORD, LAYER_DEPTH, SHAPE_KINDS, SPACE_SIZE,
};

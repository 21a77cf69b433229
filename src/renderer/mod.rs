mod draw;
mod font;

pub use draw::{draw_circle_outline, draw_line, draw_polygon_outline, draw_rect_outline};
pub use font::draw_text;

use image::{Rgb, RgbImage};

use crate::camera::Camera;
use crate::scene::{Scene, Shape, ShapeKind};

/// One finished frame, handed to the display surface as-is.
pub type FrameBuffer = RgbImage;

/// Projected shapes at or below this screen size are invisible and skipped.
pub const MIN_SCREEN_SIZE: f32 = 1.;

const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const LABELS: [&str; 2] = ["Verbum Renderer", "Model: VBM 0.1"];
const LABEL_MARGIN_X: i32 = 10;
const LABEL_OFFSETS_Y: [i32; 2] = [30, 15];

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub background: Rgb<u8>,
    pub line_width: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: Rgb([255, 255, 255]),
            line_width: 2,
        }
    }
}

pub struct SceneRenderer {
    settings: RenderSettings,
}

impl SceneRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        SceneRenderer { settings }
    }

    /// Rasterizes the scene through `camera` into a fresh frame buffer.
    ///
    /// Shapes draw in scene order as outlines. A shape is skipped when its
    /// anchor projects outside the viewport or its projected size is at or
    /// below [`MIN_SCREEN_SIZE`]; both are normal per-frame conditions, not
    /// errors. Marker entries are a reserved hook and draw nothing.
    pub fn render(&self, scene: &Scene, camera: &Camera) -> FrameBuffer {
        let viewport = camera.viewport();
        let [width, height] = viewport.size();
        let mut frame =
            RgbImage::from_pixel(viewport.width(), viewport.height(), self.settings.background);

        for shape in scene.shapes() {
            match shape {
                Shape::Marker { .. } => {}
                Shape::Primitive {
                    kind,
                    position,
                    size,
                    color,
                } => {
                    let (screen, scale) = camera.project(*position);
                    let screen_size = *size * scale;
                    if !(0. ..=width).contains(&screen.x)
                        || !(0. ..=height).contains(&screen.y)
                        || screen_size <= MIN_SCREEN_SIZE
                    {
                        continue;
                    }
                    match kind {
                        ShapeKind::Circle => draw_circle_outline(
                            &mut frame,
                            screen.x,
                            screen.y,
                            screen_size,
                            *color,
                            self.settings.line_width,
                        ),
                        ShapeKind::Rectangle => draw_rect_outline(
                            &mut frame,
                            screen.x,
                            screen.y,
                            screen_size,
                            *color,
                            self.settings.line_width,
                        ),
                        ShapeKind::Triangle => draw_polygon_outline(
                            &mut frame,
                            &[
                                (screen.x, screen.y - screen_size),
                                (screen.x - screen_size, screen.y + screen_size),
                                (screen.x + screen_size, screen.y + screen_size),
                            ],
                            *color,
                        ),
                    }
                }
            }
        }

        // labels go on last so they stay on top
        for (label, offset) in LABELS.iter().zip(LABEL_OFFSETS_Y) {
            draw_text(
                &mut frame,
                LABEL_MARGIN_X,
                height as i32 - offset,
                label,
                LABEL_COLOR,
            );
        }

        frame
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        SceneRenderer::new(RenderSettings::default())
    }
}

use nalgebra::{Point2, Point3, Vector2};

/// Focal-length-like constant controlling perspective strength.
pub const FOV: f32 = 500.;

pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 10.0;

/// Platform wheel tick unit; one notch of `wheel_delta` is 120 of these.
const WHEEL_TICK: f32 = 120.;
/// Zoom change per wheel notch.
const ZOOM_NOTCH_STEP: f32 = 0.1;

const DEFAULT_POSITION: [f32; 3] = [0., 0., -400.];
pub const DEFAULT_VIEWPORT_SIZE: [u32; 2] = [600, 600];

#[derive(Debug, Clone)]
pub struct Viewport {
    size: [u32; 2],
}

impl Viewport {
    pub fn new(size: [u32; 2]) -> Self {
        Viewport { size }
    }

    pub fn resize(&mut self, size: [u32; 2]) {
        self.size = size;
    }

    pub fn size(&self) -> [f32; 2] {
        [self.size[0] as f32, self.size[1] as f32]
    }

    pub fn width(&self) -> u32 {
        self.size[0]
    }

    pub fn height(&self) -> u32 {
        self.size[1]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(DEFAULT_VIEWPORT_SIZE)
    }
}

/// Perspective camera over a fixed-size viewport.
///
/// State is position, pitch/yaw in degrees and a zoom factor, mutated only
/// through the transform operations below. The camera looks along +z with
/// its own z stored as a negative offset.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Point3<f32>,
    /// (pitch, yaw) in degrees, accumulated unbounded.
    rotation: Vector2<f32>,
    zoom: f32,
    viewport: Viewport,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        Camera {
            position: Point3::from(DEFAULT_POSITION),
            rotation: Vector2::zeros(),
            zoom: 1.0,
            viewport,
        }
    }

    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    pub fn pitch(&self) -> f32 {
        self.rotation.x
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Translates the camera parallel to the screen plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Moves the camera forward/back along the view axis.
    pub fn dolly(&mut self, dz: f32) {
        self.position.z += dz;
    }

    /// Accumulates yaw/pitch in degrees.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.rotation.y += d_yaw;
        self.rotation.x += d_pitch;
    }

    /// Applies a wheel delta in 120-unit platform ticks; one notch changes
    /// zoom by 0.1, clamped to [`ZOOM_MIN`]..[`ZOOM_MAX`].
    pub fn adjust_zoom(&mut self, wheel_delta: f32) {
        self.zoom += wheel_delta / WHEEL_TICK * ZOOM_NOTCH_STEP;
        self.zoom = self.zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Restores the default state (used on new-word events).
    pub fn reset(&mut self) {
        self.position = Point3::from(DEFAULT_POSITION);
        self.rotation = Vector2::zeros();
        self.zoom = 1.0;
    }

    /// Projects a world-space point to screen space.
    ///
    /// Returns the unclamped screen position and the perspective scale
    /// factor; the caller decides visibility. A point exactly on the focal
    /// plane would blow up the perspective divide, so it falls back to
    /// scale 1.
    pub fn project(&self, point: Point3<f32>) -> (Point2<f32>, f32) {
        let mut x = point.x - self.position.x;
        let mut y = point.y - self.position.y;
        let mut z = point.z + self.position.z;

        let (sin_p, cos_p) = self.rotation.x.to_radians().sin_cos();
        (y, z) = (y * cos_p - z * sin_p, y * sin_p + z * cos_p);

        let (sin_y, cos_y) = self.rotation.y.to_radians().sin_cos();
        (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);

        let denom = FOV + z;
        let scale = if denom != 0. { FOV / denom } else { 1. };

        let [width, height] = self.viewport.size();
        let screen_x = width / 2. + x * scale * self.zoom;
        let screen_y = height / 2. + y * scale * self.zoom;
        (Point2::new(screen_x, screen_y), scale)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Viewport::default())
    }
}

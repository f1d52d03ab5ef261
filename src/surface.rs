use glam::Vec2;

/// RGB colour with a floating alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn white(a: f32) -> Self {
        Self::new(255, 255, 255, a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient radius, `0.0` at the center.
    pub offset: f32,
    pub color: Rgba,
}

/// Radial gradient from the center out to `radius`.
///
/// Stops are kept in insertion order and are expected to have ascending offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            stops: Vec::with_capacity(2),
        }
    }

    pub fn with_stop(mut self, offset: f32, color: Rgba) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// A 2D drawing target in surface coordinates.
pub trait RenderSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fills the circle spanned by the gradient's center and radius.
    fn fill_circle(&mut self, fill: &RadialGradient);
}

/// Asks the host to run the next frame.
pub trait FrameScheduler {
    fn request_frame(&self);
}

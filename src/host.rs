//! Glue between the field and an `egui` frame.
//!
//! The painter only lives for one frame, so an [`EguiSurface`] is built per
//! frame and handed to [`ParticleField::tick`](crate::ParticleField::tick).

use eframe::egui::{self, Color32, Mesh, Painter, Pos2, Rect};
use glam::Vec2;

use crate::pointer::PointerEvent;
use crate::surface::{FrameScheduler, RadialGradient, RenderSurface, Rgba};

/// Segments used for the smallest glow; larger glows get more.
const MIN_SEGMENTS: usize = 12;
const MAX_SEGMENTS: usize = 64;

impl FrameScheduler for egui::Context {
    fn request_frame(&self) {
        self.request_repaint();
    }
}

pub fn to_color32(color: Rgba) -> Color32 {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

/// Maps surface coordinates onto a screen rectangle.
///
/// The surface may be taller than the rect (overscan); it is squeezed to
/// fit, the way a canvas with a larger backing size is stretched by CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    pub origin: Pos2,
    /// Screen points per surface unit, per axis.
    pub scale: Vec2,
}

impl SurfaceTransform {
    pub fn new(origin: Pos2, scale: Vec2) -> Self {
        Self { origin, scale }
    }

    /// Transform for a surface scaled up from `rect` by `input_scale`.
    pub fn fit(rect: Rect, input_scale: Vec2) -> Self {
        Self::new(rect.min, Vec2::ONE / input_scale)
    }

    pub fn to_screen(&self, point: Vec2) -> Pos2 {
        Pos2::new(
            self.origin.x + point.x * self.scale.x,
            self.origin.y + point.y * self.scale.y,
        )
    }
}

/// Builds a triangle mesh for a gradient-filled circle.
///
/// Each stop becomes a ring of vertices, so vertex colour interpolation
/// reproduces the gradient exactly between stops. A stop at offset 0
/// collapses to a single center vertex.
pub fn glow_mesh(fill: &RadialGradient, transform: &SurfaceTransform) -> Mesh {
    let mut mesh = Mesh::default();
    if fill.stops.is_empty() || fill.radius <= 0.0 {
        return mesh;
    }

    let on_screen = fill.radius * transform.scale.max_element();
    let segments = ((on_screen * 2.0).ceil() as usize).clamp(MIN_SEGMENTS, MAX_SEGMENTS);

    let mut previous: Option<(u32, bool)> = None;
    for stop in &fill.stops {
        let color = to_color32(stop.color);
        let ring_radius = fill.radius * stop.offset.clamp(0.0, 1.0);
        let start = mesh.vertices.len() as u32;

        let is_point = ring_radius <= 0.0;
        if is_point {
            mesh.colored_vertex(transform.to_screen(fill.center), color);
        } else {
            for i in 0..segments {
                let angle = std::f32::consts::TAU * i as f32 / segments as f32;
                let offset = Vec2::new(angle.cos(), angle.sin()) * ring_radius;
                mesh.colored_vertex(transform.to_screen(fill.center + offset), color);
            }
        }

        if let Some((inner, inner_is_point)) = previous {
            if !is_point {
                stitch(&mut mesh, inner, inner_is_point, start, segments as u32);
            }
        }
        previous = Some((start, is_point));
    }

    mesh
}

fn stitch(mesh: &mut Mesh, inner: u32, inner_is_point: bool, outer: u32, segments: u32) {
    for i in 0..segments {
        let next = (i + 1) % segments;
        if inner_is_point {
            mesh.add_triangle(inner, outer + i, outer + next);
        } else {
            mesh.add_triangle(inner + i, outer + i, outer + next);
            mesh.add_triangle(inner + i, outer + next, inner + next);
        }
    }
}

/// A [`RenderSurface`] that paints through an `egui` painter.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    transform: SurfaceTransform,
    background: Color32,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, transform: SurfaceTransform, background: [u8; 3]) -> Self {
        let [r, g, b] = background;
        Self {
            painter,
            transform,
            background: Color32::from_rgb(r, g, b),
        }
    }
}

impl RenderSurface for EguiSurface<'_> {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let min = self.transform.to_screen(Vec2::new(x, y));
        let max = self.transform.to_screen(Vec2::new(x + width, y + height));
        self.painter
            .rect_filled(Rect::from_min_max(min, max), 0.0, self.background);
    }

    fn fill_circle(&mut self, fill: &RadialGradient) {
        let mesh = glow_mesh(fill, &self.transform);
        if !mesh.is_empty() {
            self.painter.add(egui::Shape::mesh(mesh));
        }
    }
}

/// Translates this frame's `egui` pointer events into viewport-relative
/// [`PointerEvent`]s. Touches arrive here already mapped to pointer events.
pub fn pointer_events(input: &egui::InputState, viewport: Rect) -> Vec<PointerEvent> {
    let local = |pos: Pos2| (pos.x - viewport.min.x, pos.y - viewport.min.y);

    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerMoved(pos) => {
                let (x, y) = local(*pos);
                Some(PointerEvent::Move { x, y })
            }
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } => {
                let (x, y) = local(*pos);
                Some(PointerEvent::Down { x, y })
            }
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => Some(PointerEvent::Up),
            egui::Event::PointerGone => Some(PointerEvent::Up),
            _ => None,
        })
        .collect()
}

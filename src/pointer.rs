use glam::Vec2;

/// One pointer or touch event, in the coordinate space of whoever sends it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    /// Release, or the pointer leaving the surface.
    Up,
}

impl PointerEvent {
    /// Multiplies the event coordinates component-wise.
    pub fn scaled(self, scale: Vec2) -> Self {
        match self {
            PointerEvent::Down { x, y } => PointerEvent::Down {
                x: x * scale.x,
                y: y * scale.y,
            },
            PointerEvent::Move { x, y } => PointerEvent::Move {
                x: x * scale.x,
                y: y * scale.y,
            },
            PointerEvent::Up => PointerEvent::Up,
        }
    }
}

/// Last known pointer position in surface coordinates and whether it is held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
    active: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => {
                self.position = Some(Vec2::new(x, y));
                self.active = true;
            }
            // Hovering tracks the position without activating attraction.
            PointerEvent::Move { x, y } => {
                self.position = Some(Vec2::new(x, y));
            }
            PointerEvent::Up => {
                self.position = None;
                self.active = false;
            }
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The position to attract towards, if the pointer is held down.
    pub fn attractor(&self) -> Option<Vec2> {
        if self.active { self.position } else { None }
    }
}

//! Viewport interaction state machine.
//!
//! ```text
//!          pointer_down
//!   Idle ───────────────▶ Dragging ──┐ pointer_move
//!    ▲                       │  ▲    │
//!    └───────────────────────┘  └────┘
//!      pointer_up | pointer_leave
//! ```
//!
//! Zoom inputs are accepted in either state and never touch the pan.

use kurbo::{Point, Vec2};
use tracing::{debug, trace};

use crate::config::ZoomSettings;
use crate::error::Result;
use crate::viewport::Viewport;

/// Snapshot taken when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_pointer: Point,
    pub origin_pan: Vec2,
}

impl DragSession {
    /// Pan for the current pointer, measured from the drag origin rather
    /// than accumulated per move.
    pub fn pan_at(&self, pointer: Point) -> Vec2 {
        pointer - self.origin_pointer + self.origin_pan
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Raw pointer input from the interactive surface, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

/// One discrete wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelTick {
    /// Zooms in by the wheel-down factor.
    Down,
    /// Zooms out by the wheel-up factor.
    Up,
}

impl WheelTick {
    /// Classifies a raw wheel delta the way the browser client did: a
    /// negative vertical delta zooms in. A zero delta is not a tick.
    pub fn from_delta_y(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::Down)
        } else if delta_y > 0.0 {
            Some(Self::Up)
        } else {
            None
        }
    }
}

/// Owns the viewport of one visualization and every write to it.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    viewport: Viewport,
    limits: ZoomSettings,
    state: InteractionState,
}

impl ViewportController {
    /// Fails if `limits` would let the zoom leave a positive, ordered range.
    pub fn new(limits: ZoomSettings) -> Result<Self> {
        limits.validate()?;
        Ok(Self {
            viewport: Viewport::default(),
            limits,
            state: InteractionState::Idle,
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging(_))
    }

    /// Dispatches a pointer event. Returns `true` if the viewport changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(pointer) => {
                self.pointer_down(pointer);
                false
            }
            PointerEvent::Move(pointer) => self.pointer_move(pointer),
            PointerEvent::Up => {
                self.pointer_up();
                false
            }
            PointerEvent::Leave => {
                self.pointer_leave();
                false
            }
        }
    }

    /// Starts a drag. A second press while dragging restarts the session.
    pub fn pointer_down(&mut self, pointer: Point) {
        let session = DragSession {
            origin_pointer: pointer,
            origin_pan: self.viewport.pan(),
        };
        debug!(?pointer, pan = ?session.origin_pan, "drag started");
        self.state = InteractionState::Dragging(session);
    }

    /// Moves the pan with the pointer while dragging; ignored when idle.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let InteractionState::Dragging(session) = self.state else {
            return false;
        };
        let pan = session.pan_at(pointer);
        trace!(?pointer, ?pan, "drag moved");
        self.viewport.set_pan(pan)
    }

    pub fn pointer_up(&mut self) {
        self.end_drag("pointer up");
    }

    /// The pointer left the surface; any drag in progress ends here.
    pub fn pointer_leave(&mut self) {
        self.end_drag("pointer left surface");
    }

    fn end_drag(&mut self, cause: &str) {
        if self.is_dragging() {
            debug!(cause, pan = ?self.viewport.pan(), "drag ended");
        }
        self.state = InteractionState::Idle;
    }

    pub fn wheel(&mut self, tick: WheelTick) -> bool {
        let factor = match tick {
            WheelTick::Down => self.limits.wheel_down_factor,
            WheelTick::Up => self.limits.wheel_up_factor,
        };
        self.scale_zoom(factor)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.scale_zoom(self.limits.step_factor)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.scale_zoom(1.0 / self.limits.step_factor)
    }

    /// Restores zoom 1 and zero pan. Does not interrupt a drag in progress.
    pub fn reset_view(&mut self) -> bool {
        let changed = self.viewport.reset();
        if changed {
            debug!("view reset");
        }
        changed
    }

    fn scale_zoom(&mut self, factor: f64) -> bool {
        let changed = self.viewport.scale_zoom(factor, &self.limits);
        if changed {
            debug!(zoom = self.viewport.zoom(), "zoom changed");
        }
        changed
    }
}

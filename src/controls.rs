//! Discrete zoom commands for the host's button strip.

use crate::controller::ViewportController;

/// Command surface shared by anything that owns a viewport controller.
///
/// Each method returns `true` if the viewport changed.
pub trait ZoomControls {
    fn zoom_in(&mut self) -> bool;
    fn zoom_out(&mut self) -> bool;
    fn reset_view(&mut self) -> bool;
}

impl ZoomControls for ViewportController {
    fn zoom_in(&mut self) -> bool {
        ViewportController::zoom_in(self)
    }

    fn zoom_out(&mut self) -> bool {
        ViewportController::zoom_out(self)
    }

    fn reset_view(&mut self) -> bool {
        ViewportController::reset_view(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

impl ZoomCommand {
    /// Commands in the order their buttons are stacked, top to bottom.
    pub const ALL: [Self; 3] = [Self::In, Self::Out, Self::Reset];

    /// Button tooltip.
    pub fn title(self) -> &'static str {
        match self {
            Self::In => "Zoom In",
            Self::Out => "Zoom Out",
            Self::Reset => "Reset",
        }
    }

    pub fn apply<C: ZoomControls + ?Sized>(self, target: &mut C) -> bool {
        match self {
            Self::In => target.zoom_in(),
            Self::Out => target.zoom_out(),
            Self::Reset => target.reset_view(),
        }
    }
}

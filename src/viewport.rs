//! Pan/zoom state applied to the whole scene.

use kurbo::{Affine, Vec2};

use crate::config::ZoomSettings;

/// Uniform zoom plus a pan offset, both in drawing-area units.
///
/// The display transform is `translate(pan) * scale(zoom)` about the
/// coordinate-space origin, so zooming with a non-zero pan shifts the scene
/// relative to the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl Viewport {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns `true` if the pan changed.
    pub fn set_pan(&mut self, pan: Vec2) -> bool {
        if self.pan == pan {
            return false;
        }
        self.pan = pan;
        true
    }

    /// Multiplies the zoom by `factor`, saturating at the configured limits.
    ///
    /// Returns `true` if the zoom changed.
    pub fn scale_zoom(&mut self, factor: f64, limits: &ZoomSettings) -> bool {
        let zoom = limits.clamp(self.zoom * factor);
        if zoom == self.zoom {
            return false;
        }
        self.zoom = zoom;
        true
    }

    /// Back to zoom 1 and zero pan. Returns `true` if anything changed.
    pub fn reset(&mut self) -> bool {
        let changed = *self != Self::default();
        *self = Self::default();
        changed
    }

    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }
}

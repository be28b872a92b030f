//! Host surface seam and the scoped wheel listener.
//!
//! Wheel events must be captured non-passively so the host page does not
//! scroll while the map zooms. The listener is held by a guard that detaches
//! it when dropped, including during unwinding.

use tracing::debug;

use crate::error::Result;

/// Handle returned by the host for an attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The interactive element the visualization is mounted on.
pub trait InteractiveSurface {
    /// Starts routing wheel events to the visualization.
    fn attach_wheel_listener(&mut self) -> Result<ListenerId>;

    /// Stops routing wheel events. Must not fail.
    fn detach_wheel_listener(&mut self, id: ListenerId);
}

/// An attached wheel listener; detaches on drop.
#[derive(Debug)]
pub struct WheelListener<'s, S: InteractiveSurface> {
    surface: &'s mut S,
    id: ListenerId,
}

impl<'s, S: InteractiveSurface> WheelListener<'s, S> {
    pub fn attach(surface: &'s mut S) -> Result<Self> {
        let id = surface.attach_wheel_listener()?;
        debug!(?id, "wheel listener attached");
        Ok(Self { surface, id })
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn surface(&self) -> &S {
        &*self.surface
    }
}

impl<S: InteractiveSurface> Drop for WheelListener<'_, S> {
    fn drop(&mut self) {
        self.surface.detach_wheel_listener(self.id);
        debug!(id = ?self.id, "wheel listener detached");
    }
}

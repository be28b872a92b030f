//! Recording implementation of the host surface.

use route_viz::surface::{InteractiveSurface, ListenerId};
use route_viz::{Error, Result};

#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    pub attached: Vec<ListenerId>,
    pub detached: Vec<ListenerId>,
    pub refuse_attach: bool,
}

impl RecordingSurface {
    pub fn refusing() -> Self {
        Self {
            refuse_attach: true,
            ..Self::default()
        }
    }

    pub fn active_listeners(&self) -> usize {
        self.attached.len() - self.detached.len()
    }
}

impl InteractiveSurface for RecordingSurface {
    fn attach_wheel_listener(&mut self) -> Result<ListenerId> {
        if self.refuse_attach {
            return Err(Error::Surface("surface not in document".to_string()));
        }
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.attached.push(id);
        Ok(id)
    }

    fn detach_wheel_listener(&mut self, id: ListenerId) {
        self.detached.push(id);
    }
}

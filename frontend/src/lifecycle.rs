//! Keeps a second submission from starting while one is in flight.
//!
//! Futures spawned with `spawn_local` outlive the component that started them,
//! so sections pair this gate with a `tokio_util` cancellation token whose
//! drop guard lives in an effect cleanup.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct SubmitGate {
    busy: Rc<Cell<bool>>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a pass if nothing is in flight. The gate reopens when the pass drops.
    pub fn try_enter(&self) -> Option<GatePass> {
        if self.busy.replace(true) {
            None
        } else {
            Some(GatePass {
                busy: self.busy.clone(),
            })
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

#[derive(Debug)]
pub struct GatePass {
    busy: Rc<Cell<bool>>,
}

impl Drop for GatePass {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

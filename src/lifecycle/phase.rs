//! Bootstrap phase state machine.
//!
//! # States
//! - Loading: from process start until the module join completes
//! - Running: `main` has been invoked
//!
//! # State Transitions
//! ```text
//! Loading → Running: immediately before main()
//! ```
//!
//! A failed bootstrap stays in Loading.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Loading = 0,
    Running = 1,
}

impl From<u8> for BootPhase {
    fn from(val: u8) -> Self {
        match val {
            1 => BootPhase::Running,
            _ => BootPhase::Loading,
        }
    }
}

/// Shared view of a bootstrap's phase. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct PhaseHandle {
    state: Arc<AtomicU8>,
}

impl PhaseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> BootPhase {
        BootPhase::from(self.state.load(Ordering::Acquire))
    }

    pub(crate) fn enter_running(&self) {
        let previous = self.state.swap(BootPhase::Running as u8, Ordering::AcqRel);
        if previous != BootPhase::Running as u8 {
            tracing::debug!("Phase: loading → running");
        }
    }
}

//! Link liveness watchdog.
//!
//! Detects a stalled or desynchronized link and forces a clean restart of
//! byte reception: the partially assembled frame is discarded and the
//! transport's single-byte receive is re-armed. The restart is blunt and
//! idempotent; it makes no attempt to diagnose *why* the link went quiet.

use log::warn;

use crate::receiver::FrameReceiver;
use crate::state::SensorState;
use crate::transport::Transport;

/// Silence window after which the link counts as stalled.
pub const LINK_TIMEOUT_MS: u32 = 100;

/// Minimum spacing between restart attempts.
pub const RESTART_HOLDOFF_MS: u32 = 100;

/// Periodic liveness check over the receive path.
#[derive(Debug, Default)]
pub struct LinkWatchdog {
    /// Tick of the most recent restart attempt.
    last_restart_ms: u32,
}

impl LinkWatchdog {
    /// Create a new watchdog.
    pub fn new() -> Self {
        LinkWatchdog::default()
    }

    /// Run one liveness check. Returns whether a restart was performed.
    ///
    /// A restart fires when no valid frame has arrived for
    /// [`LINK_TIMEOUT_MS`] ticks AND at least [`RESTART_HOLDOFF_MS`] ticks
    /// have passed since the previous restart. The holdoff bounds restarts
    /// on a persistently dead link no matter how often the check runs.
    pub fn check<T: Transport>(
        &mut self,
        now_ms: u32,
        state: &SensorState,
        receiver: &mut FrameReceiver,
        transport: &mut T,
    ) -> bool {
        if now_ms.wrapping_sub(state.last_frame_ms) < LINK_TIMEOUT_MS {
            return false;
        }
        if now_ms.wrapping_sub(self.last_restart_ms) < RESTART_HOLDOFF_MS {
            return false;
        }

        self.last_restart_ms = now_ms;
        receiver.reset();
        transport.arm_receive();
        warn!(
            "no valid frame for {}ms, restarting reception",
            now_ms.wrapping_sub(state.last_frame_ms)
        );
        true
    }
}

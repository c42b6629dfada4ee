use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Holds at most one pending timeout. Scheduling again or dropping the
/// holder cancels whatever was pending. Once closed, nothing new is
/// scheduled.
#[derive(Default)]
pub struct AckTimer {
    pending: Option<Timeout>,
    closed: bool,
}

impl AckTimer {
    pub fn schedule(&mut self, after: Duration, task: impl FnOnce() + 'static) {
        if self.closed {
            log::debug!("Timer closed, dropping scheduled task");
            return;
        }
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        // replacing drops the old Timeout, which clears it
        self.pending = Some(Timeout::new(millis, task));
    }

    /// Cancels the pending task and refuses new ones. Call on unmount.
    pub fn close(&mut self) {
        self.closed = true;
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}

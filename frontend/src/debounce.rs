use gloo_timers::callback::Timeout;

/// Runs only the most recently scheduled callback, once `delay_ms` has
/// passed without another call to [`Debouncer::schedule`]. Replaced
/// callbacks are dropped unrun.
///
/// Dropping the debouncer cancels whatever is pending.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(self.delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}
